//! Drawing surface trait.
//!
//! The particle field never talks to a canvas directly. The browser bridge
//! implements `Surface` on top of `CanvasRenderingContext2d`; tests implement it
//! with a recorder.

use super::color::Rgb;

/// Immediate-mode 2D drawing target, in canvas pixel space.
pub trait Surface {
    /// Erase the whole `width` × `height` area.
    fn clear(&mut self, width: f64, height: f64);

    /// Fill a circle centred at (x, y).
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgb, alpha: f64);

    /// Stroke a straight line between two points.
    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], width: f64, color: Rgb, alpha: f64);
}

/// Recording `Surface` double for asserting on frame output without a browser.
#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    /// One recorded draw call.
    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCommand {
        Clear { width: f64, height: f64 },
        Circle { x: f64, y: f64, radius: f64, alpha: f64 },
        Line { from: [f64; 2], to: [f64; 2], alpha: f64 },
    }

    /// A `Surface` that records every call. Used to assert on frame output
    /// without a browser.
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub commands: Vec<DrawCommand>,
    }

    impl RecordingSurface {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn circles(&self) -> usize {
            self.commands
                .iter()
                .filter(|c| matches!(c, DrawCommand::Circle { .. }))
                .count()
        }

        pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
            self.commands
                .iter()
                .filter(|c| matches!(c, DrawCommand::Line { .. }))
        }
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self, width: f64, height: f64) {
            self.commands.push(DrawCommand::Clear { width, height });
        }

        fn fill_circle(&mut self, x: f64, y: f64, radius: f64, _color: Rgb, alpha: f64) {
            self.commands.push(DrawCommand::Circle { x, y, radius, alpha });
        }

        fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], _width: f64, _color: Rgb, alpha: f64) {
            self.commands.push(DrawCommand::Line { from, to, alpha });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::recording::{DrawCommand, RecordingSurface};
    use super::*;

    #[test]
    fn recorder_keeps_call_order() {
        let mut s = RecordingSurface::new();
        s.clear(10.0, 10.0);
        s.fill_circle(1.0, 1.0, 0.5, Rgb::new(0, 0, 0), 0.2);
        s.stroke_line([0.0, 0.0], [1.0, 1.0], 0.5, Rgb::new(0, 0, 0), 0.1);

        assert_eq!(s.commands[0], DrawCommand::Clear { width: 10.0, height: 10.0 });
        assert_eq!(s.circles(), 1);
        assert_eq!(s.lines().count(), 1);
    }
}
