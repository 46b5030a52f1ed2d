use crate::api::config::ParticleConfig;
use crate::core::rng::Rng;
use crate::renderer::traits::Surface;
use super::particle::Particle;

/// Lifecycle of the particle field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    /// No canvas size known yet.
    Uninitialized,
    /// Backing size set, no particles.
    Sized,
    /// Particles created, animation not started.
    Populated,
    /// Frames are being drawn.
    Running,
    /// Section is off-screen; no frames scheduled.
    Paused,
}

/// A line between two nearby particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub from: [f64; 2],
    pub to: [f64; 2],
    pub alpha: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Activity {
    Idle,
    Running,
    Paused,
}

/// The hero background: particles drifting with edge wrap, linked by faint
/// lines when close.
pub struct ParticleField {
    config: ParticleConfig,
    rng: Rng,
    size: Option<(u32, u32)>,
    particles: Option<Vec<Particle>>,
    activity: Activity,
}

impl ParticleField {
    pub fn new(config: ParticleConfig, seed: u64) -> Self {
        Self {
            config,
            rng: Rng::new(seed),
            size: None,
            particles: None,
            activity: Activity::Idle,
        }
    }

    pub fn state(&self) -> FieldState {
        match (self.size, &self.particles, self.activity) {
            (None, _, _) => FieldState::Uninitialized,
            (Some(_), None, _) => FieldState::Sized,
            (Some(_), Some(_), Activity::Idle) => FieldState::Populated,
            (Some(_), Some(_), Activity::Running) => FieldState::Running,
            (Some(_), Some(_), Activity::Paused) => FieldState::Paused,
        }
    }

    pub fn width(&self) -> f64 {
        self.size.map_or(0.0, |(w, _)| w as f64)
    }

    pub fn height(&self) -> f64 {
        self.size.map_or(0.0, |(_, h)| h as f64)
    }

    pub fn particles(&self) -> &[Particle] {
        self.particles.as_deref().unwrap_or(&[])
    }

    /// Particle count for a canvas: one per `area_per_particle` px², rounded down.
    pub fn count_for(&self, width: u32, height: u32) -> usize {
        let area = width as f64 * height as f64;
        (area / self.config.area_per_particle).floor() as usize
    }

    /// Record the canvas backing size. Existing particles are kept until
    /// `populate` replaces them.
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.size = Some((width, height));
    }

    /// Replace the whole particle set for the current size.
    pub fn populate(&mut self) {
        let (w, h) = self.size.unwrap_or((0, 0));
        let count = self.count_for(w, h);
        let (width, height) = (w as f64, h as f64);
        let particles = (0..count)
            .map(|_| Particle::random(&mut self.rng, width, height, &self.config))
            .collect();
        self.particles = Some(particles);
        log::debug!("particle field populated: {} particles for {}x{}", count, w, h);
    }

    /// Window resize: new backing size, fresh particles.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.set_size(width, height);
        self.populate();
    }

    /// Mark the animation as started.
    pub fn start(&mut self) {
        self.activity = Activity::Running;
    }

    /// Section visibility changed. Returns whether frames should be running.
    pub fn on_section_visibility(&mut self, is_intersecting: bool) -> bool {
        self.activity = if is_intersecting {
            Activity::Running
        } else {
            Activity::Paused
        };
        is_intersecting
    }

    /// Alpha of a connection line at `distance`: linear from `link_alpha` at 0
    /// down to 0 at `link_distance`.
    pub fn connection_alpha(&self, distance: f64) -> f64 {
        self.config.link_alpha * (1.0 - distance / self.config.link_distance)
    }

    /// Every unordered pair closer than `link_distance`. O(n²).
    pub fn connections(&self) -> impl Iterator<Item = Connection> + '_ {
        let particles = self.particles();
        particles.iter().enumerate().flat_map(move |(i, a)| {
            particles[i + 1..].iter().filter_map(move |b| {
                let distance = a.pos.distance(b.pos);
                (distance < self.config.link_distance).then(|| Connection {
                    from: a.pos.to_array(),
                    to: b.pos.to_array(),
                    alpha: self.connection_alpha(distance),
                })
            })
        })
    }

    /// Integrate and wrap every particle by one frame.
    pub fn step(&mut self) {
        let (width, height) = (self.width(), self.height());
        if let Some(particles) = &mut self.particles {
            for p in particles.iter_mut() {
                p.step(width, height);
            }
        }
    }

    /// Draw the current particles and their connections.
    pub fn draw<S: Surface>(&self, surface: &mut S) {
        let color = self.config.color;
        for p in self.particles() {
            surface.fill_circle(p.pos.x, p.pos.y, p.radius, color, p.opacity);
        }
        for c in self.connections() {
            surface.stroke_line(c.from, c.to, self.config.link_width, color, c.alpha);
        }
    }

    /// One animation frame: clear, integrate, draw particles, draw connections.
    pub fn frame<S: Surface>(&mut self, surface: &mut S) {
        surface.clear(self.width(), self.height());
        self.step();
        self.draw(surface);
    }
}
