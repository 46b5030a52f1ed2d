// extensions/easing.rs
//
// Easing curve for the counter animation.
// No DOM dependencies, just math.

/// Ease-out cubic: fast start, slow end. `t` is clamped to [0, 1].
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}
