// extensions/mod.rs
//
// Optional helpers decoupled from the page components.

pub mod easing;

pub use easing::ease_out_cubic;
