pub mod api;
pub mod core;
pub mod systems;
pub mod renderer;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::config::{
    PageConfig, RevealConfig, CounterConfig, NavConfig,
    MenuConfig, SmoothScrollConfig, ParticleConfig,
};
pub use crate::core::frame_loop::{FrameLoop, FrameScheduler, FrameHandle};
pub use crate::core::rng::Rng;
pub use renderer::color::Rgb;
pub use renderer::traits::Surface;
pub use systems::counter::{CounterAnimation, CounterPanel, parse_target, round_half_up};
pub use systems::menu::MenuState;
pub use systems::nav::ScrollMarker;
pub use systems::reveal::RevealSet;
pub use systems::scroll::{anchor_selector, resolve_click, scroll_target};
pub use systems::particles::{Particle, ParticleField, FieldState, Connection};

// Extensions — decoupled helpers
pub use extensions::ease_out_cubic;
