//! Browser-side page components. Each one is optional: its constructor
//! returns `Ok(None)` when the elements it drives are absent.

pub mod counters;
pub mod hero;
pub mod menu;
pub mod nav;
pub mod reveal;
pub mod smooth_scroll;

pub use counters::CounterAnimator;
pub use hero::HeroParticles;
pub use menu::MobileMenuController;
pub use nav::{NavBarController, ScrollHintController};
pub use reveal::RevealController;
pub use smooth_scroll::SmoothScrollController;
