pub mod counter;
pub mod menu;
pub mod nav;
pub mod particles;
pub mod reveal;
pub mod scroll;
