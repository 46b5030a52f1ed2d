pub mod color;
pub mod traits;

pub use color::Rgb;
pub use traits::Surface;
