pub mod endpoint;
pub mod image;

pub use endpoint::*;
pub use image::*;
