//! Configuration model for an image-cropping widget: the options bag, its
//! density-scaled defaults, and the validation pass that must succeed before
//! the options drive rendering.

pub mod model;
pub mod options;
pub mod utils;

pub use model::{CropShape, Guidelines, ScaleType};
pub use options::{CropOptions, InvalidOptions};
