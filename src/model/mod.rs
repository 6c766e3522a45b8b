pub mod crop_shape;
pub mod guidelines;
pub mod scale_type;

pub use crop_shape::CropShape;
pub use guidelines::Guidelines;
pub use scale_type::ScaleType;
