pub mod field;
pub mod io;
pub mod pixels;

pub use self::field::IntensityField;
pub use self::pixels::PixelBuffer;
