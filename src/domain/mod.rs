mod point;
mod triangle;
mod method;
mod chaos;
pub mod recursive;

pub use point::Point;
pub use triangle::Triangle;
pub use method::GenerationMethod;
pub use chaos::ChaosState;
pub use recursive::DepthError;
