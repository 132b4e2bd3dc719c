pub mod effect;
pub mod error;
pub mod lifecycle;
pub mod palette;
pub mod surface;
