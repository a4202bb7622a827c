pub mod coord;
pub mod error;

pub use coord::{Coordinate, validate_coordinate};
pub use error::LocatorError;
