pub mod constants;
pub mod decoder;
pub mod divmod;
pub mod encoder;

pub use constants::{
    DEFAULT_LONGITUDE, DEFAULT_PRECISION, FIELD_COUNT, LETTERS, SUBSQUARE_COUNT,
};
pub use decoder::locator_bounds;
pub use divmod::divmod;
pub use encoder::{to_locator, to_locator_default, to_locator_pairs, validate_precision};
