use crate::api::locator::Locator;
use crate::util::coord::Coordinate;
use crate::util::error::LocatorError;
use log::debug;
use rayon::prelude::*;

/// Trait for converting collections of coordinates to [`Locator`]s.
///
/// Implemented for `[C]` (and so `Vec<C>`) where `C` is any [`Coordinate`].
/// Conversion runs in parallel; the output keeps the input order.
///
/// # Example
/// ```
/// use qth_locator::CoordinatesToLocators;
///
/// # fn main() -> Result<(), qth_locator::LocatorError> {
/// let coords = vec![(-0.1246, 51.5007), (0.0, 0.0)];
/// let locators = coords.to_locators(2)?;
/// assert_eq!(locators[0].as_str(), "IO91");
/// assert_eq!(locators[1].as_str(), "JJ00");
/// # Ok(())
/// # }
/// ```
pub trait CoordinatesToLocators {
    /// Converts every coordinate, failing with the first error in input order.
    fn to_locators(&self, precision: u8) -> Result<Vec<Locator>, LocatorError>;
    /// Converts every coordinate, keeping a result per input.
    fn try_to_locators(&self, precision: u8) -> Vec<Result<Locator, LocatorError>>;
}

impl<C: Coordinate + Sync> CoordinatesToLocators for [C] {
    fn to_locators(&self, precision: u8) -> Result<Vec<Locator>, LocatorError> {
        self.try_to_locators(precision).into_iter().collect()
    }

    fn try_to_locators(&self, precision: u8) -> Vec<Result<Locator, LocatorError>> {
        debug!(
            "Encoding {} coordinates at precision {}",
            self.len(),
            precision
        );
        self.par_iter()
            .map(|coord| Locator::from_wgs84(coord, precision))
            .collect()
    }
}
