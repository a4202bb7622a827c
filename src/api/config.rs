use crate::api::locator::Locator;
use crate::core::constants::{DEFAULT_LONGITUDE, DEFAULT_PRECISION};
use crate::util::error::LocatorError;
use serde::{Deserialize, Serialize};

/// Input for a single locator conversion.
///
/// `longitude` defaults to 0.0 and `precision` to 5 pairs, both in the
/// builder and when deserializing.
///
/// # Example
/// ```
/// use qth_locator::LocatorConfig;
///
/// # fn main() -> Result<(), qth_locator::LocatorError> {
/// let locator = LocatorConfig::new(51.5007)
///     .longitude(-0.1246)
///     .precision(3)
///     .to_locator()?;
/// assert_eq!(locator.as_str(), "IO91WM");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocatorConfig {
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    #[serde(default = "default_precision")]
    pub precision: u8,
}

fn default_longitude() -> f64 {
    DEFAULT_LONGITUDE
}

fn default_precision() -> u8 {
    DEFAULT_PRECISION
}

impl LocatorConfig {
    pub fn new(latitude: f64) -> Self {
        Self {
            latitude,
            longitude: DEFAULT_LONGITUDE,
            precision: DEFAULT_PRECISION,
        }
    }

    pub fn longitude(mut self, longitude: f64) -> Self {
        self.longitude = longitude;
        self
    }

    pub fn precision(mut self, precision: u8) -> Self {
        self.precision = precision;
        self
    }

    pub fn to_locator(&self) -> Result<Locator, LocatorError> {
        Locator::from_config(self)
    }
}
