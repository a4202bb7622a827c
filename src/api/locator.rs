use crate::api::config::LocatorConfig;
use crate::core::decoder::locator_bounds;
use crate::core::encoder::{encode, split_pairs, validate_precision};
use crate::util::coord::{Coordinate, validate_coordinate};
use crate::util::error::LocatorError;
use geo_types::{Point, Polygon, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A Maidenhead grid locator of a given precision.
///
/// The code is always uppercase ASCII and `2 * precision` characters long.
/// Odd pairs are letters and even pairs digits.
///
/// # Example
///
/// ```
/// use qth_locator::Locator;
///
/// # fn main() -> Result<(), qth_locator::LocatorError> {
/// // (longitude, latitude)
/// let locator = Locator::from_wgs84(&(-0.1246, 51.5007), 5)?;
/// assert_eq!(locator.as_str(), "IO91WM50BE");
/// assert_eq!(locator.pairs().collect::<Vec<_>>(), ["IO", "91", "WM", "50", "BE"]);
///
/// let cell = locator.to_polygon();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locator {
    /// The locator text, e.g. `IO91WM`
    pub(crate) code: String,
    /// Number of 2-character pairs in `code`
    pub(crate) precision: u8,
}

impl Locator {
    /// Create a Locator from latitude and longitude in degrees.
    pub fn from_lat_lon(
        latitude: f64,
        longitude: f64,
        precision: u8,
    ) -> Result<Self, LocatorError> {
        validate_precision(precision)?;
        validate_coordinate(latitude, longitude)?;

        Ok(Self {
            code: encode(latitude, longitude, precision),
            precision,
        })
    }

    /// Create a Locator from a WGS84 (lon/lat) coordinate.
    ///
    /// # Example
    /// ```
    /// use qth_locator::Locator;
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), qth_locator::LocatorError> {
    /// // From tuple
    /// let locator = Locator::from_wgs84(&(21.0122, 52.2297), 3)?;
    /// // From Point
    /// let same = Locator::from_wgs84(&Point::new(21.0122, 52.2297), 3)?;
    /// assert_eq!(locator, same);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_wgs84(coord: &impl Coordinate, precision: u8) -> Result<Self, LocatorError> {
        Self::from_lat_lon(coord.y(), coord.x(), precision)
    }

    /// Create a Locator from a [`LocatorConfig`].
    pub fn from_config(config: &LocatorConfig) -> Result<Self, LocatorError> {
        Self::from_lat_lon(config.latitude, config.longitude, config.precision)
    }

    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// The locator text, always uppercase.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Number of 2-character pairs.
    pub fn precision(&self) -> u8 {
        self.precision
    }

    /// Iterates over the 2-character pairs, coarsest first.
    pub fn pairs(&self) -> impl Iterator<Item = &str> {
        split_pairs(&self.code)
    }

    /// Returns pair `k` (1-indexed), or `None` past the precision.
    pub fn pair(&self, k: usize) -> Option<&str> {
        if k == 0 || k > self.precision as usize {
            return None;
        }
        self.code.get(2 * (k - 1)..2 * k)
    }

    /// The field pair (first two letters).
    pub fn field(&self) -> &str {
        self.code.get(..2).unwrap_or_default()
    }

    /// The square, e.g. `IO91` for `IO91WM50BE`. `None` for a bare field.
    pub fn square(&self) -> Option<&str> {
        self.code.get(..4)
    }

    /// Returns the enclosing locator with `precision` pairs.
    ///
    /// Longer locators only refine shorter ones, so this is a prefix of the code.
    pub fn truncate(&self, precision: u8) -> Result<Self, LocatorError> {
        validate_precision(precision)?;
        if precision > self.precision {
            return Err(LocatorError::InvalidPrecision(precision));
        }

        let code = self
            .code
            .get(..2 * precision as usize)
            .ok_or_else(|| LocatorError::InvalidLocator(self.code.clone()))?;

        Ok(Self {
            code: code.to_string(),
            precision,
        })
    }

    /// Whether `other` lies inside this cell (or is the same cell).
    pub fn contains(&self, other: &Locator) -> bool {
        other.code.starts_with(&self.code)
    }

    /// Returns the cell as a lon/lat rectangle in degrees.
    pub fn to_rect(&self) -> Rect<f64> {
        // Fields are crate-private; every constructor encodes or validates the code.
        locator_bounds(&self.code).unwrap_or_else(|_| Rect::new((0.0, 0.0), (0.0, 0.0)))
    }

    /// Converts this cell to a polygon, suitable for spatial operations or GeoJSON export.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.to_rect().to_polygon()
    }

    /// Returns the centre of the cell as a lon/lat point.
    pub fn center(&self) -> Point<f64> {
        Point::from(self.to_rect().center())
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl FromStr for Locator {
    type Err = LocatorError;

    /// Parses a locator in either case; the stored code is uppercase.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        locator_bounds(trimmed)?;

        let precision = u8::try_from(trimmed.len() / 2)
            .map_err(|_| LocatorError::InvalidLocator(trimmed.to_string()))?;

        Ok(Self {
            code: trimmed.to_ascii_uppercase(),
            precision,
        })
    }
}

impl TryFrom<String> for Locator {
    type Error = LocatorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locator> for String {
    fn from(locator: Locator) -> Self {
        locator.code
    }
}

impl AsRef<str> for Locator {
    fn as_ref(&self) -> &str {
        &self.code
    }
}
