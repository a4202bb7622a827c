//! # qth-locator
//!
//! Converts WGS84 coordinates to Maidenhead grid locators ("QTH locators"),
//! the position code used in amateur radio, e.g. `IO91WM` for the Greenwich
//! observatory.
//!
//! There are currently three main entry points.
//!
//! ### 1. `to_locator` - Plain Conversion
//!
//! ```
//! use qth_locator::to_locator;
//!
//! # fn main() -> Result<(), qth_locator::LocatorError> {
//! let locator = to_locator(51.5007, -0.1246, 5)?;
//! assert_eq!(locator, "IO91WM50BE");
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `Locator` - Single Locator Operations
//!
//! ```
//! use qth_locator::Locator;
//!
//! # fn main() -> Result<(), qth_locator::LocatorError> {
//! let locator = Locator::from_wgs84(&(-0.1246, 51.5007), 3)?;
//! for pair in locator.pairs() {
//!     println!("{}", pair);
//! }
//! let polygon = locator.to_polygon();
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `CsvToLocator` - CSV File Conversion
//!
//! ```no_run
//! use qth_locator::{CsvToLocator, GeometryFormat, LocatorCsvConfig};
//!
//! let config = LocatorCsvConfig::from_coords("Longitude", "Latitude", 3)
//!     .with_cell_geometry(GeometryFormat::Wkt);
//!
//! "stations.csv".to_locator_csv("output.csv", &config).unwrap();
//! ```
//!

pub mod api;
pub mod core;
pub mod util;

pub use crate::api::{
    CoordinateSource, CoordinatesToLocators, CsvToLocator, GeometryFormat, Locator,
    LocatorConfig, LocatorCsvConfig, csv_to_locator_csv,
};
pub use crate::core::{
    DEFAULT_LONGITUDE, DEFAULT_PRECISION, FIELD_COUNT, LETTERS, SUBSQUARE_COUNT, divmod,
    locator_bounds, to_locator, to_locator_default, to_locator_pairs, validate_precision,
};
pub use crate::util::{Coordinate, LocatorError, validate_coordinate};

pub use geo_types;
