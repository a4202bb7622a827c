pub mod batch;
pub mod config;
pub mod locator;
pub mod locator_csv;

pub use batch::CoordinatesToLocators;
pub use config::LocatorConfig;
pub use locator::Locator;
pub use locator_csv::{
    CoordinateSource, CsvToLocator, GeometryFormat, LocatorCsvConfig, csv_to_locator_csv,
};
