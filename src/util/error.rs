/// Error type for qth-locator operations.
#[derive(Debug, PartialEq)]
pub enum LocatorError {
    /// Latitude outside [-90, 90] or longitude outside [-180, 180] (or NaN).
    InvalidCoordinate { latitude: f64, longitude: f64 },
    /// The precision is below 1 pair.
    InvalidPrecision(u8),
    /// The string is not a well-formed Maidenhead locator.
    InvalidLocator(String),
    /// A command line argument could not be parsed.
    InvalidArgument(String),
    /// File I/O or serialization error.
    IoError(String),
    /// CSV parsing or reading error.
    CsvError(String),
    /// Failed to parse geometry from string (GeoJSON or WKT).
    GeometryParseError(String),
}

impl std::fmt::Display for LocatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocatorError::InvalidCoordinate {
                latitude,
                longitude,
            } => write!(
                f,
                "Invalid coordinate: latitude {}, longitude {}",
                latitude, longitude
            ),
            LocatorError::InvalidPrecision(p) => write!(f, "Invalid precision: {}", p),
            LocatorError::InvalidLocator(s) => write!(f, "Invalid locator: '{}'", s),
            LocatorError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            LocatorError::IoError(msg) => write!(f, "IO error: {}", msg),
            LocatorError::CsvError(msg) => write!(f, "CSV error: {}", msg),
            LocatorError::GeometryParseError(msg) => write!(f, "Geometry parse error: {}", msg),
        }
    }
}

impl std::error::Error for LocatorError {}
