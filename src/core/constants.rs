/// Alphabet shared by field and sub-square pairs, indexed 0-23.
pub const LETTERS: [char; 24] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X',
];

/// Number of fields along each axis (A-R).
pub const FIELD_COUNT: usize = 18;

/// Number of sub-squares along each axis of a square (A-X).
pub const SUBSQUARE_COUNT: usize = 24;

/// Number of digit cells along each axis of a square or extended square (0-9).
pub const DIGIT_COUNT: usize = 10;

/// Field width in degrees of longitude.
pub const FIELD_LON_DEGREES: f64 = 20.0;

/// Field height in degrees of latitude.
pub const FIELD_LAT_DEGREES: f64 = 10.0;

/// Square size as (longitude, latitude) degrees.
pub const SQUARE_DEGREES: (f64, f64) = (2.0, 1.0);

/// Number of pairs produced when the caller gives no precision.
pub const DEFAULT_PRECISION: u8 = 5;

/// Longitude used when the caller gives none.
pub const DEFAULT_LONGITUDE: f64 = 0.0;

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;
