use crate::core::constants::{
    DEFAULT_LONGITUDE, DEFAULT_PRECISION, DIGIT_COUNT, FIELD_COUNT, FIELD_LAT_DEGREES,
    FIELD_LON_DEGREES, LETTERS, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE, SUBSQUARE_COUNT,
};
use crate::core::divmod::divmod;
use crate::util::coord::validate_coordinate;
use crate::util::error::LocatorError;

/// Converts a WGS84 coordinate to a Maidenhead locator of `precision` pairs.
///
/// The result is exactly `2 * precision` characters long. Odd pairs (field,
/// sub-square, ...) are uppercase letters and even pairs (square, extended
/// square, ...) are digits, so callers may slice the string in groups of two.
///
/// # Process
///
/// 1. Shifts longitude into [0, 360) and latitude into [0, 180)
/// 2. Splits off the field with `divmod(lon, 20)` and `divmod(lat, 10)`
/// 3. Halves the longitude remainder so both axes continue in 1° units
/// 4. Alternates digit pairs (then scales the remainders by 24) and letter
///    pairs (then scales them by 10) until `precision` pairs are emitted
///
/// Longitude 180 is the antimeridian and encodes like -180. Latitude 90 is
/// folded into the topmost row of cells at every level (`R`, `9`, `X`, ...).
///
/// Pairs past about 8 are finer than `f64` resolution of the input and only
/// reflect rounding, though they stay deterministic.
///
/// # Example
/// ```
/// use qth_locator::to_locator;
///
/// # fn main() -> Result<(), qth_locator::LocatorError> {
/// assert_eq!(to_locator(0.0, 0.0, 2)?, "JJ00");
/// assert_eq!(to_locator(51.5007, -0.1246, 3)?, "IO91WM");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`LocatorError::InvalidPrecision`] - `precision` is 0
/// - [`LocatorError::InvalidCoordinate`] - latitude or longitude out of range, or NaN
pub fn to_locator(latitude: f64, longitude: f64, precision: u8) -> Result<String, LocatorError> {
    validate_precision(precision)?;
    validate_coordinate(latitude, longitude)?;

    Ok(encode(latitude, longitude, precision))
}

/// Converts a latitude to a locator using longitude 0 and the default precision of 5 pairs.
pub fn to_locator_default(latitude: f64) -> Result<String, LocatorError> {
    to_locator(latitude, DEFAULT_LONGITUDE, DEFAULT_PRECISION)
}

/// Same as [`to_locator`], with the result already split into 2-character pairs.
///
/// # Example
/// ```
/// use qth_locator::to_locator_pairs;
///
/// let pairs = to_locator_pairs(51.5007, -0.1246, 3).unwrap();
/// assert_eq!(pairs, vec!["IO", "91", "WM"]);
/// ```
pub fn to_locator_pairs(
    latitude: f64,
    longitude: f64,
    precision: u8,
) -> Result<Vec<String>, LocatorError> {
    let locator = to_locator(latitude, longitude, precision)?;
    Ok(split_pairs(&locator).map(str::to_string).collect())
}

/// Checks that `precision` asks for at least one pair.
pub fn validate_precision(precision: u8) -> Result<(), LocatorError> {
    if precision == 0 {
        return Err(LocatorError::InvalidPrecision(precision));
    }
    Ok(())
}

/// Iterates over the 2-character pairs of an ASCII locator.
pub(crate) fn split_pairs(locator: &str) -> impl Iterator<Item = &str> {
    (0..locator.len() / 2).map(move |i| &locator[2 * i..2 * i + 2])
}

/// Encodes an already validated coordinate.
pub(crate) fn encode(latitude: f64, longitude: f64, precision: u8) -> String {
    let mut locator = String::with_capacity(2 * precision as usize);

    let longitude = if longitude >= MAX_LONGITUDE {
        MIN_LONGITUDE
    } else {
        longitude
    };

    let mut lon_pinned = false;
    let mut lat_pinned = false;

    let (lon_index, lon_rem) = split(
        longitude - MIN_LONGITUDE,
        FIELD_LON_DEGREES,
        FIELD_COUNT,
        &mut lon_pinned,
    );
    let (lat_index, lat_rem) = split(
        latitude - MIN_LATITUDE,
        FIELD_LAT_DEGREES,
        FIELD_COUNT,
        &mut lat_pinned,
    );
    locator.push(letter(lon_index));
    locator.push(letter(lat_index));

    let mut lon = lon_rem / 2.0;
    let mut lat = lat_rem;

    for pair in 2..=precision {
        if pair % 2 == 0 {
            let (lon_index, lon_rem) = split(lon, 1.0, DIGIT_COUNT, &mut lon_pinned);
            let (lat_index, lat_rem) = split(lat, 1.0, DIGIT_COUNT, &mut lat_pinned);
            locator.push(digit(lon_index));
            locator.push(digit(lat_index));
            lon = SUBSQUARE_COUNT as f64 * lon_rem;
            lat = SUBSQUARE_COUNT as f64 * lat_rem;
        } else {
            let (lon_index, lon_rem) = split(lon, 1.0, SUBSQUARE_COUNT, &mut lon_pinned);
            let (lat_index, lat_rem) = split(lat, 1.0, SUBSQUARE_COUNT, &mut lat_pinned);
            locator.push(letter(lon_index));
            locator.push(letter(lat_index));
            lon = DIGIT_COUNT as f64 * lon_rem;
            lat = DIGIT_COUNT as f64 * lat_rem;
        }
    }

    locator
}

/// Splits `value` into a cell index below `count` and the offset inside that cell.
///
/// A value on the top edge of the last cell (the north pole, or a remainder
/// rounded up to the full span) stays in the last cell and sets `pinned`, so
/// every finer level of that axis also takes its last cell.
fn split(value: f64, span: f64, count: usize, pinned: &mut bool) -> (usize, f64) {
    if *pinned {
        return (count - 1, 0.0);
    }

    let (quotient, remainder) = divmod(value, span);
    let index = quotient as usize;

    if index < count {
        (index, remainder)
    } else {
        *pinned = true;
        (count - 1, 0.0)
    }
}

/// Maps 0-23 to 'A'-'X'. Fields only reach 'R' (17).
pub(crate) fn letter(index: usize) -> char {
    assert!(
        index < LETTERS.len(),
        "letter index {} is outside the A-X alphabet",
        index
    );
    LETTERS[index]
}

fn digit(index: usize) -> char {
    assert!(index < DIGIT_COUNT, "digit index {} is outside 0-9", index);
    char::from(b'0' + index as u8)
}
