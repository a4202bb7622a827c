use crate::core::constants::{
    DIGIT_COUNT, FIELD_COUNT, FIELD_LAT_DEGREES, FIELD_LON_DEGREES, LETTERS, MIN_LATITUDE,
    MIN_LONGITUDE, SQUARE_DEGREES, SUBSQUARE_COUNT,
};
use crate::util::error::LocatorError;
use geo_types::{Rect, coord};

/// Returns the cell named by a Maidenhead locator as a lon/lat rectangle in degrees.
///
/// A coordinate encoded with [`to_locator`](crate::to_locator) lies inside
/// these bounds up to `f64` rounding: the encoder's `+180`/`+90` shift can
/// round a value one ulp below a cell edge onto that edge.
///
/// Letters are accepted in either case. The first pair must use A-R, odd
/// pairs after it A-X, and even pairs digits.
///
/// # Process
///
/// 1. Checks the locator is non-empty, ASCII and of even length
/// 2. Starts from the south-west corner of the globe with a 20°x10° cell
/// 3. For each pair, shrinks the cell (÷10 for digit pairs, ÷24 for letter
///    pairs after the field) and moves the corner by the pair's indices
///
/// # Example
/// ```
/// use qth_locator::locator_bounds;
///
/// let rect = locator_bounds("JJ00").unwrap();
/// assert_eq!(rect.min().x, 0.0);
/// assert_eq!(rect.max().y, 1.0);
/// ```
///
/// # Errors
///
/// - [`LocatorError::InvalidLocator`] - empty, odd length, or a character outside its pair's range
pub fn locator_bounds(locator: &str) -> Result<Rect<f64>, LocatorError> {
    let invalid = || LocatorError::InvalidLocator(locator.to_string());

    if locator.is_empty() || !locator.is_ascii() || locator.len() % 2 != 0 {
        return Err(invalid());
    }

    let bytes = locator.as_bytes();
    let mut min_lon = MIN_LONGITUDE;
    let mut min_lat = MIN_LATITUDE;
    let mut width = FIELD_LON_DEGREES;
    let mut height = FIELD_LAT_DEGREES;

    for (i, pair) in bytes.chunks(2).enumerate() {
        let k = i + 1;
        let (lon_index, lat_index) = if k == 1 {
            (
                letter_index(pair[0], FIELD_COUNT).ok_or_else(invalid)?,
                letter_index(pair[1], FIELD_COUNT).ok_or_else(invalid)?,
            )
        } else if k % 2 == 0 {
            if k == 2 {
                width = SQUARE_DEGREES.0;
                height = SQUARE_DEGREES.1;
            } else {
                width /= DIGIT_COUNT as f64;
                height /= DIGIT_COUNT as f64;
            }
            (
                digit_index(pair[0]).ok_or_else(invalid)?,
                digit_index(pair[1]).ok_or_else(invalid)?,
            )
        } else {
            width /= SUBSQUARE_COUNT as f64;
            height /= SUBSQUARE_COUNT as f64;
            (
                letter_index(pair[0], SUBSQUARE_COUNT).ok_or_else(invalid)?,
                letter_index(pair[1], SUBSQUARE_COUNT).ok_or_else(invalid)?,
            )
        };

        min_lon += lon_index as f64 * width;
        min_lat += lat_index as f64 * height;
    }

    Ok(Rect::new(
        coord! { x: min_lon, y: min_lat },
        coord! { x: min_lon + width, y: min_lat + height },
    ))
}

fn letter_index(byte: u8, count: usize) -> Option<usize> {
    let upper = byte.to_ascii_uppercase() as char;
    LETTERS[..count].iter().position(|&c| c == upper)
}

fn digit_index(byte: u8) -> Option<usize> {
    byte.is_ascii_digit().then(|| (byte - b'0') as usize)
}
