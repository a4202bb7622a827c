use qth_locator::{DEFAULT_LONGITUDE, DEFAULT_PRECISION, Locator, LocatorConfig, LocatorError};

fn parse_arg<T: std::str::FromStr>(
    value: Option<String>,
    name: &str,
    default: T,
) -> Result<T, LocatorError> {
    match value {
        Some(v) => v
            .parse()
            .map_err(|_| LocatorError::InvalidArgument(format!("{} '{}'", name, v))),
        None => Ok(default),
    }
}

/// Usage: `qth-locator [latitude] [longitude] [precision]`
///
/// Without arguments prints the locator of the Greenwich observatory.
fn main() -> Result<(), LocatorError> {
    let mut args = std::env::args().skip(1);

    let config = match args.next() {
        Some(lat) => {
            let latitude: f64 = lat
                .parse()
                .map_err(|_| LocatorError::InvalidArgument(format!("latitude '{}'", lat)))?;
            LocatorConfig::new(latitude)
                .longitude(parse_arg(args.next(), "longitude", DEFAULT_LONGITUDE)?)
                .precision(parse_arg(args.next(), "precision", DEFAULT_PRECISION)?)
        }
        None => LocatorConfig::new(51.5007).longitude(-0.1246),
    };

    let locator = Locator::from_config(&config)?;
    let center = locator.center();

    println!("Locator: {}", locator);
    println!("Pairs: {}", locator.pairs().collect::<Vec<_>>().join(" "));
    println!("Center: ({}, {})", center.y(), center.x());

    Ok(())
}
