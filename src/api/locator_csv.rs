use crate::api::locator::Locator;
use crate::util::error::LocatorError;
use geo::Centroid;
use geo_types::{Geometry, Point, Polygon};
use geojson::GeoJson;
use log::{debug, warn};
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;
use wkt::Wkt;

/// For the type of location source in the file
enum SourceIndices {
    Geometry(usize),
    Coordinates { lon_idx: usize, lat_idx: usize },
}

/// Output format for locator cell geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryFormat {
    /// Well-Known Text format (e.g., "POLYGON((...))")
    Wkt,
    /// GeoJSON format
    GeoJson,
}

/// Specifies how to extract location data from CSV rows.
#[derive(Debug, Clone)]
pub enum CoordinateSource {
    /// A single column containing WKT or GeoJSON geometry in lon/lat
    GeometryColumn(String),
    /// Separate longitude and latitude columns
    CoordinateColumns {
        lon_column: String,
        lat_column: String,
    },
}

/// Configuration for CSV to locator conversion.
#[derive(Debug, Clone)]
pub struct LocatorCsvConfig {
    pub source: CoordinateSource,
    pub exclude_columns: Vec<String>,
    pub precision: u8,
    pub include_cell_geometry: Option<GeometryFormat>,
}

impl LocatorCsvConfig {
    /// Create config for a CSV with a geometry column (WKT or GeoJSON).
    ///
    /// # Example
    /// ```
    /// use qth_locator::LocatorCsvConfig;
    ///
    /// let config = LocatorCsvConfig::new("geometry", 3);
    /// ```
    pub fn new(geometry_column: impl Into<String>, precision: u8) -> Self {
        Self {
            source: CoordinateSource::GeometryColumn(geometry_column.into()),
            exclude_columns: Vec::new(),
            precision,
            include_cell_geometry: None,
        }
    }

    /// Create config for a CSV with separate longitude/latitude columns.
    ///
    /// # Example
    /// ```
    /// use qth_locator::LocatorCsvConfig;
    ///
    /// let config = LocatorCsvConfig::from_coords("Longitude", "Latitude", 3);
    /// ```
    pub fn from_coords(
        lon_column: impl Into<String>,
        lat_column: impl Into<String>,
        precision: u8,
    ) -> Self {
        Self {
            source: CoordinateSource::CoordinateColumns {
                lon_column: lon_column.into(),
                lat_column: lat_column.into(),
            },
            exclude_columns: Vec::new(),
            precision,
            include_cell_geometry: None,
        }
    }

    pub fn exclude(mut self, columns: Vec<String>) -> Self {
        self.exclude_columns = columns;
        self
    }

    /// Include the locator cell polygon in output.
    pub fn with_cell_geometry(mut self, format: GeometryFormat) -> Self {
        self.include_cell_geometry = Some(format);
        self
    }
}

pub trait CsvToLocator {
    fn to_locator_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &LocatorCsvConfig,
    ) -> Result<(), LocatorError>;
}

impl<P: AsRef<Path>> CsvToLocator for P {
    fn to_locator_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &LocatorCsvConfig,
    ) -> Result<(), LocatorError> {
        csv_to_locator_csv(self, output_path, config)
    }
}

fn parse_geometry(s: &str) -> Result<Geometry<f64>, LocatorError> {
    let trimmed = s.trim();
    if trimmed.starts_with('{') {
        parse_geojson(trimmed)
    } else {
        parse_wkt(trimmed)
    }
}

fn parse_geojson(s: &str) -> Result<Geometry<f64>, LocatorError> {
    let geojson: GeoJson = s
        .parse()
        .map_err(|e: geojson::Error| LocatorError::GeometryParseError(e.to_string()))?;

    match geojson {
        GeoJson::Geometry(geom) => {
            Geometry::try_from(geom).map_err(|e| LocatorError::GeometryParseError(e.to_string()))
        }
        GeoJson::Feature(feat) => feat
            .geometry
            .ok_or_else(|| LocatorError::GeometryParseError("Feature has no geometry".to_string()))
            .and_then(|g| {
                Geometry::try_from(g).map_err(|e| LocatorError::GeometryParseError(e.to_string()))
            }),
        GeoJson::FeatureCollection(_) => Err(LocatorError::GeometryParseError(
            "FeatureCollection not supported, use individual geometries".to_string(),
        )),
    }
}

fn parse_wkt(s: &str) -> Result<Geometry<f64>, LocatorError> {
    let wkt: Wkt<f64> =
        Wkt::from_str(s).map_err(|e| LocatorError::GeometryParseError(e.to_string()))?;

    wkt.try_into().map_err(|_| {
        LocatorError::GeometryParseError("Failed to convert WKT to geometry".to_string())
    })
}

fn polygon_to_wkt(polygon: &Polygon<f64>) -> String {
    use wkt::ToWkt;
    polygon.wkt_string()
}

fn polygon_to_geojson(polygon: &Polygon<f64>) -> String {
    let geom = geojson::Geometry::from(polygon);
    geom.to_string()
}

/// Picks the points to encode for a geometry: points as given, multipoints
/// one per member, anything else by its centroid.
fn geometry_to_points(geom: Geometry<f64>) -> Vec<Point<f64>> {
    match geom {
        Geometry::Point(pt) => vec![pt],
        Geometry::MultiPoint(mp) => mp.0,
        Geometry::GeometryCollection(gc) => {
            gc.0.into_iter().flat_map(geometry_to_points).collect()
        }
        other => other.centroid().into_iter().collect(),
    }
}

// ============================================================================
// CSV Conversion
// ============================================================================

/// Converts a CSV file with lon/lat or geometry columns to a CSV file with locators.
///
/// The output starts with a `locator` column, then `locator_geometry` when
/// requested, then every input column except the source and excluded ones.
/// Streams output to minimize memory usage for large files.
///
/// # Example with coordinate columns
///
/// ```no_run
/// use qth_locator::{csv_to_locator_csv, LocatorCsvConfig};
///
/// let config = LocatorCsvConfig::from_coords("Longitude", "Latitude", 3);
///
/// csv_to_locator_csv("stations.csv", "output.csv", &config).unwrap();
/// ```
///
/// # Example with geometry column (WKT or GeoJSON)
///
/// ```no_run
/// use qth_locator::{csv_to_locator_csv, GeometryFormat, LocatorCsvConfig};
///
/// let config = LocatorCsvConfig::new("geometry", 4)
///     .exclude(vec!["notes".into()])
///     .with_cell_geometry(GeometryFormat::Wkt);
///
/// csv_to_locator_csv("sites.csv", "output.csv", &config).unwrap();
/// ```
pub fn csv_to_locator_csv(
    csv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &LocatorCsvConfig,
) -> Result<(), LocatorError> {
    let file = File::open(csv_path).map_err(|e| LocatorError::CsvError(e.to_string()))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| LocatorError::CsvError(e.to_string()))?
        .clone();

    // Source columns are always dropped from the output
    let (source_indices, mut exclude_indices) = match &config.source {
        CoordinateSource::GeometryColumn(col) => {
            let idx = headers.iter().position(|h| h == col).ok_or_else(|| {
                LocatorError::CsvError(format!("Geometry column '{}' not found", col))
            })?;
            let mut exclude = HashSet::new();
            exclude.insert(idx);
            (SourceIndices::Geometry(idx), exclude)
        }
        CoordinateSource::CoordinateColumns {
            lon_column,
            lat_column,
        } => {
            let lon_idx = headers.iter().position(|h| h == lon_column).ok_or_else(|| {
                LocatorError::CsvError(format!("Longitude column '{}' not found", lon_column))
            })?;
            let lat_idx = headers.iter().position(|h| h == lat_column).ok_or_else(|| {
                LocatorError::CsvError(format!("Latitude column '{}' not found", lat_column))
            })?;
            let mut exclude = HashSet::new();
            exclude.insert(lon_idx);
            exclude.insert(lat_idx);
            (SourceIndices::Coordinates { lon_idx, lat_idx }, exclude)
        }
    };

    for col_name in &config.exclude_columns {
        match headers.iter().position(|h| h == col_name) {
            Some(idx) => {
                exclude_indices.insert(idx);
            }
            None => warn!("Excluded column '{}' not present in input", col_name),
        }
    }

    let out_file = File::create(output_path).map_err(|e| LocatorError::IoError(e.to_string()))?;
    let mut writer = csv::Writer::from_writer(out_file);

    let mut header_row: Vec<&str> = vec!["locator"];
    if config.include_cell_geometry.is_some() {
        header_row.push("locator_geometry");
    }
    for (i, h) in headers.iter().enumerate() {
        if !exclude_indices.contains(&i) {
            header_row.push(h);
        }
    }
    writer
        .write_record(&header_row)
        .map_err(|e| LocatorError::CsvError(e.to_string()))?;

    let mut rows_written = 0usize;
    for result in reader.records() {
        let record = result.map_err(|e| LocatorError::CsvError(e.to_string()))?;

        let locators = match &source_indices {
            SourceIndices::Geometry(idx) => {
                let geom_str = record.get(*idx).ok_or_else(|| {
                    LocatorError::CsvError(format!("Missing geometry column at index {}", idx))
                })?;
                let geom = parse_geometry(geom_str)?;
                geometry_to_points(geom)
                    .iter()
                    .map(|pt| Locator::from_wgs84(pt, config.precision))
                    .collect::<Result<Vec<_>, _>>()?
            }
            SourceIndices::Coordinates { lon_idx, lat_idx } => {
                let lon_str = record
                    .get(*lon_idx)
                    .ok_or_else(|| {
                        LocatorError::CsvError(format!("Missing longitude at index {}", lon_idx))
                    })?
                    .trim();
                let lat_str = record
                    .get(*lat_idx)
                    .ok_or_else(|| {
                        LocatorError::CsvError(format!("Missing latitude at index {}", lat_idx))
                    })?
                    .trim();

                let lon: f64 = lon_str.parse().map_err(|_| {
                    LocatorError::CsvError(format!("Invalid longitude: '{}'", lon_str))
                })?;
                let lat: f64 = lat_str.parse().map_err(|_| {
                    LocatorError::CsvError(format!("Invalid latitude: '{}'", lat_str))
                })?;

                vec![Locator::from_lat_lon(lat, lon, config.precision)?]
            }
        };

        for locator in locators {
            let mut row: Vec<String> = vec![locator.code.clone()];

            if let Some(format) = config.include_cell_geometry {
                let polygon = locator.to_polygon();
                let geom_str = match format {
                    GeometryFormat::Wkt => polygon_to_wkt(&polygon),
                    GeometryFormat::GeoJson => polygon_to_geojson(&polygon),
                };
                row.push(geom_str);
            }

            for (i, field) in record.iter().enumerate() {
                if !exclude_indices.contains(&i) {
                    row.push(field.to_string());
                }
            }
            writer
                .write_record(&row)
                .map_err(|e| LocatorError::CsvError(e.to_string()))?;
            rows_written += 1;
        }
    }

    writer
        .flush()
        .map_err(|e| LocatorError::CsvError(e.to_string()))?;
    debug!("Wrote {} locator rows", rows_written);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn read_rows(path: &Path) -> Result<Vec<Vec<String>>, LocatorError> {
        let mut reader =
            csv::Reader::from_path(path).map_err(|e| LocatorError::CsvError(e.to_string()))?;
        let mut rows = vec![
            reader
                .headers()
                .map_err(|e| LocatorError::CsvError(e.to_string()))?
                .iter()
                .map(str::to_string)
                .collect(),
        ];
        for record in reader.records() {
            let record = record.map_err(|e| LocatorError::CsvError(e.to_string()))?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(rows)
    }

    #[test]
    fn test_parse_geojson_point() -> Result<(), LocatorError> {
        let json = r#"{"type":"Point","coordinates":[-0.1246,51.5007]}"#;
        let geom = parse_geometry(json)?;
        match geom {
            Geometry::Point(pt) => {
                assert!((pt.x() - (-0.1246)).abs() < 1e-9);
                assert!((pt.y() - 51.5007).abs() < 1e-9);
            }
            _ => panic!("Expected Point"),
        }
        Ok(())
    }

    #[test]
    fn test_parse_geojson_feature() -> Result<(), LocatorError> {
        let json = r#"{"type":"Feature","properties":{},"geometry":{"type":"Point","coordinates":[0.0,0.0]}}"#;
        assert!(matches!(parse_geometry(json)?, Geometry::Point(_)));
        Ok(())
    }

    #[test]
    fn test_parse_wkt_point() -> Result<(), LocatorError> {
        let geom = parse_geometry("POINT(-74.006 40.7128)")?;
        match geom {
            Geometry::Point(pt) => {
                assert!((pt.x() - (-74.006)).abs() < 1e-9);
                assert!((pt.y() - 40.7128).abs() < 1e-9);
            }
            _ => panic!("Expected Point"),
        }
        Ok(())
    }

    #[test]
    fn test_parse_garbage() {
        assert!(matches!(
            parse_geometry("not a geometry"),
            Err(LocatorError::GeometryParseError(_))
        ));
    }

    #[test]
    fn test_polygon_uses_centroid() -> Result<(), LocatorError> {
        let geom = parse_geometry("POLYGON((0 0, 2 0, 2 1, 0 1, 0 0))")?;
        let points = geometry_to_points(geom);
        assert_eq!(points.len(), 1);
        assert!((points[0].x() - 1.0).abs() < 1e-9);
        assert!((points[0].y() - 0.5).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_multipoint_yields_each_point() -> Result<(), LocatorError> {
        let geom = parse_geometry("MULTIPOINT((0 0), (10 10))")?;
        assert_eq!(geometry_to_points(geom).len(), 2);
        Ok(())
    }

    #[test]
    fn test_csv_from_coords() -> Result<(), LocatorError> {
        let dir = tempdir().map_err(|e| LocatorError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("test.csv");
        let output_path = dir.path().join("output.csv");

        let mut file =
            File::create(&csv_path).map_err(|e| LocatorError::IoError(e.to_string()))?;
        writeln!(file, "Callsign,Longitude,Latitude,Notes")
            .map_err(|e| LocatorError::IoError(e.to_string()))?;
        writeln!(file, "G1ABC,-0.1246,51.5007,Greenwich")
            .map_err(|e| LocatorError::IoError(e.to_string()))?;
        writeln!(file, "VK2XYZ,151.2093,-33.8688,Sydney")
            .map_err(|e| LocatorError::IoError(e.to_string()))?;

        let config = LocatorCsvConfig::from_coords("Longitude", "Latitude", 3);
        csv_to_locator_csv(&csv_path, &output_path, &config)?;

        let rows = read_rows(&output_path)?;
        assert_eq!(rows[0], vec!["locator", "Callsign", "Notes"]);
        assert_eq!(rows[1], vec!["IO91WM", "G1ABC", "Greenwich"]);
        assert_eq!(rows[2], vec!["QF56OD", "VK2XYZ", "Sydney"]);
        Ok(())
    }

    #[test]
    fn test_csv_geometry_column_with_wkt_output() -> Result<(), LocatorError> {
        let dir = tempdir().map_err(|e| LocatorError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("test.csv");
        let output_path = dir.path().join("output.csv");

        let mut file =
            File::create(&csv_path).map_err(|e| LocatorError::IoError(e.to_string()))?;
        writeln!(file, "ID,geometry,Notes").map_err(|e| LocatorError::IoError(e.to_string()))?;
        writeln!(file, "1,\"POINT(0 0)\",origin")
            .map_err(|e| LocatorError::IoError(e.to_string()))?;

        let config = LocatorCsvConfig::new("geometry", 2)
            .exclude(vec!["Notes".into()])
            .with_cell_geometry(GeometryFormat::Wkt);
        csv_path.to_locator_csv(&output_path, &config)?;

        let rows = read_rows(&output_path)?;
        assert_eq!(rows[0], vec!["locator", "locator_geometry", "ID"]);
        assert_eq!(rows[1][0], "JJ00");
        assert!(rows[1][1].starts_with("POLYGON"));
        assert_eq!(rows[1][2], "1");
        Ok(())
    }

    #[test]
    fn test_csv_geojson_geometry_output() -> Result<(), LocatorError> {
        let dir = tempdir().map_err(|e| LocatorError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("test.csv");
        let output_path = dir.path().join("output.csv");

        let mut file =
            File::create(&csv_path).map_err(|e| LocatorError::IoError(e.to_string()))?;
        writeln!(file, "ID,geometry").map_err(|e| LocatorError::IoError(e.to_string()))?;
        writeln!(
            file,
            "A,\"{{\"\"type\"\":\"\"Point\"\",\"\"coordinates\"\":[-74.006,40.7128]}}\""
        )
        .map_err(|e| LocatorError::IoError(e.to_string()))?;

        let config =
            LocatorCsvConfig::new("geometry", 2).with_cell_geometry(GeometryFormat::GeoJson);
        csv_to_locator_csv(&csv_path, &output_path, &config)?;

        let rows = read_rows(&output_path)?;
        assert_eq!(rows[1][0], "FN20");
        assert!(rows[1][1].contains("\"Polygon\""));
        Ok(())
    }

    #[test]
    fn test_csv_missing_column() -> Result<(), LocatorError> {
        let dir = tempdir().map_err(|e| LocatorError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("test.csv");
        let output_path = dir.path().join("output.csv");

        let mut file =
            File::create(&csv_path).map_err(|e| LocatorError::IoError(e.to_string()))?;
        writeln!(file, "x,y").map_err(|e| LocatorError::IoError(e.to_string()))?;

        let config = LocatorCsvConfig::from_coords("Longitude", "Latitude", 3);
        let result = csv_to_locator_csv(&csv_path, &output_path, &config);
        assert!(matches!(result, Err(LocatorError::CsvError(_))));
        Ok(())
    }

    #[test]
    fn test_csv_out_of_range_coordinate() -> Result<(), LocatorError> {
        let dir = tempdir().map_err(|e| LocatorError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("test.csv");
        let output_path = dir.path().join("output.csv");

        let mut file =
            File::create(&csv_path).map_err(|e| LocatorError::IoError(e.to_string()))?;
        writeln!(file, "lon,lat").map_err(|e| LocatorError::IoError(e.to_string()))?;
        writeln!(file, "10.0,123.0").map_err(|e| LocatorError::IoError(e.to_string()))?;

        let config = LocatorCsvConfig::from_coords("lon", "lat", 3);
        let result = csv_to_locator_csv(&csv_path, &output_path, &config);
        assert!(matches!(
            result,
            Err(LocatorError::InvalidCoordinate { .. })
        ));
        Ok(())
    }
}
