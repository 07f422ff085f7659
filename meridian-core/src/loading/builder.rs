use std::fs::File;
use std::io::{BufRead, BufReader};

use log::info;

use super::config::GraphConfig;
use super::parser::{Record, parse_record};
use crate::{DistanceModel, Error, StreetGraph};

/// Creates a street graph from the map file named in the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read or any record is malformed.
/// No partially built graph is ever returned.
pub fn create_street_graph(config: &GraphConfig) -> Result<StreetGraph, Error> {
    validate_config(config)?;

    info!("Reading street map: {}", config.input_path.display());
    let file = File::open(&config.input_path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!(
                "Failed to open file '{}': {}",
                config.input_path.display(),
                e
            ),
        )
    })?;

    let graph = load_street_graph(BufReader::new(file), config.distance_model)?;
    info!(
        "Street graph created with {} intersections and {} streets",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Builds a street graph from line records.
///
/// # Errors
///
/// Fails with [`Error::InvalidConfig`] for a degenerate distance model.
/// The first unreadable or malformed record aborts the build, reported
/// with its 1-based line number.
pub fn load_street_graph<R: BufRead>(
    reader: R,
    distance_model: DistanceModel,
) -> Result<StreetGraph, Error> {
    let mut graph = StreetGraph::with_distance_model(distance_model)?;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| Error::ReadLine {
            line: line_no,
            source,
        })?;

        let record = parse_record(&line).map_err(|source| Error::Record {
            line: line_no,
            source,
        })?;

        match record {
            Some(Record::Intersection {
                title,
                latitude,
                longitude,
            }) => {
                graph
                    .add_intersection(title, latitude, longitude)
                    .map_err(|e| e.at_line(line_no))?;
            }
            Some(Record::Street { name, from, to }) => {
                graph
                    .add_edge(name, from, to)
                    .map_err(|e| e.at_line(line_no))?;
            }
            None => {}
        }
    }

    Ok(graph)
}

fn validate_config(config: &GraphConfig) -> Result<(), Error> {
    if !config.input_path.exists() {
        return Err(Error::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Street map not found: {}", config.input_path.display()),
        )));
    }

    config.distance_model.validate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InputFormatError;

    const CAMPUS: &str = "\
# three intersections, two streets
i HOYT 43.130480 -77.631020
i WILSON 43.128712 -77.630516
i GOERGEN 43.126224 -77.629480

r R1 HOYT WILSON
r R2 WILSON GOERGEN
";

    #[test]
    fn loads_records_in_order() {
        let graph = load_street_graph(CAMPUS.as_bytes(), DistanceModel::default()).unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.lookup("GOERGEN").unwrap().id.index(), 2);
        for (_, street) in graph.edges() {
            assert!(street.weight > 0.0 && street.weight < 1.0);
        }
    }

    #[test]
    fn unknown_title_aborts_with_line_number() {
        let input = format!("{CAMPUS}r R3 GOERGEN LATTIMORE\n");
        let err = load_street_graph(input.as_bytes(), DistanceModel::default()).unwrap_err();
        match err {
            Error::Record { line, source } => {
                assert_eq!(line, 8);
                assert_eq!(
                    source,
                    InputFormatError::UnknownTitle("LATTIMORE".to_string())
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicate_title_aborts_build() {
        let input = "i A 1 1\ni B 2 2\ni A 3 3\n";
        let err = load_street_graph(input.as_bytes(), DistanceModel::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::Record {
                line: 3,
                source: InputFormatError::DuplicateTitle(_)
            }
        ));
    }

    #[test]
    fn unparsable_number_aborts_build() {
        let input = "i A 1 1\ni B 2 east\n";
        let err = load_street_graph(input.as_bytes(), DistanceModel::default()).unwrap_err();
        assert!(matches!(err, Error::Record { line: 2, .. }));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn degenerate_distance_model_is_rejected() {
        let input = "i A 0.0 0.0\ni B 0.0 0.01\nr R1 A B\n";
        for km_per_mile in [-1.609, 0.0] {
            let model = DistanceModel {
                km_per_mile,
                ..DistanceModel::default()
            };
            assert!(matches!(
                load_street_graph(input.as_bytes(), model),
                Err(Error::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn invalid_utf8_reports_line_number() {
        let input: &[u8] = b"i A 0.0 0.0\ni B \xff\xfe 0.01\n";
        match load_street_graph(input, DistanceModel::default()).unwrap_err() {
            Error::ReadLine { line, source } => {
                assert_eq!(line, 2);
                assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_rejected() {
        let config = GraphConfig::new("/nonexistent/street.map");
        assert!(matches!(
            create_street_graph(&config),
            Err(Error::IoError(_))
        ));
    }
}
