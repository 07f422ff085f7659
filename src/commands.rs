use std::path::Path;
use std::process::ExitCode;

use meridian_core::prelude::*;
use serde_json::json;
use tracing::{info, warn};

use crate::cli::OutputArgs;
use crate::config::{AppConfig, OutputFormat};
use crate::error::CliError;

/// Exit status when the query is valid but has no answer
const NO_RESULT: u8 = 2;

fn load_graph(map: &Path, config: &AppConfig) -> Result<StreetGraph, CliError> {
    let graph_config = GraphConfig {
        input_path: map.to_path_buf(),
        distance_model: config.distance,
    };
    Ok(create_street_graph(&graph_config)?)
}

fn wants_json(args: &OutputArgs, config: &AppConfig) -> bool {
    args.json || config.output.format == OutputFormat::Json
}

fn write_geojson(
    graph: &StreetGraph,
    highlight: Option<&Highlight>,
    out: &Path,
) -> Result<(), CliError> {
    let text = to_geojson_string(graph, highlight)?;
    std::fs::write(out, text).map_err(|source| CliError::Write {
        path: out.to_path_buf(),
        source,
    })?;
    info!("Wrote GeoJSON to {}", out.display());
    Ok(())
}

pub fn directions(
    config: &AppConfig,
    map: &Path,
    from: &str,
    to: &str,
    args: &OutputArgs,
) -> Result<ExitCode, CliError> {
    let graph = load_graph(map, config)?;
    let paths = ShortestPaths::new(&graph, from)?;

    let path = match paths.path_to(to) {
        Ok(path) => path,
        Err(Error::NoPath { .. }) => {
            warn!("{to} is not reachable from {from}");
            if wants_json(args, config) {
                let result = paths.distance_result(to)?;
                println!(
                    "{}",
                    json!({ "source": from, "target": to, "reachable": result.reachable })
                );
            } else {
                println!("No path to {to} exists.");
            }
            return Ok(ExitCode::from(NO_RESULT));
        }
        Err(e) => return Err(e.into()),
    };

    if wants_json(args, config) {
        println!("{}", serde_json::to_string_pretty(&path)?);
    } else {
        let precision = config.output.precision;
        println!("Shortest path to {to} from {from}:");
        for leg in &path.legs {
            println!(
                "\t{}: {:.*} miles",
                leg.edge_name, precision, leg.weight_miles
            );
        }
        println!("\tTotal distance: {:.*} miles", precision, path.total_miles);
    }

    if let Some(out) = &args.geojson {
        write_geojson(&graph, Some(&path.highlight), out)?;
    }
    Ok(ExitCode::SUCCESS)
}

pub fn mst(config: &AppConfig, map: &Path, args: &OutputArgs) -> Result<ExitCode, CliError> {
    let graph = load_graph(map, config)?;

    let tree = match MinimumSpanningTree::new(&graph) {
        Ok(tree) => tree,
        Err(Error::DisconnectedGraph { reached, total }) => {
            warn!("Only {reached} of {total} intersections are connected");
            if wants_json(args, config) {
                println!(
                    "{}",
                    json!({ "connected": false, "reached": reached, "total": total })
                );
            } else {
                println!("No minimum spanning tree exists for this graph.");
            }
            return Ok(ExitCode::from(NO_RESULT));
        }
        Err(e) => return Err(e.into()),
    };

    if wants_json(args, config) {
        println!("{}", serde_json::to_string_pretty(&tree)?);
    } else {
        let precision = config.output.precision;
        println!("MINIMUM SPANNING TREE:");
        for leg in tree.legs() {
            println!(
                "\t{}: {:.*} miles",
                leg.edge_name, precision, leg.weight_miles
            );
        }
        println!("\tTotal weight: {:.*} miles", precision, tree.total_weight());
    }

    if let Some(out) = &args.geojson {
        write_geojson(&graph, Some(tree.highlight()), out)?;
    }
    Ok(ExitCode::SUCCESS)
}

pub fn show(config: &AppConfig, map: &Path, out: &Path) -> Result<ExitCode, CliError> {
    let graph = load_graph(map, config)?;
    write_geojson(&graph, None, out)?;
    println!(
        "Wrote {} intersections and {} streets to {}",
        graph.vertex_count(),
        graph.edge_count(),
        out.display()
    );
    Ok(ExitCode::SUCCESS)
}

pub fn info(config: &AppConfig, map: &Path, json: bool) -> Result<ExitCode, CliError> {
    let graph = load_graph(map, config)?;
    let bounds = graph.bounds();

    if json || config.output.format == OutputFormat::Json {
        let bounds = bounds.map(|rect| {
            json!({
                "min_latitude": rect.min().y,
                "min_longitude": rect.min().x,
                "max_latitude": rect.max().y,
                "max_longitude": rect.max().x,
            })
        });
        let value = json!({
            "intersections": graph.vertex_count(),
            "streets": graph.edge_count(),
            "bounds": bounds,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("Intersections: {}", graph.vertex_count());
        println!("Streets: {}", graph.edge_count());
        if let Some(rect) = bounds {
            println!(
                "Bounds: ({}, {}) to ({}, {})",
                rect.min().y,
                rect.min().x,
                rect.max().y,
                rect.max().x
            );
        }
    }
    Ok(ExitCode::SUCCESS)
}
