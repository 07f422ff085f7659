use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Shortest paths and minimum spanning trees over street maps
#[derive(Debug, Parser)]
#[command(name = "meridian", version, about)]
pub struct Cli {
    /// TOML file with distance model and output defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shortest path between two intersections
    Directions {
        /// Street map file
        map: PathBuf,
        /// Title of the starting intersection
        from: String,
        /// Title of the destination intersection
        to: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Minimum spanning tree of the whole map
    Mst {
        /// Street map file
        map: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Export the whole map as GeoJSON with nothing highlighted
    Show {
        /// Street map file
        map: PathBuf,
        /// Where to write the GeoJSON
        #[arg(long, value_name = "FILE")]
        geojson: PathBuf,
    },
    /// Intersection and street counts
    Info {
        /// Street map file
        map: PathBuf,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Write the map as GeoJSON, with the result highlighted
    #[arg(long, value_name = "FILE")]
    pub geojson: Option<PathBuf>,
}
