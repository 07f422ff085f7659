//! This module is responsible for reading street map records
//! and building the street graph from them.

mod builder;
mod config;
mod parser;

pub use builder::{create_street_graph, load_street_graph};
pub use config::GraphConfig;
