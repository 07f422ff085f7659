use std::path::PathBuf;

use crate::DistanceModel;

/// Where to read the street map from and how to weight its streets.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    pub input_path: PathBuf,
    pub distance_model: DistanceModel,
}

impl GraphConfig {
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            distance_model: DistanceModel::default(),
        }
    }
}
