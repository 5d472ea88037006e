//! K-means clustering module
//!
//! This module partitions pixel observations in Lab space into a requested
//! number of clusters whose centers become the extracted palette colors.

pub mod kmeans;

pub use kmeans::{Cluster, KMeans};

use crate::color::LabColor;

/// One clustering data point: a pixel color in Lab space.
///
/// The observation set is unordered; insertion order does not affect cluster
/// assignment.
pub type Observation = LabColor;
