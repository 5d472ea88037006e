//! Default parameters and limits for palette extraction
//!
//! This module contains compile-time constants for the clustering pipeline.
//! The clustering defaults match the behavior of naive Lloyd's k-means over
//! small palettes (typically 20 colors or fewer).

/// Default number of colors to extract from an image
pub const DEFAULT_PALETTE_SIZE: usize = 7;

/// K-means clustering parameters
pub mod clustering {
    /// Default delta threshold: iteration stops once fewer than this fraction
    /// of observations changed cluster assignment.
    pub const DELTA_THRESHOLD: f64 = 0.05;

    /// Iteration safety cap. If the delta threshold is not met by this point,
    /// the partitioner returns its current clusters as a best-effort result.
    pub const MAX_ITERATIONS: usize = 100;
}

/// sRGB gamut boundaries for clamping converted colors
pub mod gamut {
    /// Minimum value of a normalized sRGB channel
    pub const CHANNEL_MIN: f64 = 0.0;

    /// Maximum value of a normalized sRGB channel
    pub const CHANNEL_MAX: f64 = 1.0;
}
