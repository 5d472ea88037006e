//! Pipeline orchestration: image source and output sink abstractions,
//! observation extraction, and the [`Paletter`] orchestrator that wires
//! extraction -> partitioning -> assembly together.
//!
//! The pipeline owns no I/O. Decoding image containers and rendering the
//! finished palette belong to the collaborators implementing [`ImageSource`]
//! and [`OutputSink`].

use palette::Srgba;

use crate::cluster::{KMeans, Observation};
use crate::color::srgb_to_lab;
use crate::config::PaletteConfig;
use crate::error::Result;
use crate::palette::Palette;

/// A decoded raster image the pipeline can read pixels from.
///
/// Any decoder (PNG, JPEG, BMP, TIFF, WebP, ...) can supply this. The alpha
/// channel is carried through [`ImageSource::pixel`] but ignored by the
/// clustering pipeline.
pub trait ImageSource {
    /// Image width and height in pixels
    fn dimensions(&self) -> (u32, u32);

    /// Color of the pixel at (x, y); coordinates are within `dimensions`
    fn pixel(&self, x: u32, y: u32) -> Srgba<u8>;
}

/// A consumer of the finished palette.
///
/// Implementations perform the side-effecting materialization (composite
/// image write, HTML page write, ...). Errors are propagated to the
/// orchestrator's caller without modification and never retried.
pub trait OutputSink {
    /// Receive the ordered palette and perform the necessary I/O
    fn write(&mut self, palette: &Palette) -> Result<()>;
}

/// Flatten an image into clustering observations.
///
/// Visits every pixel in row-major order exactly once and converts it to Lab.
/// No deduplication or sampling is applied; a zero-area image yields an empty
/// vector, which the partitioner rejects as `EmptyInput`.
pub fn extract_observations(image: &impl ImageSource) -> Vec<Observation> {
    let (width, height) = image.dimensions();
    // Saturate the capacity hint: width * height can exceed usize::MAX on
    // 32-bit targets, and a short hint only costs a reallocation.
    let mut observations = Vec::with_capacity((width as usize).saturating_mul(height as usize));

    for y in 0..height {
        for x in 0..width {
            let rgba = image.pixel(x, y);
            observations.push(srgb_to_lab(rgba.color));
        }
    }

    observations
}

/// Orchestrates one palette extraction run.
///
/// Holds only the configuration; each call to [`Paletter::generate`] or
/// [`Paletter::palette`] is an independent, synchronous batch computation.
///
/// # Example
///
/// ```rust
/// use chroma_palette::{ImageSource, Paletter};
/// use palette::Srgba;
///
/// struct Checker;
///
/// impl ImageSource for Checker {
///     fn dimensions(&self) -> (u32, u32) {
///         (2, 2)
///     }
///     fn pixel(&self, x: u32, y: u32) -> Srgba<u8> {
///         if (x + y) % 2 == 0 {
///             Srgba::new(255, 0, 0, 255)
///         } else {
///             Srgba::new(0, 0, 255, 255)
///         }
///     }
/// }
///
/// let palette = Paletter::new(2).palette(&Checker)?;
/// assert_eq!(palette.len(), 2);
/// # Ok::<(), chroma_palette::PaletteError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Paletter {
    config: PaletteConfig,
}

impl Paletter {
    /// Create an orchestrator extracting `n_colors` colors with default
    /// clustering parameters
    pub fn new(n_colors: usize) -> Self {
        Self {
            config: PaletteConfig::with_colors(n_colors),
        }
    }

    /// Create an orchestrator from a full configuration
    ///
    /// # Errors
    ///
    /// Returns `PaletteError::InvalidParameter` if the configuration fails
    /// validation.
    pub fn from_config(config: PaletteConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration
    pub fn config(&self) -> &PaletteConfig {
        &self.config
    }

    /// Extract the palette and hand it to the output sink.
    ///
    /// Parameters are validated before any pixel is read. Errors from
    /// partitioning or from the sink are propagated without modification.
    pub fn generate<I, O>(&self, image: &I, sink: &mut O) -> Result<()>
    where
        I: ImageSource,
        O: OutputSink,
    {
        let palette = self.palette(image)?;
        sink.write(&palette)
    }

    /// Extract the palette without involving a sink
    ///
    /// # Errors
    ///
    /// - `PaletteError::InvalidParameter` if the configuration is invalid or
    ///   more colors are requested than the image has pixels
    /// - `PaletteError::EmptyInput` for a zero-area image
    pub fn palette(&self, image: &impl ImageSource) -> Result<Palette> {
        self.config.validate()?;

        let observations = extract_observations(image);

        let mut kmeans =
            KMeans::with_options(self.config.delta_threshold, self.config.max_iterations)?;
        if let Some(seed) = self.config.seed {
            kmeans = kmeans.with_seed(seed);
        }

        let clusters = kmeans.partition(&observations, self.config.n_colors)?;
        Ok(Palette::from_clusters(&clusters))
    }
}
