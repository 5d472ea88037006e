//! # Chroma Palette
//!
//! A Rust crate for extracting representative color palettes from raster
//! images through k-means clustering.
//!
//! The pipeline works in the CIE L*a*b* color space, where Euclidean
//! distance approximates perceptual color difference:
//! - Flattening image pixels into Lab observations
//! - Partitioning observations with naive Lloyd's k-means
//! - Assembling cluster centers into a palette sorted by lightness
//! - Handing the palette to an injected output sink
//!
//! Image decoding and palette rendering stay outside the crate, behind the
//! [`ImageSource`] and [`OutputSink`] traits.
//!
//! ## Example
//!
//! ```rust
//! use chroma_palette::{extract_palette, ImageSource};
//! use palette::Srgba;
//!
//! struct Stripes;
//!
//! impl ImageSource for Stripes {
//!     fn dimensions(&self) -> (u32, u32) {
//!         (4, 4)
//!     }
//!     fn pixel(&self, _x: u32, y: u32) -> Srgba<u8> {
//!         if y < 2 {
//!             Srgba::new(220, 30, 30, 255)
//!         } else {
//!             Srgba::new(20, 40, 180, 255)
//!         }
//!     }
//! }
//!
//! let palette = extract_palette(&Stripes, 2)?;
//! for hex in palette.hex_strings() {
//!     println!("{hex}");
//! }
//! # Ok::<(), chroma_palette::PaletteError>(())
//! ```

pub mod cluster;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod palette;
pub mod pipeline;

pub use cluster::{Cluster, KMeans, Observation};
pub use color::LabColor;
pub use config::PaletteConfig;
pub use error::{PaletteError, Result};
pub use self::palette::Palette;
pub use pipeline::{extract_observations, ImageSource, OutputSink, Paletter};

/// Extract a color palette from an image.
///
/// This is the main entry point for callers that do not need an output sink:
/// it runs the full pipeline with default clustering parameters and returns
/// the ordered palette directly.
///
/// Cluster centers are randomly seeded, so repeated calls on the same image
/// may return different (equally valid) palettes. Use
/// [`Paletter::from_config`] with a fixed seed for reproducible output.
///
/// # Arguments
///
/// * `image` - Pixel source to extract colors from
/// * `n_colors` - Number of palette colors (must be at least 1 and no larger
///   than the pixel count)
///
/// # Errors
///
/// Returns `PaletteError` if:
/// - `n_colors` is zero or exceeds the number of pixels
/// - The image has zero area
pub fn extract_palette(image: &impl ImageSource, n_colors: usize) -> Result<Palette> {
    Paletter::new(n_colors).palette(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::palette::Srgba;

    struct Solid([u8; 3]);

    impl ImageSource for Solid {
        fn dimensions(&self) -> (u32, u32) {
            (3, 3)
        }
        fn pixel(&self, _x: u32, _y: u32) -> Srgba<u8> {
            Srgba::new(self.0[0], self.0[1], self.0[2], 255)
        }
    }

    #[test]
    fn test_extract_palette_single_color() {
        let palette = extract_palette(&Solid([10, 200, 120]), 1).unwrap();
        assert_eq!(palette.len(), 1);

        let rgb = palette.to_srgb()[0];
        assert!((rgb.red as i16 - 10).abs() <= 1);
        assert!((rgb.green as i16 - 200).abs() <= 1);
        assert!((rgb.blue as i16 - 120).abs() <= 1);
    }

    #[test]
    fn test_extract_palette_rejects_zero_colors() {
        let err = extract_palette(&Solid([0, 0, 0]), 0).unwrap_err();
        assert!(matches!(err, PaletteError::InvalidParameter { .. }));
    }
}
