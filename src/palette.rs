//! Palette assembly from cluster centers
//!
//! Converts the partitioner's final cluster centers into an ordered color
//! palette: colors are sorted by descending lightness (L*), and device-space
//! accessors clamp any channel that falls outside the sRGB gamut.

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::cluster::Cluster;
use crate::color::{lab_to_srgb_u8, srgb_to_hex, LabColor};

/// An ordered color palette, sorted by descending lightness.
///
/// This is the sole externally visible artifact of the clustering pipeline.
/// Constructed once and immutable afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    colors: Vec<LabColor>,
}

impl Palette {
    /// Build a palette from final cluster centers.
    ///
    /// Each center is interpreted as a Lab color and the list is sorted by
    /// descending L*, ties keeping their original cluster order. The output
    /// length always equals the cluster count.
    pub fn from_clusters(clusters: &[Cluster]) -> Self {
        let mut colors: Vec<LabColor> = clusters.iter().map(Cluster::center).collect();
        // sort_by is stable, so equal-lightness colors keep cluster order
        colors.sort_by(|a, b| b.l.partial_cmp(&a.l).expect("lightness is never NaN"));
        Self { colors }
    }

    /// Palette colors in Lab space, brightest first
    pub fn colors(&self) -> &[LabColor] {
        &self.colors
    }

    /// Number of colors in the palette
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette contains no colors
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Displayable 8-bit sRGB colors, gamut-clamped, in palette order.
    ///
    /// Never fails: out-of-gamut centers are clamped to the nearest
    /// representable value.
    pub fn to_srgb(&self) -> Vec<Srgb<u8>> {
        self.colors.iter().map(|&lab| lab_to_srgb_u8(lab)).collect()
    }

    /// Hex color strings ("#RRGGBB"), in palette order
    pub fn hex_strings(&self) -> Vec<String> {
        self.to_srgb().iter().map(|&rgb| srgb_to_hex(rgb)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cluster(l: f64, a: f64, b: f64) -> Cluster {
        Cluster::new(LabColor::new(l, a, b))
    }

    #[test]
    fn test_sorted_by_descending_lightness() {
        let clusters = vec![
            cluster(30.0, 0.0, 0.0),
            cluster(90.0, 0.0, 0.0),
            cluster(60.0, 0.0, 0.0),
        ];
        let palette = Palette::from_clusters(&clusters);

        let lightness: Vec<f64> = palette.colors().iter().map(|c| c.l).collect();
        assert_eq!(lightness, vec![90.0, 60.0, 30.0]);
    }

    #[test]
    fn test_ties_keep_cluster_order() {
        let clusters = vec![
            cluster(50.0, 10.0, 0.0),
            cluster(50.0, 20.0, 0.0),
            cluster(50.0, 30.0, 0.0),
        ];
        let palette = Palette::from_clusters(&clusters);

        let a_values: Vec<f64> = palette.colors().iter().map(|c| c.a).collect();
        assert_eq!(a_values, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_length_equals_cluster_count() {
        let clusters: Vec<Cluster> = (0..7).map(|i| cluster(i as f64 * 10.0, 0.0, 0.0)).collect();
        let palette = Palette::from_clusters(&clusters);
        assert_eq!(palette.len(), 7);
        assert!(!palette.is_empty());
    }

    #[test]
    fn test_out_of_gamut_centers_clamp() {
        // Chroma far beyond what sRGB can represent
        let clusters = vec![cluster(50.0, 250.0, -250.0)];
        let palette = Palette::from_clusters(&clusters);

        // Conversion must not fail or wrap; it yields a valid 8-bit color
        let srgb = palette.to_srgb();
        assert_eq!(srgb.len(), 1);
    }

    #[test]
    fn test_hex_strings_format() {
        let clusters = vec![cluster(100.0, 0.0, 0.0), cluster(0.0, 0.0, 0.0)];
        let palette = Palette::from_clusters(&clusters);

        let hex = palette.hex_strings();
        assert_eq!(hex.len(), 2);
        for h in &hex {
            assert!(h.starts_with('#'));
            assert_eq!(h.len(), 7);
        }
        // Brightest first: white-ish then black-ish
        assert_eq!(hex[0], "#FFFFFF");
        assert_eq!(hex[1], "#000000");
    }

    #[test]
    fn test_serialization_round_trip() {
        let clusters = vec![cluster(75.0, 12.5, -8.0), cluster(25.0, -3.0, 40.0)];
        let palette = Palette::from_clusters(&clusters);

        let json = serde_json::to_string(&palette).unwrap();
        let parsed: Palette = serde_json::from_str(&json).unwrap();
        assert_eq!(palette, parsed);
    }
}
