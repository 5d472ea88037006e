//! Color space conversion utilities
//!
//! Provides the conversions used across the clustering pipeline:
//! - sRGB to CIE L*a*b* (D65 reference white) for clustering input
//! - Lab back to sRGB with gamut clamping for display output
//! - Hex color representation
//! - Squared Euclidean distance in Lab space
//!
//! Euclidean distance in Lab approximates perceptual color difference, which
//! is what makes naive k-means over pixel colors meaningful; distance in raw
//! RGB space does not have this property.

use palette::{convert::IntoColorUnclamped, white_point::D65, FromColor, IntoColor, Lab, Srgb};

use crate::constants::gamut;

/// A color in CIE L*a*b* coordinates with 64-bit float components.
///
/// L is roughly in [0, 100]; a and b are unbounded in practice and only
/// clamped to the sRGB gamut on output.
pub type LabColor = Lab<D65, f64>;

/// Convert an 8-bit sRGB color to Lab (D65)
///
/// Always succeeds for any channel values; the standard
/// sRGB -> CIE XYZ -> CIE Lab transform has no failure cases.
pub fn srgb_to_lab(rgb: Srgb<u8>) -> LabColor {
    let rgb: Srgb<f64> = rgb.into_format();
    Lab::from_color(rgb)
}

/// Convert a Lab color to normalized sRGB, clamping each channel to the
/// representable gamut
///
/// Lab -> RGB can legitimately overshoot near gamut boundaries, so channels
/// are clamped rather than treated as an error.
pub fn lab_to_srgb(lab: LabColor) -> Srgb<f64> {
    let srgb: Srgb<f64> = lab.into_color();
    Srgb::new(
        srgb.red.clamp(gamut::CHANNEL_MIN, gamut::CHANNEL_MAX),
        srgb.green.clamp(gamut::CHANNEL_MIN, gamut::CHANNEL_MAX),
        srgb.blue.clamp(gamut::CHANNEL_MIN, gamut::CHANNEL_MAX),
    )
}

/// Convert a Lab color to a displayable 8-bit sRGB color
pub fn lab_to_srgb_u8(lab: LabColor) -> Srgb<u8> {
    lab_to_srgb(lab).into_format()
}

/// Format an 8-bit sRGB color as a hex string (e.g., "#FF0000")
pub fn srgb_to_hex(rgb: Srgb<u8>) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.red, rgb.green, rgb.blue)
}

/// Squared Euclidean distance between two Lab colors
///
/// No square root is taken since only the relative ordering of distances
/// matters during cluster assignment.
pub fn distance_squared(a: &LabColor, b: &LabColor) -> f64 {
    let dl = a.l - b.l;
    let da = a.a - b.a;
    let db = a.b - b.b;
    dl * dl + da * da + db * db
}

/// Check whether a Lab color converts to sRGB without clamping
pub fn is_in_srgb_gamut(lab: LabColor) -> bool {
    let srgb: Srgb<f64> = lab.into_color_unclamped();
    srgb.red >= gamut::CHANNEL_MIN
        && srgb.red <= gamut::CHANNEL_MAX
        && srgb.green >= gamut::CHANNEL_MIN
        && srgb.green <= gamut::CHANNEL_MAX
        && srgb.blue >= gamut::CHANNEL_MIN
        && srgb.blue <= gamut::CHANNEL_MAX
}
