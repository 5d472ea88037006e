//! Color space conversion module
//!
//! This module handles conversions between device sRGB and the perceptually
//! uniform CIE L*a*b* space in which clustering distances are computed.

pub mod conversion;

pub use conversion::{
    distance_squared, is_in_srgb_gamut, lab_to_srgb, lab_to_srgb_u8, srgb_to_hex, srgb_to_lab,
    LabColor,
};
