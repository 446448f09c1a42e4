//! Chart dimensions and the sector color palette.

use covimpact_data::Sector;
use plotters::style::RGBColor;

/// Shared styling for all charts.
#[derive(Debug, Clone)]
pub struct ChartStyle {
    /// Image width in pixels.
    pub width: u32,

    /// Image height in pixels.
    pub height: u32,

    /// Outer margin in pixels.
    pub margin: u32,

    /// Width of the axis label areas in pixels.
    pub label_area: u32,

    /// Font size for chart captions.
    pub caption_size: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            margin: 12,
            label_area: 55,
            caption_size: 28,
        }
    }
}

impl ChartStyle {
    /// Stable color for a sector, consistent across all charts.
    pub const fn sector_color(sector: Sector) -> RGBColor {
        match sector {
            Sector::Retail => RGBColor(31, 119, 180),
            Sector::Hospitality => RGBColor(255, 127, 14),
            Sector::Manufacturing => RGBColor(44, 160, 44),
            Sector::Services => RGBColor(214, 39, 40),
            Sector::Healthcare => RGBColor(148, 103, 189),
        }
    }
}
