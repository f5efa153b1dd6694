use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Sector → Color32
// ---------------------------------------------------------------------------

/// Maps each sector to a distinct label colour.
///
/// Hues are spread evenly around the wheel in sorted sector order, so a
/// sector keeps its colour while the user changes filters.
#[derive(Debug, Clone)]
pub struct SectorColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl SectorColors {
    pub fn new(sectors: &BTreeSet<String>) -> Self {
        let step = 360.0 / sectors.len().max(1) as f32;
        let mapping = sectors
            .iter()
            .enumerate()
            .map(|(i, sector)| {
                let rgb: Srgb = Hsl::new(i as f32 * step, 0.65, 0.45).into_color();
                let rgb: Srgb<u8> = rgb.into_format();
                let color = Color32::from_rgb(rgb.red, rgb.green, rgb.blue);
                (sector.clone(), color)
            })
            .collect();

        SectorColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a sector.
    pub fn color_for(&self, sector: &str) -> Color32 {
        self.mapping
            .get(sector)
            .copied()
            .unwrap_or(self.default_color)
    }
}

impl Default for SectorColors {
    fn default() -> Self {
        Self::new(&BTreeSet::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_sectors_falls_back_to_gray() {
        let colors = SectorColors::default();
        assert_eq!(colors.color_for("Fintech"), Color32::GRAY);
    }

    #[test]
    fn test_sectors_get_distinct_colors() {
        let sectors: BTreeSet<String> = ["Biotech", "Energy", "Fintech"]
            .into_iter()
            .map(String::from)
            .collect();
        let colors = SectorColors::new(&sectors);
        assert_ne!(colors.color_for("Biotech"), colors.color_for("Energy"));
        assert_ne!(colors.color_for("Energy"), colors.color_for("Fintech"));
        assert_eq!(colors.color_for("Unknown"), Color32::GRAY);
    }
}
