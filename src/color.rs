use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::ClubRecord;
use crate::data::views::Selection;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Accent for the selected club's bars and scatter point.
pub const HIGHLIGHT: Color32 = Color32::from_rgb(0xff, 0x7f, 0x0e);

/// Everything that is not selected, when a selection is active.
pub const DIMMED: Color32 = Color32::from_rgb(0xd3, 0xd3, 0xd3);

/// Base color of the offense/defense scatter points.
pub const SCATTER: Color32 = Color32::from_rgb(0x1f, 0x77, 0xb4);

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Chart coloring: one color per bar, selection-aware
// ---------------------------------------------------------------------------

/// One color per row, in row order. With no selection every club gets its
/// own hue; with a selected club that row gets the accent and the rest are
/// dimmed grey, mirroring the dynamic palettes of the original dashboard.
pub fn bar_palette(rows: &[&ClubRecord], selection: &Selection) -> Vec<Color32> {
    match selection {
        Selection::Todos => generate_palette(rows.len()),
        Selection::Club(_) => rows
            .iter()
            .map(|r| {
                if selection.is_highlighted(r) {
                    HIGHLIGHT
                } else {
                    DIMMED
                }
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::ClubRecord;

    fn club(name: &str, rank: u32) -> ClubRecord {
        ClubRecord {
            name: name.to_string(),
            original_rank: rank,
            wins: 10,
            losses: 14,
            draws: 14,
            goals_for: 40,
            goals_against: 40,
            goal_difference: 0,
            squad_total_value: 10_000_000,
            squad_average_value: 400_000,
            squad_average_age: 26.0,
        }
    }

    #[test]
    fn palette_has_distinct_colors() {
        let palette = generate_palette(20);
        assert_eq!(palette.len(), 20);
        let unique: std::collections::HashSet<_> = palette.iter().collect();
        assert_eq!(unique.len(), 20);
    }

    #[test]
    fn selection_dims_everything_but_the_selected_club() {
        let a = club("Cruzeiro", 1);
        let b = club("Santos", 2);
        let rows = vec![&a, &b];
        let colors = bar_palette(&rows, &Selection::Club("Santos".to_string()));
        assert_eq!(colors, vec![DIMMED, HIGHLIGHT]);
    }
}
