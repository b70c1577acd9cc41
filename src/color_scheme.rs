//! Chart theme colors.
//!
//! A much reduced palette compared to a full plotting UI: the monitor only
//! needs grid shades derived from the foreground color plus a translucent
//! tint of the series color for the area fill.

use egui::Color32;

/// Visual theme for the chart surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartTheme {
    #[default]
    Light,
    Dark,
}

impl ChartTheme {
    /// Pick the theme matching the surrounding egui visuals.
    pub fn from_visuals(visuals: &egui::Visuals) -> Self {
        if visuals.dark_mode {
            ChartTheme::Dark
        } else {
            ChartTheme::Light
        }
    }

    fn fg(self) -> Color32 {
        match self {
            ChartTheme::Light => Color32::BLACK,
            ChartTheme::Dark => Color32::WHITE,
        }
    }

    /// Prominent gridline shade (labelled second lines, value grid).
    pub fn grid_color(self) -> Color32 {
        self.fg().gamma_multiply(0.08)
    }

    /// Faint gridline shade (unlabelled second lines).
    pub fn faint_grid_color(self) -> Color32 {
        self.fg().gamma_multiply(0.02)
    }

    /// Baseline stroke at the bottom edge, more visible than the grid.
    pub fn baseline_color(self) -> Color32 {
        self.fg().gamma_multiply(0.2)
    }

    /// Axis label text color.
    pub fn label_color(self) -> Color32 {
        self.fg().gamma_multiply(0.5)
    }
}

/// Translucent tint of the series color used for the area fill.
pub fn fill_tint(color: Color32) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 51)
}
