//! Shared color constants for the UI.

use egui::Color32;

/// Validation messages and the delete button.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Tag fill for male users.
pub const COLOR_BLUE: Color32 = Color32::from_rgb(22, 119, 255);

/// Tag fill for female users.
pub const COLOR_MAGENTA: Color32 = Color32::from_rgb(235, 47, 150);

/// Outline of a header or row currently hovered by a drag.
pub const COLOR_DROP_TARGET: Color32 = Color32::from_rgb(255, 193, 7);
