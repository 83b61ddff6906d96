// ABOUTME: Render-only TUI components for the wizard

pub mod confirmation_dialog;
pub mod header;
pub mod help;
pub mod layout;
pub mod step_form;
pub mod summary_view;

pub use layout::LayoutComponent;

use ratatui::style::Color;

// Color palette from the TUI style guide
pub(crate) const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
pub(crate) const GOLD: Color = Color::Rgb(255, 215, 0);
pub(crate) const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
pub(crate) const DARK_BG: Color = Color::Rgb(25, 25, 35);
pub(crate) const PANEL_BG: Color = Color::Rgb(30, 30, 40);
pub(crate) const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
pub(crate) const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
pub(crate) const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);
pub(crate) const WARNING_YELLOW: Color = Color::Rgb(220, 180, 80);
