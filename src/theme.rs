//! Centralized theme and styling for the TUI
//!
//! Single source of truth for the colors and styles of every screen. The
//! palette follows the studio's brand: indigo for structure, emerald for
//! selected add-ons, white for totals.
//!
//! # Usage
//! ```rust
//! use hotfixers::theme::{Colors, Styles};
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! ```

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors
    // -------------------------------------------------------------------------

    /// Page background
    pub const BG_PRIMARY: Color = Color::Rgb(10, 10, 15);

    /// Summary panel and dialog background
    pub const BG_SECONDARY: Color = Color::Rgb(20, 24, 38);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Body copy
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Hints, placeholders, fine print
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors
    // -------------------------------------------------------------------------

    /// Brand indigo - borders, titles, package prices
    pub const PRIMARY: Color = Color::Rgb(129, 140, 248);

    /// Emerald - selected add-ons and confirmations
    pub const SUCCESS: Color = Color::Rgb(52, 211, 153);

    /// Amber - badges and top-choice markers
    pub const BADGE: Color = Color::Rgb(251, 191, 36);

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    /// Focused border color
    pub const BORDER_ACTIVE: Color = Color::Rgb(99, 102, 241);

    /// Unfocused border color
    pub const BORDER_INACTIVE: Color = Color::Rgb(55, 65, 81);

    /// Cursor row background
    pub const CURSOR_BG: Color = Color::Rgb(49, 46, 129);

    /// Navigation hint color
    pub const NAV_HINT: Color = Color::DarkGray;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Muted/secondary text
    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Body copy (gray)
    pub fn text_secondary() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Main title style (indigo, bold)
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Small uppercase section label ("BASE", "ADD-ONS")
    pub fn label() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Package prices
    pub fn price() -> Style {
        Style::default().fg(Colors::PRIMARY)
    }

    /// The grand total
    pub fn total() -> Style {
        Style::default()
            .fg(Colors::FG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn badge() -> Style {
        Style::default()
            .fg(Colors::BADGE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_active() -> Style {
        Style::default().fg(Colors::BORDER_ACTIVE)
    }

    pub fn border_inactive() -> Style {
        Style::default().fg(Colors::BORDER_INACTIVE)
    }

    /// Panel background
    pub fn panel_bg() -> Style {
        Style::default().bg(Colors::BG_PRIMARY)
    }

    /// Summary/dialog background
    pub fn panel_bg_alt() -> Style {
        Style::default().bg(Colors::BG_SECONDARY)
    }

    /// Row under the cursor
    pub fn cursor() -> Style {
        Style::default()
            .bg(Colors::CURSOR_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected package / add-on marker
    pub fn selected() -> Style {
        Style::default()
            .fg(Colors::SUCCESS)
            .add_modifier(Modifier::BOLD)
    }

    pub fn unselected() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    pub fn success() -> Style {
        Style::default().fg(Colors::SUCCESS)
    }

    /// Primary call-to-action button
    pub fn button_active() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Colors::FG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button_inactive() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Navigation hint (keybindings)
    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }
}

// =============================================================================
// TEXT CONSTANTS
// =============================================================================

/// Common UI text strings
pub struct UiText;

impl UiText {
    pub const STUDIO: &'static str = "Hotfixers";
    pub const NO_ADDONS: &'static str = "No add-ons selected";
    pub const ESTIMATE_NOTE: &'static str =
        "This is an estimate. Final quote may vary based on specific requirements.";
    pub const BTN_REVIEW: &'static str = "[ Review Order → ]";
    pub const BTN_PLACE_ORDER: &'static str = "[ Place Order ]";
    pub const BTN_CLOSE: &'static str = "[ Close ]";
    pub const ORDER_PLACED: &'static str = "Order received!";
    pub const ORDER_PLACED_NOTE: &'static str =
        "We'll reach out within one business day to confirm the scope.";
    pub const FOOTER: &'static str = "© 2026 Hotfixers. Building the future.";
}
