//! Marquee theme for MovieTUI
//!
//! Color palette and style helpers for the TUI: marquee gold on a dark
//! theater background.

use ratatui::style::{Color, Modifier, Style};

/// Marquee color palette
pub struct Theme;

impl Theme {
    // ═══════════════════════════════════════════════════════════════════════
    // CORE PALETTE
    // ═══════════════════════════════════════════════════════════════════════

    /// Background: #0d0b14 (theater dark)
    pub const BACKGROUND: Color = Color::Rgb(0x0d, 0x0b, 0x14);

    /// Primary: #ffc857 (marquee gold)
    pub const PRIMARY: Color = Color::Rgb(0xff, 0xc8, 0x57);

    /// Secondary: #e84855 (velvet red)
    pub const SECONDARY: Color = Color::Rgb(0xe8, 0x48, 0x55);

    /// Accent: #7bdff2 (screen glow)
    pub const ACCENT: Color = Color::Rgb(0x7b, 0xdf, 0xf2);

    /// Highlight: #ff9f1c (popcorn orange)
    pub const HIGHLIGHT: Color = Color::Rgb(0xff, 0x9f, 0x1c);

    /// Text: #ece6f0
    pub const TEXT: Color = Color::Rgb(0xec, 0xe6, 0xf0);

    /// Dim: #5c5470
    pub const DIM: Color = Color::Rgb(0x5c, 0x54, 0x70);

    /// Success: #6ee7a0
    pub const SUCCESS: Color = Color::Rgb(0x6e, 0xe7, 0xa0);

    /// Warning: #ffb347
    pub const WARNING: Color = Color::Rgb(0xff, 0xb3, 0x47);

    /// Error: #ff5964
    pub const ERROR: Color = Color::Rgb(0xff, 0x59, 0x64);

    // ═══════════════════════════════════════════════════════════════════════
    // DERIVED COLORS
    // ═══════════════════════════════════════════════════════════════════════

    /// Card and input background
    pub const BACKGROUND_LIGHT: Color = Color::Rgb(0x1a, 0x17, 0x26);

    /// Border color (dim gold)
    pub const BORDER: Color = Color::Rgb(0x8a, 0x6d, 0x2f);

    /// Border color when focused
    pub const BORDER_FOCUSED: Color = Self::PRIMARY;

    // ═══════════════════════════════════════════════════════════════════════
    // STYLE HELPERS
    // ═══════════════════════════════════════════════════════════════════════

    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND)
    }

    /// Dimmed/muted text
    pub fn dimmed() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    /// Title/header style
    pub fn title() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Normal/unfocused border
    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    /// Focused border
    pub fn border_focused() -> Style {
        Style::default()
            .fg(Self::BORDER_FOCUSED)
            .add_modifier(Modifier::BOLD)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // COMPONENT STYLES
    // ═══════════════════════════════════════════════════════════════════════

    /// Card title, inverted when the card is highlighted
    pub fn card_title(selected: bool) -> Style {
        if selected {
            Style::default()
                .fg(Self::BACKGROUND)
                .bg(Self::PRIMARY)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Self::TEXT)
                .add_modifier(Modifier::BOLD)
        }
    }

    /// Rating badge, colored by score
    pub fn rating(rating: Option<f32>) -> Style {
        match rating {
            Some(r) if r >= 7.5 => Style::default().fg(Self::SUCCESS),
            Some(r) if r >= 5.0 => Style::default().fg(Self::WARNING),
            Some(r) if r > 0.0 => Style::default().fg(Self::ERROR),
            _ => Self::dimmed(),
        }
    }

    pub fn input() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND_LIGHT)
    }

    /// Keybinding hint style
    pub fn keybind() -> Style {
        Style::default().fg(Self::HIGHLIGHT)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND_LIGHT)
    }

    /// Loading indicator
    pub fn loading() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Year metadata
    pub fn year() -> Style {
        Style::default().fg(Self::SECONDARY)
    }

    pub fn genre() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    /// Section heading in the detail view
    pub fn heading() -> Style {
        Style::default()
            .fg(Self::HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    }

    /// Poster URL line
    pub fn poster() -> Style {
        Style::default()
            .fg(Self::DIM)
            .add_modifier(Modifier::ITALIC)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// COLOR UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Calculate relative luminance for a color (used in contrast ratio)
/// Formula: https://www.w3.org/TR/WCAG20/#relativeluminancedef
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    fn channel_luminance(c: u8) -> f64 {
        let c = c as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * channel_luminance(r) + 0.7152 * channel_luminance(g) + 0.0722 * channel_luminance(b)
}

/// Contrast ratio between two colors, from 1 (same) to 21 (black/white)
pub fn contrast_ratio(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> f64 {
    let l1 = relative_luminance(fg.0, fg.1, fg.2);
    let l2 = relative_luminance(bg.0, bg.1, bg.2);

    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };

    (lighter + 0.05) / (darker + 0.05)
}

/// WCAG AA for normal text (4.5:1)
pub fn meets_wcag_aa(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> bool {
    contrast_ratio(fg, bg) >= 4.5
}

/// WCAG AA for large text (3:1)
pub fn meets_wcag_aa_large(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> bool {
    contrast_ratio(fg, bg) >= 3.0
}

/// Extract RGB tuple from ratatui Color (only works for Rgb variant)
pub fn color_to_rgb(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(color: Color) -> (u8, u8, u8) {
        color_to_rgb(color).expect("Theme colors should all be RGB")
    }

    #[test]
    fn test_all_theme_colors_are_rgb() {
        for color in [
            Theme::BACKGROUND,
            Theme::PRIMARY,
            Theme::SECONDARY,
            Theme::ACCENT,
            Theme::HIGHLIGHT,
            Theme::TEXT,
            Theme::DIM,
            Theme::SUCCESS,
            Theme::WARNING,
            Theme::ERROR,
            Theme::BACKGROUND_LIGHT,
            Theme::BORDER,
        ] {
            assert!(color_to_rgb(color).is_some());
        }
    }

    #[test]
    fn test_text_contrast_against_background() {
        let bg = rgb(Theme::BACKGROUND);
        assert!(meets_wcag_aa(rgb(Theme::TEXT), bg));
        assert!(meets_wcag_aa(rgb(Theme::TEXT), rgb(Theme::BACKGROUND_LIGHT)));
    }

    #[test]
    fn test_palette_readable_as_large_text() {
        let bg = rgb(Theme::BACKGROUND);
        for (name, color) in [
            ("PRIMARY", Theme::PRIMARY),
            ("SECONDARY", Theme::SECONDARY),
            ("ACCENT", Theme::ACCENT),
            ("HIGHLIGHT", Theme::HIGHLIGHT),
            ("ERROR", Theme::ERROR),
            ("SUCCESS", Theme::SUCCESS),
            ("WARNING", Theme::WARNING),
        ] {
            let ratio = contrast_ratio(rgb(color), bg);
            assert!(
                meets_wcag_aa_large(rgb(color), bg),
                "{} on BACKGROUND contrast {:.2}:1 must be >= 3:1",
                name,
                ratio
            );
        }
    }

    #[test]
    fn test_selected_card_title_contrast() {
        assert!(meets_wcag_aa(rgb(Theme::BACKGROUND), rgb(Theme::PRIMARY)));
    }

    #[test]
    fn test_rating_style_buckets() {
        assert_eq!(Theme::rating(Some(8.8)).fg, Some(Theme::SUCCESS));
        assert_eq!(Theme::rating(Some(6.1)).fg, Some(Theme::WARNING));
        assert_eq!(Theme::rating(Some(2.0)).fg, Some(Theme::ERROR));
        assert_eq!(Theme::rating(None).fg, Some(Theme::DIM));
    }

    #[test]
    fn test_contrast_ratio_extremes() {
        let ratio = contrast_ratio((0, 0, 0), (255, 255, 255));
        assert!((ratio - 21.0).abs() < 0.01);
        let same = contrast_ratio((0x80, 0x80, 0x80), (0x80, 0x80, 0x80));
        assert!((same - 1.0).abs() < 0.001);
    }
}
