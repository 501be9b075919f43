use ratatui::style::{Color, Modifier, Style};

/// Modern color palette for the Todo Enhanced TUI
#[derive(Debug, Clone)]
pub struct ModernTheme {
    // Primary colors
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub info: Color,

    // Background and surface colors
    #[allow(dead_code)]
    pub background: Color,
    #[allow(dead_code)]
    pub surface: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_disabled: Color,

    // Interactive colors
    pub selected: Color,
    pub border: Color,
    pub border_focused: Color,
}

impl Default for ModernTheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ModernTheme {
    /// Modern dark theme with an emerald accent
    pub fn dark() -> Self {
        Self {
            // Primary colors - Emerald/Teal gradient
            primary: Color::Rgb(16, 185, 129),  // Emerald-500
            secondary: Color::Rgb(20, 184, 166), // Teal-500
            accent: Color::Rgb(34, 211, 238),   // Cyan-400

            // Status colors
            success: Color::Rgb(34, 197, 94),  // Green-500
            warning: Color::Rgb(251, 191, 36), // Amber-500
            danger: Color::Rgb(239, 68, 68),   // Red-500
            info: Color::Rgb(59, 130, 246),    // Blue-500

            // Background colors
            background: Color::Rgb(17, 24, 39), // Gray-900
            surface: Color::Rgb(31, 41, 55),    // Gray-800

            // Text colors
            text_primary: Color::Rgb(243, 244, 246), // Gray-100
            text_secondary: Color::Rgb(156, 163, 175), // Gray-400
            text_disabled: Color::Rgb(107, 114, 128), // Gray-500

            // Interactive colors
            selected: Color::Rgb(6, 78, 59),          // Emerald-900
            border: Color::Rgb(75, 85, 99),           // Gray-600
            border_focused: Color::Rgb(16, 185, 129), // Emerald-500
        }
    }

    /// Light theme variant
    pub fn light() -> Self {
        Self {
            primary: Color::Rgb(5, 150, 105),   // Emerald-600
            secondary: Color::Rgb(13, 148, 136), // Teal-600
            accent: Color::Rgb(8, 145, 178),    // Cyan-600

            success: Color::Rgb(22, 163, 74),  // Green-600
            warning: Color::Rgb(217, 119, 6),  // Amber-600
            danger: Color::Rgb(220, 38, 38),   // Red-600
            info: Color::Rgb(37, 99, 235),     // Blue-600

            background: Color::Rgb(255, 255, 255),
            surface: Color::Rgb(249, 250, 251),

            text_primary: Color::Rgb(17, 24, 39),
            text_secondary: Color::Rgb(107, 114, 128),
            text_disabled: Color::Rgb(156, 163, 175),

            selected: Color::Rgb(209, 250, 229), // Emerald-100
            border: Color::Rgb(209, 213, 219),
            border_focused: Color::Rgb(5, 150, 105),
        }
    }

    /// Ocean theme with deep blue tones
    pub fn ocean() -> Self {
        Self {
            primary: Color::Rgb(14, 165, 233),  // Sky-500
            secondary: Color::Rgb(59, 130, 246), // Blue-500
            accent: Color::Rgb(6, 182, 212),    // Cyan-500

            success: Color::Rgb(52, 211, 153), // Emerald-400
            warning: Color::Rgb(251, 191, 36), // Amber-500
            danger: Color::Rgb(248, 113, 113), // Red-400
            info: Color::Rgb(96, 165, 250),    // Blue-400

            background: Color::Rgb(15, 23, 42), // Slate-900
            surface: Color::Rgb(30, 41, 59),    // Slate-800

            text_primary: Color::Rgb(226, 232, 240), // Slate-200
            text_secondary: Color::Rgb(148, 163, 184), // Slate-400
            text_disabled: Color::Rgb(100, 116, 139), // Slate-500

            selected: Color::Rgb(12, 74, 110),        // Sky-900
            border: Color::Rgb(51, 65, 85),           // Slate-700
            border_focused: Color::Rgb(14, 165, 233), // Sky-500
        }
    }
}

/// Icon set shared across the UI
pub struct ModernIcons;

impl ModernIcons {
    // Todo status
    pub const COMPLETED: &'static str = "✓"; // Check mark
    pub const PENDING: &'static str = "○"; // Hollow circle

    // Header and decorations
    pub const LOGO: &'static str = "☑"; // Checked box
    pub const TIME: &'static str = "◷"; // Clock
    pub const BULLET: &'static str = "•"; // Bullet point
    pub const EXPORT: &'static str = "⎘"; // Copy page
    pub const HELP: &'static str = "❓"; // Help question mark
}

/// Progress bar characters for modern look
pub struct ProgressChars;

impl ProgressChars {
    pub const FILLED: char = '█'; // Full block
    pub const EMPTY: char = '░'; // Light shade
    pub const PARTIAL: char = '▒'; // Medium shade
}

/// Pre-defined styles for common UI elements
impl ModernTheme {
    /// Style for headers and titles
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for secondary text
    pub fn secondary_text_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for success messages
    pub fn success_style(&self) -> Style {
        Style::default()
            .fg(self.success)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for warnings
    pub fn warning_style(&self) -> Style {
        Style::default()
            .fg(self.warning)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for errors
    pub fn danger_style(&self) -> Style {
        Style::default()
            .fg(self.danger)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for info text
    pub fn info_style(&self) -> Style {
        Style::default().fg(self.info)
    }

    /// Style for the selected list row
    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .bg(self.selected)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for borders
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for focused borders
    pub fn border_focused_style(&self) -> Style {
        Style::default()
            .fg(self.border_focused)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the filled part of progress bars
    pub fn progress_success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    pub fn progress_warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn progress_danger_style(&self) -> Style {
        Style::default().fg(self.danger)
    }

    /// Style for metric numbers
    pub fn metric_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for de-emphasized chrome
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.text_disabled)
    }

    /// Style for the text of completed todos
    pub fn done_text_style(&self) -> Style {
        Style::default()
            .fg(self.text_disabled)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    /// Pick a progress color from the completion percentage
    pub fn progress_style_for_percentage(&self, percentage: f64) -> Style {
        if percentage >= 80.0 {
            self.progress_success_style()
        } else if percentage >= 50.0 {
            self.progress_warning_style()
        } else {
            self.progress_danger_style()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_color_consistency() {
        // Test that each theme has consistent color assignments
        let themes = vec![
            ModernTheme::dark(),
            ModernTheme::light(),
            ModernTheme::ocean(),
        ];

        for theme in themes {
            // All themes should have distinct primary, secondary, and accent colors
            assert_ne!(theme.primary, theme.secondary);
            assert_ne!(theme.primary, theme.accent);
            assert_ne!(theme.secondary, theme.accent);

            // Status colors should be defined
            assert_ne!(theme.success, Color::Reset);
            assert_ne!(theme.warning, Color::Reset);
            assert_ne!(theme.danger, Color::Reset);
            assert_ne!(theme.info, Color::Reset);
        }
    }

    #[test]
    fn test_modern_icons_constants() {
        assert_eq!(ModernIcons::COMPLETED, "✓");
        assert_eq!(ModernIcons::PENDING, "○");
        assert_eq!(ModernIcons::TIME, "◷");
        assert_eq!(ModernIcons::BULLET, "•");
    }

    #[test]
    fn test_progress_chars_constants() {
        // Test that progress bar characters are valid Unicode
        assert_ne!(ProgressChars::FILLED, '\0');
        assert_ne!(ProgressChars::EMPTY, '\0');
        assert_ne!(ProgressChars::PARTIAL, '\0');
    }

    #[test]
    fn test_theme_specific_colors() {
        let dark = ModernTheme::dark();
        let light = ModernTheme::light();
        let ocean = ModernTheme::ocean();

        // Dark theme should have dark background
        assert_eq!(dark.background, Color::Rgb(17, 24, 39));

        // Light theme should have light background
        assert_eq!(light.background, Color::Rgb(255, 255, 255));

        // Ocean theme should have ocean-like colors
        assert_eq!(ocean.primary, Color::Rgb(14, 165, 233)); // Sky blue
    }

    #[test]
    fn test_done_text_style_is_crossed_out() {
        let theme = ModernTheme::dark();
        let style = theme.done_text_style();
        assert!(style.add_modifier.contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn test_progress_style_thresholds() {
        let theme = ModernTheme::dark();
        assert_eq!(
            theme.progress_style_for_percentage(100.0).fg,
            Some(theme.success)
        );
        assert_eq!(
            theme.progress_style_for_percentage(60.0).fg,
            Some(theme.warning)
        );
        assert_eq!(
            theme.progress_style_for_percentage(10.0).fg,
            Some(theme.danger)
        );
    }
}
