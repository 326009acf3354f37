//! Canonical presentation tokens, one set per theme variant.

use toolpane_protocol::ThemeVariant;

/// Style variable names written by the canonical token sets.
pub mod vars {
    /// Primary foreground.
    pub const FG: &str = "--tp-fg";
    /// Secondary text (labels, captions).
    pub const FG_MUTED: &str = "--tp-fg-muted";
    /// Placeholder and hint text.
    pub const FG_FAINT: &str = "--tp-fg-faint";
    /// Raised surface background.
    pub const BG_SURFACE: &str = "--tp-bg-surface";
    /// Progress track background.
    pub const PROGRESS_BG: &str = "--tp-progress-bg";
    /// Table header rule.
    pub const HEADER_BORDER: &str = "--tp-header-border";
    /// Table row rule.
    pub const ROW_BORDER: &str = "--tp-row-border";
    /// Links and primary badges.
    pub const ACCENT: &str = "--tp-accent";
    /// Positive status.
    pub const SUCCESS: &str = "--tp-success";
    /// Needs-attention status.
    pub const WARNING: &str = "--tp-warning";
    /// Failure status.
    pub const ERROR: &str = "--tp-error";
}

/// A complete mapping from semantic token names to concrete values.
///
/// Exactly two canonical sets exist, [`LIGHT`] and [`DARK`]; hosts refine
/// them with explicit variables but never need to replace them wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSet {
    pub fg: &'static str,
    pub fg_muted: &'static str,
    pub fg_faint: &'static str,
    pub bg_surface: &'static str,
    pub progress_bg: &'static str,
    pub header_border: &'static str,
    pub row_border: &'static str,
    pub accent: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
}

/// Token values for light hosts.
pub const LIGHT: TokenSet = TokenSet {
    fg: "#1a1a1a",
    fg_muted: "#666666",
    fg_faint: "#888888",
    bg_surface: "#f5f5f5",
    progress_bg: "#e5e5e5",
    header_border: "#cccccc",
    row_border: "#e0e0e0",
    accent: "#3b82f6",
    success: "#22c55e",
    warning: "#f59e0b",
    error: "#ef4444",
};

/// Token values for dark hosts.
pub const DARK: TokenSet = TokenSet {
    fg: "#d4d4d4",
    fg_muted: "#9d9d9d",
    fg_faint: "#7a7a7a",
    bg_surface: "#1e1e1e",
    progress_bg: "#2d2d2d",
    header_border: "#3c3c3c",
    row_border: "#262626",
    accent: "#3b82f6",
    success: "#22c55e",
    warning: "#f59e0b",
    error: "#ef4444",
};

impl TokenSet {
    /// The canonical set for a theme variant.
    pub fn for_variant(variant: ThemeVariant) -> &'static TokenSet {
        match variant {
            ThemeVariant::Light => &LIGHT,
            ThemeVariant::Dark => &DARK,
        }
    }

    /// Every token as a `(variable name, value)` pair.
    pub fn entries(&self) -> [(&'static str, &'static str); 11] {
        [
            (vars::FG, self.fg),
            (vars::FG_MUTED, self.fg_muted),
            (vars::FG_FAINT, self.fg_faint),
            (vars::BG_SURFACE, self.bg_surface),
            (vars::PROGRESS_BG, self.progress_bg),
            (vars::HEADER_BORDER, self.header_border),
            (vars::ROW_BORDER, self.row_border),
            (vars::ACCENT, self.accent),
            (vars::SUCCESS, self.success),
            (vars::WARNING, self.warning),
            (vars::ERROR, self.error),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_selection() {
        assert_eq!(TokenSet::for_variant(ThemeVariant::Light), &LIGHT);
        assert_eq!(TokenSet::for_variant(ThemeVariant::Dark), &DARK);
    }

    #[test]
    fn test_entries_cover_every_name_once() {
        let entries = DARK.entries();
        let mut names: Vec<&str> = entries.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), entries.len());
        assert!(names.contains(&vars::FG));
        assert!(names.contains(&vars::ERROR));
    }

    #[test]
    fn test_values_are_hex_colors() {
        for set in [&LIGHT, &DARK] {
            for (name, value) in set.entries() {
                assert!(
                    value.starts_with('#') && value.len() == 7,
                    "{name} has a non-hex value {value}"
                );
            }
        }
    }
}
