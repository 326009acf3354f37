//! Terminal rendering bridge: applied tokens as ratatui colors and styles.

use std::sync::{Arc, Mutex, MutexGuard};

use ratatui::style::{Color, Modifier, Style};

use toolpane_protocol::ThemeVariant;

use crate::surface::StyleSurface;
use crate::tokens::{vars, TokenSet};

/// Parse a `#rrggbb` value into a terminal color.
pub fn parse_color(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

/// Resolved terminal palette for one widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermPalette {
    pub fg: Color,
    pub fg_muted: Color,
    pub fg_faint: Color,
    pub bg_surface: Color,
    pub progress_bg: Color,
    pub header_border: Color,
    pub row_border: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl TermPalette {
    /// Palette preloaded with the canonical set for `variant`.
    pub fn for_variant(variant: ThemeVariant) -> Self {
        Self::from_tokens(TokenSet::for_variant(variant))
    }

    fn from_tokens(set: &TokenSet) -> Self {
        let color = |value| parse_color(value).unwrap_or(Color::Reset);
        Self {
            fg: color(set.fg),
            fg_muted: color(set.fg_muted),
            fg_faint: color(set.fg_faint),
            bg_surface: color(set.bg_surface),
            progress_bg: color(set.progress_bg),
            header_border: color(set.header_border),
            row_border: color(set.row_border),
            accent: color(set.accent),
            success: color(set.success),
            warning: color(set.warning),
            error: color(set.error),
        }
    }

    /// Style for primary text.
    pub fn text(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Style for secondary text.
    pub fn muted(&self) -> Style {
        Style::default().fg(self.fg_muted)
    }

    /// Style for placeholder and hint text.
    pub fn faint(&self) -> Style {
        Style::default().fg(self.fg_faint)
    }

    /// Style for raised surfaces.
    pub fn surface(&self) -> Style {
        Style::default().bg(self.bg_surface)
    }

    /// Style for table header rules.
    pub fn header(&self) -> Style {
        Style::default()
            .fg(self.header_border)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for links and primary badges.
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for positive status.
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Style for needs-attention status.
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Style for failure status.
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }
}

#[derive(Debug)]
struct TermState {
    palette: TermPalette,
    variant: ThemeVariant,
    font_css_blocks: usize,
}

/// Style surface backed by a terminal palette.
///
/// Variable writes matching canonical token names update the corresponding
/// palette color; other names have no terminal slot and are dropped. Font
/// CSS has no terminal meaning and is only counted. Cloning returns a
/// handle to the same state, so the embedding keeps one handle for
/// rendering while the client owns the other.
#[derive(Debug, Clone)]
pub struct TermSurface {
    inner: Arc<Mutex<TermState>>,
}

impl TermSurface {
    /// Surface preloaded with the canonical set for `variant`.
    pub fn new(variant: ThemeVariant) -> Self {
        Self {
            inner: Arc::new(Mutex::new(TermState {
                palette: TermPalette::for_variant(variant),
                variant,
                font_css_blocks: 0,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, TermState> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Snapshot of the current palette.
    pub fn palette(&self) -> TermPalette {
        self.lock().palette.clone()
    }

    /// Active color scheme.
    pub fn variant(&self) -> ThemeVariant {
        self.lock().variant
    }

    /// Number of font CSS blocks the host has injected.
    pub fn font_css_blocks(&self) -> usize {
        self.lock().font_css_blocks
    }
}

impl StyleSurface for TermSurface {
    fn set_variable(&mut self, name: &str, value: &str) {
        let Some(color) = parse_color(value) else {
            return;
        };
        let mut state = self.lock();
        match name {
            vars::FG => state.palette.fg = color,
            vars::FG_MUTED => state.palette.fg_muted = color,
            vars::FG_FAINT => state.palette.fg_faint = color,
            vars::BG_SURFACE => state.palette.bg_surface = color,
            vars::PROGRESS_BG => state.palette.progress_bg = color,
            vars::HEADER_BORDER => state.palette.header_border = color,
            vars::ROW_BORDER => state.palette.row_border = color,
            vars::ACCENT => state.palette.accent = color,
            vars::SUCCESS => state.palette.success = color,
            vars::WARNING => state.palette.warning = color,
            vars::ERROR => state.palette.error = color,
            _ => {}
        }
    }

    fn set_color_scheme(&mut self, variant: ThemeVariant) {
        self.lock().variant = variant;
    }

    fn append_font_css(&mut self, _css: &str) {
        self.lock().font_css_blocks += 1;
    }
}
