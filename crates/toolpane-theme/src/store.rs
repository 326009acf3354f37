//! Holds the merged host context and projects it onto a style surface.

use tracing::debug;

use toolpane_protocol::{HostContext, ThemeVariant};

use crate::surface::StyleSurface;
use crate::tokens::TokenSet;

/// Latest known host context plus the surface it projects onto.
///
/// Owned by a single widget client; mutated only by the handshake result
/// and by host-context-changed notifications.
pub struct ContextStore {
    context: HostContext,
    surface: Box<dyn StyleSurface>,
}

impl ContextStore {
    pub fn new(surface: Box<dyn StyleSurface>) -> Self {
        Self {
            context: HostContext::default(),
            surface,
        }
    }

    /// Merge `update` into the known context and re-apply everything.
    pub fn merge_and_apply(&mut self, update: HostContext) {
        self.context.merge(update);
        self.apply();
    }

    /// Project the current context onto the surface.
    ///
    /// Ordered: canonical tokens for the theme first, explicit host
    /// variables second (overriding collisions; empty and null values
    /// skipped, never cleared), font CSS appended last. Idempotent for
    /// variables and scheme; font CSS appends by design.
    pub fn apply(&mut self) {
        if let Some(theme) = self.context.theme {
            self.apply_tokens(theme);
        }

        if let Some(styles) = &self.context.styles {
            for (name, value) in &styles.variables {
                match value.as_deref() {
                    Some(value) if !value.is_empty() => self.surface.set_variable(name, value),
                    _ => {}
                }
            }
            if let Some(fonts) = styles.css.as_ref().and_then(|css| css.fonts.as_deref()) {
                if !fonts.is_empty() {
                    self.surface.append_font_css(fonts);
                }
            }
        }
    }

    /// Write the canonical token set for `variant` plus the scheme hint.
    ///
    /// This is the fallback path as well: called before any host message
    /// arrives so the widget never renders with undefined tokens.
    pub fn apply_tokens(&mut self, variant: ThemeVariant) {
        let set = TokenSet::for_variant(variant);
        for (name, value) in set.entries() {
            self.surface.set_variable(name, value);
        }
        self.surface.set_color_scheme(variant);
        debug!(theme = %variant, "applied canonical token set");
    }

    /// The merged context as last received.
    pub fn context(&self) -> &HostContext {
        &self.context
    }
}
