//! Mutation seam standing in for the ambient rendering environment.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use toolpane_protocol::ThemeVariant;

/// Receives style mutations from the context store.
///
/// Implementations stand in for whatever the embedding actually renders
/// with: an inspectable map for tests and headless hosts, a terminal
/// palette for TUI embeddings. Application logic only ever writes through
/// this trait; it never reads presentation state back.
pub trait StyleSurface: Send {
    /// Write one named style variable, overwriting any previous value.
    fn set_variable(&mut self, name: &str, value: &str);

    /// Record the active color scheme.
    fn set_color_scheme(&mut self, variant: ThemeVariant);

    /// Append a block of font CSS. Appends are never replaced or
    /// deduplicated; repeated injection is a known bounded cost.
    fn append_font_css(&mut self, css: &str);
}

#[derive(Debug, Default)]
struct SurfaceState {
    variables: BTreeMap<String, String>,
    color_scheme: Option<ThemeVariant>,
    font_css: Vec<String>,
}

/// In-memory surface recording every mutation.
///
/// Cloning returns a handle to the same underlying state, so a caller can
/// keep one handle for inspection while the client owns the other.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    inner: Arc<Mutex<SurfaceState>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, SurfaceState> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Current value of one variable, if set.
    pub fn variable(&self, name: &str) -> Option<String> {
        self.lock().variables.get(name).cloned()
    }

    /// Snapshot of every variable currently set.
    pub fn variables(&self) -> BTreeMap<String, String> {
        self.lock().variables.clone()
    }

    /// Recorded color scheme, if any.
    pub fn color_scheme(&self) -> Option<ThemeVariant> {
        self.lock().color_scheme
    }

    /// Appended font CSS blocks, oldest first.
    pub fn font_css(&self) -> Vec<String> {
        self.lock().font_css.clone()
    }
}

impl StyleSurface for MemorySurface {
    fn set_variable(&mut self, name: &str, value: &str) {
        self.lock()
            .variables
            .insert(name.to_string(), value.to_string());
    }

    fn set_color_scheme(&mut self, variant: ThemeVariant) {
        self.lock().color_scheme = Some(variant);
    }

    fn append_font_css(&mut self, css: &str) {
        self.lock().font_css.push(css.to_string());
    }
}
