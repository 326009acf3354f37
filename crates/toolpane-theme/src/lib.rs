//! Theme state for embedded widgets.
//!
//! Hosts describe appearance as a theme variant plus style-variable
//! overrides. This crate keeps the merged picture in a [`ContextStore`]
//! and pushes every change onto a [`StyleSurface`], the seam between
//! protocol state and whatever actually draws: [`MemorySurface`] records
//! writes for inspection, [`TermSurface`] resolves them into a ratatui
//! palette. When no host ever announces a theme, [`detect_preference`]
//! picks a sensible variant from the environment.

mod detect;
mod store;
mod surface;
mod term;
mod tokens;

pub use detect::{detect_preference, THEME_OVERRIDE_VAR};
pub use store::ContextStore;
pub use surface::{MemorySurface, StyleSurface};
pub use term::{parse_color, TermPalette, TermSurface};
pub use tokens::{vars, TokenSet, DARK, LIGHT};
