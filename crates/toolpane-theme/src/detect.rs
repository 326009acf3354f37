//! Ambient theme preference detection.

use std::env;

use tracing::debug;

use toolpane_protocol::ThemeVariant;

/// Environment variable overriding ambient detection.
pub const THEME_OVERRIDE_VAR: &str = "TOOLPANE_THEME";

/// Best-effort dark/light preference from the ambient environment.
///
/// Checked synchronously before any host message so the widget starts with
/// a complete token set. `TOOLPANE_THEME` wins when set to a recognized
/// variant; otherwise the `COLORFGBG` convention is consulted. No signal
/// means dark.
pub fn detect_preference() -> ThemeVariant {
    if let Ok(value) = env::var(THEME_OVERRIDE_VAR) {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => return ThemeVariant::Light,
            "dark" => return ThemeVariant::Dark,
            other => debug!(value = other, "ignoring unrecognized theme override"),
        }
    }
    from_colorfgbg(env::var("COLORFGBG").ok().as_deref())
}

/// Interpret a `COLORFGBG` value ("fg;bg" or "fg;default;bg").
///
/// The last field is the background palette index; 0 through 6 and 8 are
/// the conventionally dark entries.
fn from_colorfgbg(raw: Option<&str>) -> ThemeVariant {
    let bg = raw
        .and_then(|value| value.rsplit(';').next())
        .and_then(|field| field.trim().parse::<u8>().ok());
    match bg {
        Some(index) if index <= 6 || index == 8 => ThemeVariant::Dark,
        Some(_) => ThemeVariant::Light,
        None => ThemeVariant::Dark,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_background_indices() {
        assert_eq!(from_colorfgbg(Some("15;0")), ThemeVariant::Dark);
        assert_eq!(from_colorfgbg(Some("7;default;0")), ThemeVariant::Dark);
        assert_eq!(from_colorfgbg(Some("15;8")), ThemeVariant::Dark);
    }

    #[test]
    fn test_light_background_indices() {
        assert_eq!(from_colorfgbg(Some("0;15")), ThemeVariant::Light);
        assert_eq!(from_colorfgbg(Some("0;default;7")), ThemeVariant::Light);
    }

    #[test]
    fn test_missing_or_malformed_signal_defaults_to_dark() {
        assert_eq!(from_colorfgbg(None), ThemeVariant::Dark);
        assert_eq!(from_colorfgbg(Some("")), ThemeVariant::Dark);
        assert_eq!(from_colorfgbg(Some("garbage")), ThemeVariant::Dark);
    }
}
