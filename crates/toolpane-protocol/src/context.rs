//! Host-supplied presentation context.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Theme variant reported by the host. No other variants exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    Light,
    Dark,
}

impl ThemeVariant {
    /// Identifier as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Presentation context supplied by the host.
///
/// Every field is optional. Context is cumulative: an update merges
/// shallowly into the previously known context, so a field present in the
/// update overwrites and an absent field keeps its old value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeVariant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<StyleBundle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_dimensions: Option<Value>,
}

impl HostContext {
    /// A context carrying only a theme.
    pub fn with_theme(theme: ThemeVariant) -> Self {
        Self {
            theme: Some(theme),
            ..Default::default()
        }
    }

    /// Shallow merge: top-level fields present in `update` overwrite,
    /// absent fields keep the current value.
    pub fn merge(&mut self, update: HostContext) {
        if update.theme.is_some() {
            self.theme = update.theme;
        }
        if update.styles.is_some() {
            self.styles = update.styles;
        }
        if update.display_mode.is_some() {
            self.display_mode = update.display_mode;
        }
        if update.container_dimensions.is_some() {
            self.container_dimensions = update.container_dimensions;
        }
    }
}

/// Style information inside a host context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleBundle {
    /// Named style variables. Null values are tolerated and skipped on
    /// apply, never cleared.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub variables: HashMap<String, Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css: Option<CssBundle>,
}

/// Raw CSS payloads inside a style bundle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CssBundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fonts: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variables_context(pairs: &[(&str, &str)]) -> HostContext {
        let variables = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), Some(v.to_string())))
            .collect();
        HostContext {
            styles: Some(StyleBundle {
                variables,
                css: None,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_host_context_parsing() {
        let json = r##"{
            "theme": "dark",
            "styles": {
                "variables": {"--tp-fg": "#ffffff", "--tp-accent": null},
                "css": {"fonts": "@font-face { font-family: Inter; }"}
            },
            "displayMode": "inline",
            "containerDimensions": {"width": 640}
        }"##;
        let ctx: HostContext = serde_json::from_str(json).unwrap();

        assert_eq!(ctx.theme, Some(ThemeVariant::Dark));
        let styles = ctx.styles.unwrap();
        assert_eq!(
            styles.variables.get("--tp-fg"),
            Some(&Some("#ffffff".to_string()))
        );
        assert_eq!(styles.variables.get("--tp-accent"), Some(&None));
        assert!(styles.css.unwrap().fonts.unwrap().contains("Inter"));
        assert_eq!(ctx.display_mode.as_deref(), Some("inline"));
        assert_eq!(ctx.container_dimensions.unwrap()["width"], 640);
    }

    #[test]
    fn test_merge_overwrites_present_fields_only() {
        let mut ctx = HostContext::with_theme(ThemeVariant::Dark);
        ctx.merge(HostContext {
            display_mode: Some("fullscreen".to_string()),
            ..Default::default()
        });

        assert_eq!(ctx.theme, Some(ThemeVariant::Dark));
        assert_eq!(ctx.display_mode.as_deref(), Some("fullscreen"));
    }

    #[test]
    fn test_merge_replaces_styles_wholesale() {
        let mut ctx = variables_context(&[("--tp-fg", "#111111")]);
        ctx.merge(variables_context(&[("--tp-accent", "#3b82f6")]));

        let variables = &ctx.styles.unwrap().variables;
        assert!(variables.contains_key("--tp-accent"));
        // Top-level merge: the whole styles bundle is replaced.
        assert!(!variables.contains_key("--tp-fg"));
    }

    #[test]
    fn test_theme_variant_wire_form() {
        assert_eq!(serde_json::to_string(&ThemeVariant::Dark).unwrap(), r#""dark""#);
        assert_eq!(ThemeVariant::Light.as_str(), "light");
        assert!(serde_json::from_str::<ThemeVariant>(r#""blue""#).is_err());
    }
}
