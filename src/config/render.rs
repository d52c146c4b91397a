//! Rendering configuration for unwrap failure messages.
//!
//! # Configuration Example
//!
//! ```toml
//! [render]
//! style = "pretty"
//! max_len = 120
//! include_kind = false
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Controls how reasons and inputs are rendered into unwrap messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Formatting style (default: debug)
    #[serde(default)]
    pub style: RenderStyle,

    /// Maximum rendered length in characters; longer renderings are
    /// truncated and suffixed with `...` (default: unlimited)
    #[serde(default)]
    pub max_len: Option<usize>,

    /// Prefix messages with the error category (default: true)
    #[serde(default = "default_include_kind")]
    pub include_kind: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            style: RenderStyle::default(),
            max_len: None,
            include_kind: default_include_kind(),
        }
    }
}

impl RenderConfig {
    /// Render any `Debug` value according to this config.
    pub fn render<V: fmt::Debug + ?Sized>(&self, value: &V) -> String {
        let rendered = match self.style {
            RenderStyle::Debug => format!("{:?}", value),
            RenderStyle::Pretty => format!("{:#?}", value),
        };
        self.truncate(rendered)
    }

    /// Apply the length cap to an already rendered string.
    pub fn truncate(&self, rendered: String) -> String {
        match self.max_len {
            Some(max) if rendered.chars().count() > max => {
                let cut: String = rendered.chars().take(max).collect();
                format!("{}...", cut)
            }
            _ => rendered,
        }
    }

    /// Build a message for the given category.
    pub fn message(&self, kind: &str, rendered: &str) -> String {
        if self.include_kind {
            format!("{}: {}", kind, rendered)
        } else {
            rendered.to_string()
        }
    }
}

/// How values are formatted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// Single-line `{:?}`.
    #[default]
    Debug,
    /// Multi-line `{:#?}`.
    Pretty,
}

fn default_include_kind() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    #[allow(dead_code)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_render_config_default() {
        let config = RenderConfig::default();
        assert_eq!(config.style, RenderStyle::Debug);
        assert_eq!(config.max_len, None);
        assert!(config.include_kind);
    }

    #[test]
    fn test_render_debug_style() {
        let config = RenderConfig::default();
        assert_eq!(config.render(&Point { x: 1, y: 2 }), "Point { x: 1, y: 2 }");
    }

    #[test]
    fn test_render_pretty_style() {
        let config = RenderConfig {
            style: RenderStyle::Pretty,
            ..Default::default()
        };
        assert!(config.render(&Point { x: 1, y: 2 }).contains('\n'));
    }

    #[test]
    fn test_truncate_on_char_boundary() {
        let config = RenderConfig {
            max_len: Some(3),
            ..Default::default()
        };
        assert_eq!(config.truncate("héllo".to_string()), "hél...");
        assert_eq!(config.truncate("hé".to_string()), "hé");
    }

    #[test]
    fn test_message_without_kind() {
        let config = RenderConfig {
            include_kind: false,
            ..Default::default()
        };
        assert_eq!(config.message("runtime error", ":fail"), ":fail");
        assert_eq!(
            RenderConfig::default().message("runtime error", ":fail"),
            "runtime error: :fail"
        );
    }
}
