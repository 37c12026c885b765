//! Host context directives (theme, style variables, fonts, safe area) and the
//! widget appearance they produce.

use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Insets, in pixels, the host overlays on the widget's edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct SafeAreaInsets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HostCss {
    /// Font-face CSS supplied by the host.
    pub fonts: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HostStyles {
    /// CSS custom properties, e.g. `--color-background-primary`.
    pub variables: Option<BTreeMap<String, String>>,
    pub css: Option<HostCss>,
}

/// A host context change notification. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostContext {
    pub theme: Option<Theme>,
    pub styles: Option<HostStyles>,
    pub safe_area_insets: Option<SafeAreaInsets>,
}

/// Presentation state accumulated from host context changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Appearance {
    pub theme: Option<Theme>,
    pub style_variables: BTreeMap<String, String>,
    pub fonts: Option<String>,
    /// Padding of the root container.
    pub padding: Option<SafeAreaInsets>,
}

impl Appearance {
    /// Applies each directive present in `ctx`; absent ones leave the current
    /// value alone.
    pub fn apply(&mut self, ctx: HostContext) {
        if let Some(theme) = ctx.theme {
            self.theme = Some(theme);
        }
        if let Some(styles) = ctx.styles {
            if let Some(variables) = styles.variables {
                self.style_variables.extend(variables);
            }
            if let Some(fonts) = styles.css.and_then(|css| css.fonts) {
                self.fonts = Some(fonts);
            }
        }
        if let Some(insets) = ctx.safe_area_insets {
            self.padding = Some(insets);
        }
    }

    /// Inline style for the root container.
    pub fn root_style(&self) -> String {
        let mut decls: Vec<String> = self
            .style_variables
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value))
            .collect();

        if let Some(p) = self.padding {
            decls.push(format!("padding-top: {}px", p.top));
            decls.push(format!("padding-right: {}px", p.right));
            decls.push(format!("padding-bottom: {}px", p.bottom));
            decls.push(format!("padding-left: {}px", p.left));
        }

        decls.join("; ")
    }
}
