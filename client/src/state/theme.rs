//! Theme store — storefront presentation variables.
//!
//! DESIGN
//! ======
//! Four style tokens applied process-wide. Values are not validated;
//! whatever was last written wins. DOM mirroring lives in `util::theme`
//! so this module stays pure.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Style tokens mirrored onto the document root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub font: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "#1f2937".to_owned(),
            secondary: "#6b7280".to_owned(),
            accent: "#d97706".to_owned(),
            font: "'Inter', sans-serif".to_owned(),
        }
    }
}

/// A partial theme update; `None` fields keep their current values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThemePatch {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub accent: Option<String>,
    pub font: Option<String>,
}

impl Theme {
    /// Merge the given fields into the theme, leaving the rest unchanged.
    pub fn apply_patch(&mut self, patch: &ThemePatch) {
        if let Some(primary) = &patch.primary {
            self.primary = primary.clone();
        }
        if let Some(secondary) = &patch.secondary {
            self.secondary = secondary.clone();
        }
        if let Some(accent) = &patch.accent {
            self.accent = accent.clone();
        }
        if let Some(font) = &patch.font {
            self.font = font.clone();
        }
    }
}
