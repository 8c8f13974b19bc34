use std::fmt;

use serde::Deserialize;

use crate::input::{ModifierKey, ShortcutChord};

pub const DEFAULT_PANEL_ID: &str = "blurOverlay";
pub const DEFAULT_RANGE_ID: &str = "blurRangeOverlay";
pub const DEFAULT_LABEL: &str = "Blur:";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub panel: String,
    pub range: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            panel: DEFAULT_PANEL_ID.to_string(),
            range: DEFAULT_RANGE_ID.to_string(),
        }
    }
}

/// Class names shared with the host stylesheet and thumbnail markup.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassNames {
    pub blur_active: String,
    pub thumb: String,
    pub blocked: String,
    pub revealed: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            blur_active: "blur".to_string(),
            thumb: "thumb".to_string(),
            blocked: "blocked".to_string(),
            revealed: "tempShow".to_string(),
        }
    }
}

impl ClassNames {
    pub fn thumb_selector(&self) -> String {
        format!(".{}", self.thumb)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ControlOptions {
    /// Lets a thumbnail be revealed while the peek modifier and the primary
    /// button are held.
    #[serde(alias = "allowPeek")]
    pub allow_temp_show: bool,
    pub shortcut: ShortcutChord,
    pub peek_modifier: ModifierKey,
    pub ids: ElementIds,
    pub classes: ClassNames,
    pub label: String,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            allow_temp_show: true,
            shortcut: ShortcutChord::default(),
            peek_modifier: ModifierKey::Ctrl,
            ids: ElementIds::default(),
            classes: ClassNames::default(),
            label: DEFAULT_LABEL.to_string(),
        }
    }
}

impl ControlOptions {
    pub fn with_temp_show(allow_temp_show: bool) -> Self {
        Self {
            allow_temp_show,
            ..Self::default()
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, OptionsError> {
        let options: ControlOptions =
            serde_json::from_str(raw).map_err(|err| OptionsError::Json(err.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.shortcut.code.trim().is_empty() {
            return Err(OptionsError::EmptyCode);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    Json(String),
    EmptyCode,
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsError::Json(message) => write!(f, "invalid control options: {message}"),
            OptionsError::EmptyCode => write!(f, "shortcut chord needs a key code"),
        }
    }
}

impl std::error::Error for OptionsError {}
