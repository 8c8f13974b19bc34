use serde::{Deserialize, Serialize};

pub const PRIMARY_BUTTON: i16 = 0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn held(self, key: ModifierKey) -> bool {
        match key {
            ModifierKey::Shift => self.shift,
            ModifierKey::Ctrl => self.ctrl,
            ModifierKey::Alt => self.alt,
            ModifierKey::Meta => self.meta,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModifierKey {
    Shift,
    Ctrl,
    Alt,
    Meta,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModifierRule {
    Required,
    Forbidden,
    #[default]
    Any,
}

impl ModifierRule {
    pub fn allows(self, held: bool) -> bool {
        match self {
            ModifierRule::Required => held,
            ModifierRule::Forbidden => !held,
            ModifierRule::Any => true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPress {
    /// Physical key, as in `KeyboardEvent.code`.
    pub code: String,
    pub modifiers: Modifiers,
    pub repeat: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerPress {
    pub button: i16,
    pub modifiers: Modifiers,
}

impl PointerPress {
    pub fn is_primary(&self) -> bool {
        self.button == PRIMARY_BUTTON
    }
}

/// Keyboard chord toggling the overlay panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortcutChord {
    pub code: String,
    pub alt: ModifierRule,
    pub ctrl: ModifierRule,
    pub shift: ModifierRule,
    pub meta: ModifierRule,
}

impl Default for ShortcutChord {
    fn default() -> Self {
        Self {
            code: "KeyB".to_string(),
            alt: ModifierRule::Required,
            ctrl: ModifierRule::Forbidden,
            shift: ModifierRule::Forbidden,
            meta: ModifierRule::Any,
        }
    }
}

impl ShortcutChord {
    pub fn matches(&self, press: &KeyPress) -> bool {
        if press.repeat || press.code != self.code {
            return false;
        }
        let mods = press.modifiers;
        self.alt.allows(mods.alt)
            && self.ctrl.allows(mods.ctrl)
            && self.shift.allows(mods.shift)
            && self.meta.allows(mods.meta)
    }
}
