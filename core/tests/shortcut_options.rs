use thumb_blur_core::{
    ControlOptions, KeyPress, ModifierKey, ModifierRule, Modifiers, OptionsError, ShortcutChord,
    DEFAULT_PANEL_ID, DEFAULT_RANGE_ID,
};

fn key(code: &str, modifiers: Modifiers, repeat: bool) -> KeyPress {
    KeyPress {
        code: code.to_string(),
        modifiers,
        repeat,
    }
}

fn alt() -> Modifiers {
    Modifiers {
        alt: true,
        ..Modifiers::default()
    }
}

#[test]
fn default_chord_is_alt_b() {
    let chord = ShortcutChord::default();
    assert!(chord.matches(&key("KeyB", alt(), false)));
    assert!(!chord.matches(&key("KeyB", Modifiers::default(), false)));
    assert!(!chord.matches(&key("KeyN", alt(), false)));
}

#[test]
fn default_chord_rejects_ctrl_shift_and_repeat() {
    let chord = ShortcutChord::default();
    let with_ctrl = Modifiers { ctrl: true, ..alt() };
    let with_shift = Modifiers { shift: true, ..alt() };
    assert!(!chord.matches(&key("KeyB", with_ctrl, false)));
    assert!(!chord.matches(&key("KeyB", with_shift, false)));
    assert!(!chord.matches(&key("KeyB", alt(), true)));
}

#[test]
fn meta_is_ignored_by_default() {
    let chord = ShortcutChord::default();
    let with_meta = Modifiers { meta: true, ..alt() };
    assert!(chord.matches(&key("KeyB", with_meta, false)));
}

#[test]
fn shift_can_be_let_through() {
    let chord = ShortcutChord {
        shift: ModifierRule::Any,
        ..ShortcutChord::default()
    };
    let with_shift = Modifiers { shift: true, ..alt() };
    assert!(chord.matches(&key("KeyB", with_shift, false)));
}

#[test]
fn options_default_from_empty_object() {
    let options = ControlOptions::from_json("{}").expect("empty object parses");
    assert_eq!(options, ControlOptions::default());
    assert!(options.allow_temp_show);
    assert_eq!(options.ids.panel, DEFAULT_PANEL_ID);
    assert_eq!(options.ids.range, DEFAULT_RANGE_ID);
    assert_eq!(options.classes.thumb_selector(), ".thumb");
    assert_eq!(options.peek_modifier, ModifierKey::Ctrl);
}

#[test]
fn options_accept_partial_overrides() {
    let raw = r#"{
        "allowTempShow": false,
        "peekModifier": "meta",
        "shortcut": { "code": "KeyK", "shift": "any" },
        "classes": { "revealed": "peek" },
        "label": "Blur level"
    }"#;
    let options = ControlOptions::from_json(raw).expect("options parse");
    assert!(!options.allow_temp_show);
    assert_eq!(options.peek_modifier, ModifierKey::Meta);
    assert_eq!(options.shortcut.code, "KeyK");
    assert_eq!(options.shortcut.shift, ModifierRule::Any);
    assert_eq!(options.shortcut.alt, ModifierRule::Required);
    assert_eq!(options.classes.revealed, "peek");
    assert_eq!(options.classes.blur_active, "blur");
    assert_eq!(options.label, "Blur level");
}

#[test]
fn options_reject_bad_input() {
    assert!(matches!(
        ControlOptions::from_json("[1, 2]"),
        Err(OptionsError::Json(_))
    ));
    assert_eq!(
        ControlOptions::from_json(r#"{ "shortcut": { "code": "  " } }"#),
        Err(OptionsError::EmptyCode)
    );
}
