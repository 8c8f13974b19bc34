use thumb_blur_core::{Modifiers, ModifierKey, PeekArbiter, PeekPress, PointerPress, ThumbHit};

fn ctrl_press(button: i16) -> PointerPress {
    PointerPress {
        button,
        modifiers: Modifiers {
            ctrl: true,
            ..Modifiers::default()
        },
    }
}

fn hit(thumb: &'static str, blocked: bool) -> Option<ThumbHit<&'static str>> {
    Some(ThumbHit { thumb, blocked })
}

#[test]
fn blocked_thumb_enters_peek_without_blur() {
    let mut arbiter = PeekArbiter::new(ModifierKey::Ctrl);
    let outcome = arbiter.press(&ctrl_press(0), hit("a", true), false);
    assert_eq!(
        outcome,
        PeekPress::Entered {
            reveal: "a",
            conceal: None
        }
    );
    assert!(arbiter.suppressing());
    assert_eq!(arbiter.target(), Some(&"a"));
}

#[test]
fn blurred_container_allows_any_thumb() {
    let mut arbiter = PeekArbiter::new(ModifierKey::Ctrl);
    let outcome = arbiter.press(&ctrl_press(0), hit("a", false), true);
    assert!(matches!(outcome, PeekPress::Entered { .. }));
}

#[test]
fn non_qualifying_presses_are_ignored() {
    let mut arbiter = PeekArbiter::new(ModifierKey::Ctrl);
    let plain = PointerPress {
        button: 0,
        modifiers: Modifiers::default(),
    };
    assert_eq!(arbiter.press(&plain, hit("a", true), true), PeekPress::Ignored);
    assert_eq!(arbiter.press(&ctrl_press(2), hit("a", true), true), PeekPress::Ignored);
    assert_eq!(arbiter.press(&ctrl_press(0), None, true), PeekPress::Ignored);
    assert_eq!(arbiter.press(&ctrl_press(0), hit("a", false), false), PeekPress::Ignored);
    assert!(!arbiter.suppressing());
    assert!(!arbiter.is_peeking());
}

#[test]
fn release_clears_state_exactly_once() {
    let mut arbiter = PeekArbiter::new(ModifierKey::Ctrl);
    let _ = arbiter.press(&ctrl_press(0), hit("a", true), false);
    let ticket = arbiter.release_ticket();
    assert!(arbiter.suppressing());
    assert_eq!(arbiter.finish_release(ticket), Some("a"));
    assert!(!arbiter.suppressing());
    assert_eq!(arbiter.finish_release(ticket), None);
}

#[test]
fn release_without_peek_is_a_no_op() {
    let mut arbiter: PeekArbiter<&str> = PeekArbiter::new(ModifierKey::Ctrl);
    let ticket = arbiter.release_ticket();
    assert_eq!(arbiter.finish_release(ticket), None);
    assert!(!arbiter.suppressing());
}

#[test]
fn cancel_invalidates_outstanding_tickets() {
    let mut arbiter = PeekArbiter::new(ModifierKey::Ctrl);
    let _ = arbiter.press(&ctrl_press(0), hit("a", true), false);
    let stale = arbiter.release_ticket();
    assert_eq!(arbiter.cancel(), Some("a"));

    let _ = arbiter.press(&ctrl_press(0), hit("b", true), false);
    assert_eq!(arbiter.finish_release(stale), None);
    assert!(arbiter.suppressing());
    assert_eq!(arbiter.target(), Some(&"b"));
}

#[test]
fn repeated_press_hands_back_the_previous_thumb() {
    let mut arbiter = PeekArbiter::new(ModifierKey::Ctrl);
    let _ = arbiter.press(&ctrl_press(0), hit("a", true), false);
    let outcome = arbiter.press(&ctrl_press(0), hit("b", true), false);
    assert_eq!(
        outcome,
        PeekPress::Entered {
            reveal: "b",
            conceal: Some("a")
        }
    );
}

#[test]
fn peek_modifier_is_configurable() {
    let mut arbiter = PeekArbiter::new(ModifierKey::Alt);
    assert_eq!(arbiter.press(&ctrl_press(0), hit("a", true), false), PeekPress::Ignored);
    let alt = PointerPress {
        button: 0,
        modifiers: Modifiers {
            alt: true,
            ..Modifiers::default()
        },
    };
    assert!(matches!(
        arbiter.press(&alt, hit("a", true), false),
        PeekPress::Entered { .. }
    ));
}
