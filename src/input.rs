use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent, MouseEvent};

use thumb_blur_core::{ClassNames, KeyPress, Modifiers, PointerPress, ThumbHit};

pub(crate) fn key_press(event: &KeyboardEvent) -> KeyPress {
    KeyPress {
        code: event.code(),
        modifiers: Modifiers {
            shift: event.shift_key(),
            ctrl: event.ctrl_key(),
            alt: event.alt_key(),
            meta: event.meta_key(),
        },
        repeat: event.repeat(),
    }
}

pub(crate) fn pointer_press(event: &MouseEvent) -> PointerPress {
    PointerPress {
        button: event.button(),
        modifiers: Modifiers {
            shift: event.shift_key(),
            ctrl: event.ctrl_key(),
            alt: event.alt_key(),
            meta: event.meta_key(),
        },
    }
}

fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

/// Nearest thumbnail around the event target, with its blocked flag.
pub(crate) fn thumb_hit(event: &Event, classes: &ClassNames) -> Option<ThumbHit<Element>> {
    let target = event_element(event)?;
    let thumb = target.closest(&classes.thumb_selector()).ok()??;
    let blocked = thumb.class_list().contains(&classes.blocked);
    Some(ThumbHit { thumb, blocked })
}
