//! Thumbnail blur control for web pages.
//!
//! The container gets a `--blur` custom property (`blur(<n>px)`) and a `blur`
//! class whenever the level is non-zero; the host stylesheet decides what
//! those mean. Holding Ctrl while pressing the primary button on a blocked or
//! blurred thumbnail reveals it until the button is released.

mod control;
mod input;
mod options;
mod panel;
mod surface;
mod wasm;

pub use control::{BlurControl, OverlayCallback};
pub use surface::BLUR_PROPERTY;
pub use thumb_blur_core::{
    BlurLevel, ClassNames, ControlOptions, ElementIds, ModifierKey, ModifierRule, OptionsError,
    ShortcutChord,
};
pub use wasm::BlurringControl;
