pub mod binding;
pub mod input;
pub mod level;
pub mod options;
pub mod overlay;
pub mod peek;

pub use binding::{BindingId, BindingSlot, MirrorPlan, MirrorSource};
pub use input::{
    KeyPress, ModifierKey, ModifierRule, Modifiers, PointerPress, ShortcutChord, PRIMARY_BUTTON,
};
pub use level::{BlurLevel, BLUR_LEVEL_MAX, BLUR_LEVEL_MIN};
pub use options::{
    ClassNames, ControlOptions, ElementIds, OptionsError, DEFAULT_LABEL, DEFAULT_PANEL_ID,
    DEFAULT_RANGE_ID,
};
pub use overlay::{OverlayChanged, OverlayPresenter, PanelHandle};
pub use peek::{PeekArbiter, PeekPress, ReleaseTicket, ThumbHit};
