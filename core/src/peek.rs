use crate::input::{ModifierKey, PointerPress};

/// What the pointer-down landed on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThumbHit<T> {
    pub thumb: T,
    pub blocked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PeekPress<T> {
    Ignored,
    Entered {
        reveal: T,
        /// Thumb from an earlier peek that never saw its release.
        conceal: Option<T>,
    },
}

/// Handed out on pointer-up and redeemed by the deferred release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReleaseTicket {
    epoch: u64,
}

/// Idle → Peeking → Idle.
pub struct PeekArbiter<T> {
    modifier: ModifierKey,
    suppressing: bool,
    target: Option<T>,
    epoch: u64,
}

impl<T: Clone> PeekArbiter<T> {
    pub fn new(modifier: ModifierKey) -> Self {
        Self {
            modifier,
            suppressing: false,
            target: None,
            epoch: 0,
        }
    }

    pub fn set_modifier(&mut self, modifier: ModifierKey) {
        self.modifier = modifier;
    }

    pub fn qualifies(&self, press: &PointerPress, blocked: bool, container_blurred: bool) -> bool {
        press.modifiers.held(self.modifier)
            && press.is_primary()
            && (blocked || container_blurred)
    }

    pub fn press(
        &mut self,
        press: &PointerPress,
        hit: Option<ThumbHit<T>>,
        container_blurred: bool,
    ) -> PeekPress<T> {
        let Some(hit) = hit else {
            return PeekPress::Ignored;
        };
        if !self.qualifies(press, hit.blocked, container_blurred) {
            return PeekPress::Ignored;
        }
        self.suppressing = true;
        let conceal = self.target.replace(hit.thumb.clone());
        PeekPress::Entered {
            reveal: hit.thumb,
            conceal,
        }
    }

    /// Click and drag-start default actions are cancelled while this holds.
    pub fn suppressing(&self) -> bool {
        self.suppressing
    }

    pub fn is_peeking(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    pub fn release_ticket(&self) -> ReleaseTicket {
        ReleaseTicket { epoch: self.epoch }
    }

    /// Finishes a release scheduled on pointer-up. Returns the thumb whose
    /// revealed marker must be removed; `None` when nothing was recorded or the
    /// ticket predates a `cancel`.
    pub fn finish_release(&mut self, ticket: ReleaseTicket) -> Option<T> {
        if ticket.epoch != self.epoch {
            return None;
        }
        self.suppressing = false;
        self.target.take()
    }

    /// Drops any gesture in flight and invalidates outstanding tickets.
    pub fn cancel(&mut self) -> Option<T> {
        self.epoch = self.epoch.wrapping_add(1);
        self.suppressing = false;
        self.target.take()
    }
}
