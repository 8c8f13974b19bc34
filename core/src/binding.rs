use crate::level::BlurLevel;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BindingId(u64);

struct Bound<T> {
    id: BindingId,
    target: T,
}

/// At most one bound external input.
pub struct BindingSlot<T> {
    next_id: u64,
    current: Option<Bound<T>>,
}

impl<T> BindingSlot<T> {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            current: None,
        }
    }

    /// Binds `target`, handing back whatever was bound before so the caller
    /// can detach it.
    pub fn bind(&mut self, target: T) -> (BindingId, Option<T>) {
        let previous = self.unbind();
        let id = BindingId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        self.current = Some(Bound { id, target });
        (id, previous)
    }

    pub fn unbind(&mut self) -> Option<T> {
        self.current.take().map(|bound| bound.target)
    }

    pub fn current(&self) -> Option<&T> {
        self.current.as_ref().map(|bound| &bound.target)
    }

    pub fn current_id(&self) -> Option<BindingId> {
        self.current.as_ref().map(|bound| bound.id)
    }

    pub fn is_current(&self, id: BindingId) -> bool {
        self.current_id() == Some(id)
    }

    pub fn is_bound(&self) -> bool {
        self.current.is_some()
    }
}

impl<T> Default for BindingSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MirrorSource {
    /// The panel's own slider changed.
    Panel,
    /// The bound host slider changed.
    External,
}

/// One hop of value propagation: which side gets overwritten and what level
/// ends up applied to the container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MirrorPlan {
    pub write_panel: Option<String>,
    pub write_external: Option<String>,
    pub apply: BlurLevel,
}

impl MirrorPlan {
    pub fn for_change(source: MirrorSource, raw: &str, bound: bool) -> Self {
        let level = BlurLevel::parse_or_off(raw);
        match source {
            MirrorSource::External => Self {
                write_panel: Some(level.slider_value()),
                write_external: None,
                apply: level,
            },
            MirrorSource::Panel => Self {
                write_panel: None,
                write_external: bound.then(|| level.slider_value()),
                apply: level,
            },
        }
    }
}
