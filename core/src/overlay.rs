/// Floating panel surface owned by the presenter.
pub trait PanelHandle {
    fn set_visible(&self, visible: bool);
    fn remove(&self);
}

/// Emitted once per write of `overlay_on` (and when binding creates the
/// panel); the owner forwards it to the registered change callback after
/// releasing its own borrows.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayChanged(pub bool);

pub struct OverlayPresenter<P> {
    on: bool,
    panel: Option<P>,
}

impl<P: PanelHandle> OverlayPresenter<P> {
    pub fn new() -> Self {
        Self {
            on: false,
            panel: None,
        }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn panel(&self) -> Option<&P> {
        self.panel.as_ref()
    }

    pub fn is_created(&self) -> bool {
        self.panel.is_some()
    }

    /// Records the flag, creating the panel on first use, and syncs its
    /// visibility. `create` receives the visibility the new panel should
    /// start with.
    pub fn write<F>(&mut self, on: bool, create: F) -> OverlayChanged
    where
        F: FnOnce(bool) -> Option<P>,
    {
        self.on = on;
        if self.panel.is_none() {
            self.panel = create(on);
        }
        if let Some(panel) = self.panel.as_ref() {
            panel.set_visible(on);
        }
        OverlayChanged(on)
    }

    /// Creates the panel if it does not exist yet, without touching the flag.
    /// Returns a notification only when a panel was created.
    pub fn ensure_created<F>(&mut self, create: F) -> Option<OverlayChanged>
    where
        F: FnOnce(bool) -> Option<P>,
    {
        if self.panel.is_some() {
            return None;
        }
        let panel = create(self.on)?;
        panel.set_visible(self.on);
        self.panel = Some(panel);
        Some(OverlayChanged(self.on))
    }

    /// Removes the panel; the next write or binding creates a fresh one.
    pub fn teardown(&mut self) -> bool {
        match self.panel.take() {
            Some(panel) => {
                panel.remove();
                true
            }
            None => false,
        }
    }
}

impl<P: PanelHandle> Default for OverlayPresenter<P> {
    fn default() -> Self {
        Self::new()
    }
}
