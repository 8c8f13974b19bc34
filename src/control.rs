use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, HtmlInputElement, KeyboardEvent, MouseEvent};

use thumb_blur_core::{
    BindingId, BindingSlot, BlurLevel, ControlOptions, MirrorPlan, MirrorSource, OverlayChanged,
    OverlayPresenter, PeekArbiter, PeekPress, ReleaseTicket,
};

use crate::input::{key_press, pointer_press, thumb_hit};
use crate::panel::OverlayPanel;
use crate::surface::{apply_blur, default_container, has_blur, reset_blur, set_marker};

pub type OverlayCallback = Rc<dyn Fn(bool)>;

fn cancellable() -> EventListenerOptions {
    EventListenerOptions {
        phase: EventListenerPhase::Bubble,
        passive: false,
    }
}

struct ControlInner {
    options: RefCell<ControlOptions>,
    container: RefCell<Option<HtmlElement>>,
    presenter: RefCell<OverlayPresenter<OverlayPanel>>,
    binding: RefCell<BindingSlot<HtmlInputElement>>,
    binding_listener: RefCell<Option<EventListener>>,
    peek: RefCell<PeekArbiter<Element>>,
    pending_release: RefCell<Option<Timeout>>,
    listeners: RefCell<Vec<EventListener>>,
    enabled: Cell<bool>,
    level: Cell<BlurLevel>,
    on_overlay_change: RefCell<Option<OverlayCallback>>,
}

/// Blur control for one thumbnail container.
///
/// Cloning yields another handle to the same control.
#[derive(Clone)]
pub struct BlurControl {
    inner: Rc<ControlInner>,
}

impl BlurControl {
    pub fn new() -> Self {
        let options = ControlOptions::default();
        let peek = PeekArbiter::new(options.peek_modifier);
        Self {
            inner: Rc::new(ControlInner {
                options: RefCell::new(options),
                container: RefCell::new(None),
                presenter: RefCell::new(OverlayPresenter::new()),
                binding: RefCell::new(BindingSlot::new()),
                binding_listener: RefCell::new(None),
                peek: RefCell::new(peek),
                pending_release: RefCell::new(None),
                listeners: RefCell::new(Vec::new()),
                enabled: Cell::new(false),
                level: Cell::new(BlurLevel::OFF),
                on_overlay_change: RefCell::new(None),
            }),
        }
    }

    /// Attaches the keyboard shortcut and, unless disabled in `options`, the
    /// peek gesture. The container defaults to the page body.
    pub fn enable(&self, options: ControlOptions) {
        self.inner.enable(options);
    }

    /// Detaches every listener, removes the panel and resets the container.
    pub fn disable(&self) {
        self.inner.disable();
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.enabled.get()
    }

    /// Mirrors the panel slider with a host-owned range input, replacing any
    /// earlier binding.
    pub fn bind(&self, input: HtmlInputElement) {
        self.inner.bind(input);
    }

    pub fn unbind(&self) {
        self.inner.unbind();
    }

    pub fn bound_input(&self) -> Option<HtmlInputElement> {
        self.inner.binding.borrow().current().cloned()
    }

    pub fn overlay_on(&self) -> bool {
        self.inner.presenter.borrow().is_on()
    }

    pub fn set_overlay_on(&self, on: bool) {
        self.inner.set_overlay_on(on);
    }

    pub fn set_overlay_change_callback(&self, callback: Option<OverlayCallback>) {
        *self.inner.on_overlay_change.borrow_mut() = callback;
    }

    pub fn container_element(&self) -> Option<HtmlElement> {
        self.inner.container.borrow().clone()
    }

    pub fn set_container_element(&self, container: Option<HtmlElement>) {
        self.inner.set_container(container);
    }

    pub fn overlay_element(&self) -> Option<HtmlElement> {
        self.inner
            .presenter
            .borrow()
            .panel()
            .map(|panel| panel.root().clone())
    }

    pub fn range_element(&self) -> Option<HtmlInputElement> {
        self.inner
            .presenter
            .borrow()
            .panel()
            .map(|panel| panel.range().clone())
    }

    pub fn level(&self) -> BlurLevel {
        self.inner.level.get()
    }

    pub fn is_peeking(&self) -> bool {
        self.inner.peek.borrow().is_peeking()
    }

    pub fn options(&self) -> ControlOptions {
        self.inner.options.borrow().clone()
    }
}

impl Default for BlurControl {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlInner {
    fn enable(self: &Rc<Self>, options: ControlOptions) {
        let allow_temp_show = options.allow_temp_show;
        self.cancel_peek();
        self.peek.borrow_mut().set_modifier(options.peek_modifier);
        *self.options.borrow_mut() = options;
        let missing = self.container.borrow().is_none();
        if missing {
            *self.container.borrow_mut() = default_container();
        }
        self.enabled.set(true);
        let bound = self.binding.borrow().current_id();
        match bound {
            Some(id) => self.on_external_change(id),
            None => {
                let level = self.level.get();
                if level.is_active() {
                    self.apply(level);
                }
            }
        }
        self.install_listeners();
        gloo::console::log!("blur control enabled, peek:", allow_temp_show);
    }

    fn disable(self: &Rc<Self>) {
        let was_enabled = self.enabled.replace(false);
        self.listeners.borrow_mut().clear();
        self.cancel_peek();
        let options = self.options.borrow();
        self.presenter.borrow_mut().teardown();
        if let Some(container) = self.container.borrow().as_ref() {
            reset_blur(container, &options.classes.blur_active);
        }
        self.level.set(BlurLevel::OFF);
        if was_enabled {
            gloo::console::log!("blur control disabled");
        }
    }

    fn set_container(self: &Rc<Self>, container: Option<HtmlElement>) {
        let previous = self.container.replace(container);
        if !self.enabled.get() {
            return;
        }
        let blur_class = self.options.borrow().classes.blur_active.clone();
        if let Some(previous) = previous {
            reset_blur(&previous, &blur_class);
        }
        let level = self.level.get();
        if level.is_active() {
            self.apply(level);
        }
        self.install_listeners();
    }

    /// Drops the pending release and unmarks any revealed thumb.
    fn cancel_peek(&self) {
        self.pending_release.borrow_mut().take();
        let cancelled = self.peek.borrow_mut().cancel();
        if let Some(thumb) = cancelled {
            let revealed = self.options.borrow().classes.revealed.clone();
            set_marker(&thumb, &revealed, false);
        }
    }

    fn install_listeners(self: &Rc<Self>) {
        self.listeners.borrow_mut().clear();
        // The mouseup listener that would end an active gesture is gone.
        self.cancel_peek();
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };
        let allow_temp_show = self.options.borrow().allow_temp_show;
        let container = self.container.borrow().clone();
        let mut listeners = Vec::new();

        let weak = Rc::downgrade(self);
        let listener = EventListener::new(&document, "keydown", move |event: &Event| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                inner.on_key_down(event);
            }
        });
        listeners.push(listener);

        if allow_temp_show {
            if let Some(container) = container.as_ref() {
                let weak = Rc::downgrade(self);
                let listener = EventListener::new(container, "mousedown", move |event: &Event| {
                    let Some(inner) = weak.upgrade() else {
                        return;
                    };
                    if let Some(event) = event.dyn_ref::<MouseEvent>() {
                        inner.on_mouse_down(event);
                    }
                });
                listeners.push(listener);

                for event_type in ["click", "dragstart"] {
                    let weak = Rc::downgrade(self);
                    let listener = EventListener::new_with_options(
                        container,
                        event_type,
                        cancellable(),
                        move |event: &Event| {
                            let Some(inner) = weak.upgrade() else {
                                return;
                            };
                            if inner.peek.borrow().suppressing() {
                                event.prevent_default();
                            }
                        },
                    );
                    listeners.push(listener);
                }
            }

            let weak = Rc::downgrade(self);
            let listener = EventListener::new(&document, "mouseup", move |_event: &Event| {
                if let Some(inner) = weak.upgrade() {
                    inner.on_mouse_up();
                }
            });
            listeners.push(listener);
        }

        *self.listeners.borrow_mut() = listeners;
    }

    fn on_key_down(self: &Rc<Self>, event: &KeyboardEvent) {
        let press = key_press(event);
        if !self.options.borrow().shortcut.matches(&press) {
            return;
        }
        let next = !self.presenter.borrow().is_on();
        gloo::console::log!("blur overlay toggled:", next);
        self.set_overlay_on(next);
    }

    fn on_mouse_down(&self, event: &MouseEvent) {
        let press = pointer_press(event);
        let (hit, blurred) = {
            let options = self.options.borrow();
            let hit = thumb_hit(event, &options.classes);
            let blurred = self
                .container
                .borrow()
                .as_ref()
                .map(|container| has_blur(container, &options.classes.blur_active))
                .unwrap_or(false);
            (hit, blurred)
        };
        let outcome = self.peek.borrow_mut().press(&press, hit, blurred);
        let PeekPress::Entered { reveal, conceal } = outcome else {
            return;
        };
        let revealed = self.options.borrow().classes.revealed.clone();
        if let Some(stale) = conceal {
            set_marker(&stale, &revealed, false);
        }
        set_marker(&reveal, &revealed, true);
    }

    fn on_mouse_up(self: &Rc<Self>) {
        let ticket = self.peek.borrow().release_ticket();
        let weak = Rc::downgrade(self);
        // Click and dragstart for this gesture still fire in the current turn.
        let timeout = Timeout::new(0, move || {
            if let Some(inner) = weak.upgrade() {
                inner.finish_release(ticket);
            }
        });
        *self.pending_release.borrow_mut() = Some(timeout);
    }

    fn finish_release(&self, ticket: ReleaseTicket) {
        let released = self.peek.borrow_mut().finish_release(ticket);
        if let Some(thumb) = released {
            let revealed = self.options.borrow().classes.revealed.clone();
            set_marker(&thumb, &revealed, false);
        }
    }

    fn set_overlay_on(self: &Rc<Self>, on: bool) {
        let changed = self
            .presenter
            .borrow_mut()
            .write(on, |visible| self.create_panel(visible));
        self.notify(changed);
    }

    fn ensure_panel(self: &Rc<Self>) {
        let changed = self
            .presenter
            .borrow_mut()
            .ensure_created(|visible| self.create_panel(visible));
        if let Some(changed) = changed {
            self.notify(changed);
        }
    }

    fn create_panel(self: &Rc<Self>, visible: bool) -> Option<OverlayPanel> {
        let document = web_sys::window()?.document()?;
        let panel = {
            let options = self.options.borrow();
            OverlayPanel::create(
                &document,
                &options.ids,
                &options.label,
                self.level.get(),
                visible,
            )
        };
        let panel = match panel {
            Ok(panel) => panel,
            Err(err) => {
                gloo::console::warn!("blur overlay could not be created", err);
                return None;
            }
        };
        let weak = Rc::downgrade(self);
        let listener = EventListener::new(panel.range(), "change", move |_event: &Event| {
            if let Some(inner) = weak.upgrade() {
                inner.on_panel_change();
            }
        });
        Some(panel.with_change_listener(listener))
    }

    fn notify(&self, changed: OverlayChanged) {
        let callback = self.on_overlay_change.borrow().clone();
        if let Some(callback) = callback {
            callback(changed.0);
        }
    }

    fn bind(self: &Rc<Self>, input: HtmlInputElement) {
        self.unbind();
        self.ensure_panel();
        let (id, _) = self.binding.borrow_mut().bind(input.clone());
        let weak = Rc::downgrade(self);
        let listener = EventListener::new(&input, "change", move |_event: &Event| {
            if let Some(inner) = weak.upgrade() {
                inner.on_external_change(id);
            }
        });
        *self.binding_listener.borrow_mut() = Some(listener);
        gloo::console::log!("blur slider bound", input.id());
        self.on_external_change(id);
    }

    fn unbind(&self) {
        let Some(input) = self.binding.borrow_mut().unbind() else {
            return;
        };
        self.binding_listener.borrow_mut().take();
        gloo::console::log!("blur slider unbound", input.id());
    }

    fn on_external_change(&self, id: BindingId) {
        let value = {
            let binding = self.binding.borrow();
            if !binding.is_current(id) {
                return;
            }
            binding.current().map(|input| input.value())
        };
        let Some(value) = value else {
            return;
        };
        self.execute(MirrorPlan::for_change(MirrorSource::External, &value, true));
    }

    fn on_panel_change(&self) {
        let value = self
            .presenter
            .borrow()
            .panel()
            .map(|panel| panel.range().value());
        let Some(value) = value else {
            return;
        };
        let bound = self.binding.borrow().is_bound();
        self.execute(MirrorPlan::for_change(MirrorSource::Panel, &value, bound));
    }

    /// Writes the other side's `value` without dispatching events, so every
    /// change travels exactly one hop.
    fn execute(&self, plan: MirrorPlan) {
        if let Some(value) = plan.write_panel.as_deref() {
            if let Some(panel) = self.presenter.borrow().panel() {
                panel.range().set_value(value);
            }
        }
        if let Some(value) = plan.write_external.as_deref() {
            if let Some(input) = self.binding.borrow().current() {
                input.set_value(value);
            }
        }
        self.apply(plan.apply);
    }

    fn apply(&self, level: BlurLevel) {
        self.level.set(level);
        if !self.enabled.get() {
            return;
        }
        let options = self.options.borrow();
        if let Some(container) = self.container.borrow().as_ref() {
            apply_blur(container, level, &options.classes.blur_active);
        }
    }
}
