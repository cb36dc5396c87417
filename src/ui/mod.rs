//! Ui Module - The focus/dispatch coordinator.
//!
//! [`Ui`] owns the ordered control registry, the focus index, the modal
//! stack, the toast list, and the ambient input state, and routes every
//! raw input event with the precedence:
//!
//! ```text
//! modal (topmost) > Tab/Escape globals > focused control
//! ```
//!
//! Insertion order is both tab order and z-order: clicks hit-test from
//! the last-added control down, so later elements occlude earlier ones
//! visually and interactively.
//!
//! All state is mutated from the single event/render thread; no
//! locking is involved. User callbacks must not panic across the
//! dispatch boundary - the coordinator never catches, so a panicking
//! callback unwinds out of the dispatch call.
//!
//! # Example
//!
//! ```
//! use ember_ui::ui::Ui;
//! use ember_ui::widgets::{Button, Toggle};
//! use ember_ui::types::Rect;
//! use ember_ui::state::keyboard::KeyEvent;
//!
//! let mut ui = Ui::new(800.0, 600.0);
//! ui.register(Box::new(Button::new(Rect::new(10.0, 10.0, 100.0, 30.0), "OK")));
//! ui.register(Box::new(Toggle::new(Rect::new(10.0, 50.0, 100.0, 24.0), "Sound", true)));
//!
//! assert_eq!(ui.focus_index(), 0);
//! ui.key_event(KeyEvent::new("Tab"));
//! assert_eq!(ui.focus_index(), 1);
//! ```

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use spark_signals::{Signal, signal};
use tracing::{debug, trace};

use crate::overlay::{Modal, ModalAction, ModalHandle, ModalOutcome, Toast, ToastHandle};
use crate::state::gamepad;
use crate::state::keyboard::{KeyEvent, KeyState};
use crate::state::pointer::{DisplayTransform, PointerButtons};
use crate::surface::Surface;
use crate::theme::{Severity, Theme};
use crate::widgets::{AxisDirection, Control, DrawContext};

// =============================================================================
// TYPES
// =============================================================================

/// Handle to a registered control.
///
/// Registration hands one out; removal takes it back. Handles are never
/// reused, so a stale handle is simply a miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlId(u64);

// =============================================================================
// UI - The coordinator
// =============================================================================

/// The focus/dispatch coordinator.
pub struct Ui {
    /// Registered controls. Insertion order = tab order = z-order.
    controls: Vec<(ControlId, Box<dyn Control>)>,
    /// Focus index into `controls`: -1 only while the list is empty.
    focused: Signal<i32>,
    /// Modal stack; last = topmost = the exclusive input target.
    modals: Vec<Modal>,
    /// Live toasts, insertion order = stacking order.
    toasts: Vec<Toast>,
    on_escape: Option<Box<dyn FnMut()>>,

    // Ambient input state
    held_keys: HashSet<String>,
    pointer: Signal<(f32, f32)>,
    pointer_buttons: PointerButtons,
    gamepads: HashMap<usize, Vec<bool>>,
    transform: DisplayTransform,

    theme: Theme,
    running: bool,
    last_tick: Option<Instant>,
    next_id: u64,
}

impl Ui {
    /// Create a coordinator for a surface of the given native size.
    pub fn new(surface_w: f32, surface_h: f32) -> Self {
        Self {
            controls: Vec::new(),
            focused: signal(-1),
            modals: Vec::new(),
            toasts: Vec::new(),
            on_escape: None,
            held_keys: HashSet::new(),
            pointer: signal((0.0, 0.0)),
            pointer_buttons: PointerButtons::NONE,
            gamepads: HashMap::new(),
            transform: DisplayTransform::identity(surface_w, surface_h),
            theme: Theme::default(),
            running: false,
            last_tick: None,
            next_id: 0,
        }
    }

    /// Replace the theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    // =========================================================================
    // CONTROL REGISTRY
    // =========================================================================

    /// Register a control, appending it to the tab/z-order.
    /// The first control ever added receives focus.
    pub fn register(&mut self, control: Box<dyn Control>) -> ControlId {
        let id = ControlId(self.next_id());
        self.controls.push((id, control));
        debug!(id = id.0, count = self.controls.len(), "control registered");
        if self.controls.len() == 1 {
            self.focused.set(0);
        }
        id
    }

    /// Remove a control by handle. Unknown handles are a no-op.
    ///
    /// The focus index clamps to the new last index when it now points
    /// past the end, and resets to -1 when the list empties.
    pub fn remove(&mut self, id: ControlId) {
        let Some(index) = self.controls.iter().position(|(cid, _)| *cid == id) else {
            return;
        };
        self.controls.remove(index);
        debug!(id = id.0, count = self.controls.len(), "control removed");

        let len = self.controls.len() as i32;
        if len == 0 {
            self.focused.set(-1);
        } else if self.focused.get() > len - 1 {
            self.focused.set(len - 1);
        }
    }

    /// Number of registered controls.
    pub fn control_count(&self) -> usize {
        self.controls.len()
    }

    // =========================================================================
    // FOCUS
    // =========================================================================

    /// The current focus index (-1 while no control is registered).
    pub fn focus_index(&self) -> i32 {
        self.focused.get()
    }

    /// A clone of the focus signal, for reactive observation.
    pub fn focused_signal(&self) -> Signal<i32> {
        self.focused.clone()
    }

    /// Focus a specific control by handle. Unknown handles are a no-op.
    pub fn set_focus(&mut self, id: ControlId) {
        if let Some(index) = self.controls.iter().position(|(cid, _)| *cid == id) {
            self.focused.set(index as i32);
        }
    }

    /// Current focus index, defensively clamped into the valid range.
    /// Returns None while the list is empty.
    fn focused_index(&self) -> Option<usize> {
        if self.controls.is_empty() {
            return None;
        }
        let max = self.controls.len() as i32 - 1;
        Some(self.focused.get().clamp(0, max) as usize)
    }

    /// Advance focus with wraparound. No-op while the list is empty.
    pub fn focus_next(&mut self) {
        if let Some(i) = self.focused_index() {
            let n = self.controls.len();
            self.focused.set(((i + 1) % n) as i32);
        }
    }

    /// Retreat focus with wraparound. No-op while the list is empty.
    pub fn focus_previous(&mut self) {
        if let Some(i) = self.focused_index() {
            let n = self.controls.len();
            self.focused.set(((i + n - 1) % n) as i32);
        }
    }

    // =========================================================================
    // GLOBAL ESCAPE
    // =========================================================================

    /// Set the single global Escape callback, invoked on the Escape key
    /// or the controller cancel button while no modal is open.
    pub fn set_escape_handler(&mut self, f: impl FnMut() + 'static) {
        self.on_escape = Some(Box::new(f));
    }

    fn run_escape_handler(&mut self) {
        if let Some(cb) = self.on_escape.as_mut() {
            trace!("global escape handler invoked");
            cb();
        }
    }

    // =========================================================================
    // KEY ROUTING
    // =========================================================================

    /// Route a key event: topmost modal, else Tab/Escape globals, else
    /// the focused control.
    pub fn key_event(&mut self, event: KeyEvent) {
        // Ambient held-key bookkeeping happens for every state
        match event.state {
            KeyState::Release => {
                self.held_keys.remove(&event.key);
                return;
            }
            KeyState::Press => {
                self.held_keys.insert(event.key.clone());
            }
            KeyState::Repeat => {}
        }

        if self.modals.last().is_some() {
            trace!(key = %event.key, "key routed to modal");
            let outcome = self.modals.last_mut().map(|m| m.handle_key(&event));
            if let Some(outcome) = outcome {
                self.apply_modal_outcome(outcome);
            }
            return;
        }

        match event.key.as_str() {
            // Tab bypasses controls entirely
            "Tab" => {
                if event.modifiers.shift {
                    self.focus_previous();
                } else {
                    self.focus_next();
                }
            }
            "Escape" => self.run_escape_handler(),
            _ => {
                if let Some(i) = self.focused_index() {
                    trace!(key = %event.key, index = i, "key routed to focused control");
                    self.controls[i].1.handle_key(&event);
                }
            }
        }
    }

    /// Whether a key is currently held, by identifier.
    pub fn is_key_held(&self, key: &str) -> bool {
        self.held_keys.contains(key)
    }

    // =========================================================================
    // POINTER ROUTING
    // =========================================================================

    /// Record the size the surface is displayed at, for the
    /// display-to-surface coordinate transform.
    pub fn set_displayed_size(&mut self, w: f32, h: f32) {
        self.transform.set_displayed_size(w, h);
    }

    /// Update the ambient pointer position. No dispatch: elements read
    /// the pointer from the draw context for hover rendering.
    pub fn pointer_moved(&mut self, display_x: f32, display_y: f32) {
        self.pointer.set(self.transform.to_surface(display_x, display_y));
    }

    /// Record a pointer button press (ambient state only).
    pub fn pointer_down(&mut self, button: PointerButtons) {
        self.pointer_buttons |= button;
    }

    /// Record a pointer button release (ambient state only).
    pub fn pointer_up(&mut self, button: PointerButtons) {
        self.pointer_buttons.remove(button);
    }

    /// Currently held pointer buttons.
    pub fn pointer_buttons(&self) -> PointerButtons {
        self.pointer_buttons
    }

    /// Ambient pointer position in surface coordinates.
    pub fn pointer(&self) -> (f32, f32) {
        self.pointer.get()
    }

    /// A clone of the pointer-position signal.
    pub fn pointer_signal(&self) -> Signal<(f32, f32)> {
        self.pointer.clone()
    }

    /// Route a click, given display coordinates.
    ///
    /// A modal takes it exclusively; otherwise controls are hit-tested
    /// topmost (last-added) first, and the first hit takes focus and
    /// the click. Exactly one control can receive a given click.
    pub fn pointer_click(&mut self, display_x: f32, display_y: f32) {
        let (x, y) = self.transform.to_surface(display_x, display_y);
        self.pointer.set((x, y));

        if self.modals.last().is_some() {
            trace!(x, y, "click routed to modal");
            let outcome = self.modals.last_mut().map(|m| m.handle_click(x, y));
            if let Some(outcome) = outcome {
                self.apply_modal_outcome(outcome);
            }
            return;
        }

        for i in (0..self.controls.len()).rev() {
            if self.controls[i].1.contains_point(x, y) {
                trace!(x, y, index = i, "click routed to control");
                self.focused.set(i as i32);
                self.controls[i].1.handle_click(x, y);
                return;
            }
        }
    }

    // =========================================================================
    // CONTROLLER ROUTING
    // =========================================================================

    /// Feed one device's button array from the host's periodic poll.
    ///
    /// Dispatch is edge-triggered against the device's prior snapshot:
    /// held buttons fire once, on the press transition.
    pub fn poll_gamepad(&mut self, device: usize, buttons: &[bool]) {
        let previous = self.gamepads.get(&device).cloned().unwrap_or_default();
        let edges = gamepad::rising_edges(&previous, buttons);
        self.gamepads.insert(device, buttons.to_vec());

        for button in edges {
            self.gamepad_button(button);
        }
    }

    /// Dispatch a single edge-triggered controller button press.
    pub fn gamepad_button(&mut self, button: usize) {
        if self.modals.last().is_some() {
            trace!(button, "controller button routed to modal");
            let outcome = self.modals.last_mut().map(|m| m.handle_button(button));
            if let Some(outcome) = outcome {
                self.apply_modal_outcome(outcome);
            }
            return;
        }

        match button {
            gamepad::BUTTON_CONFIRM => {
                if let Some(i) = self.focused_index() {
                    self.controls[i].1.activate();
                }
            }
            gamepad::BUTTON_CANCEL => self.run_escape_handler(),
            gamepad::BUTTON_DPAD_UP => self.focus_previous(),
            gamepad::BUTTON_DPAD_DOWN => self.focus_next(),
            gamepad::BUTTON_DPAD_LEFT => self.dispatch_axis(AxisDirection::Left),
            gamepad::BUTTON_DPAD_RIGHT => self.dispatch_axis(AxisDirection::Right),
            _ => {}
        }
    }

    /// Directional adjust on the focused control: the generic axis
    /// handler gets first refusal, the discrete left/right handlers are
    /// the fallback.
    fn dispatch_axis(&mut self, direction: AxisDirection) {
        let Some(i) = self.focused_index() else {
            return;
        };
        let control = &mut self.controls[i].1;
        if !control.handle_axis(direction) {
            match direction {
                AxisDirection::Left => control.handle_left(),
                AxisDirection::Right => control.handle_right(),
                AxisDirection::Up | AxisDirection::Down => {}
            }
        }
    }

    // =========================================================================
    // MODALS
    // =========================================================================

    /// Open a modal dialog; it immediately becomes the exclusive input
    /// target. Empty `actions` gets the default single "OK".
    ///
    /// The surface is needed once, to auto-size against its text
    /// metrics; pass `size` to override.
    pub fn open_modal(
        &mut self,
        surface: &dyn Surface,
        title: impl Into<String>,
        message: &str,
        actions: Vec<ModalAction>,
        size: Option<(f32, f32)>,
    ) -> ModalHandle {
        let id = self.next_id();
        let modal = Modal::new(id, title, message, actions, size, surface, &self.theme);
        debug!(id, depth = self.modals.len() + 1, "modal opened");
        self.modals.push(modal);
        ModalHandle(id)
    }

    /// Force-close a modal wherever it sits in the stack. Stale handles
    /// are a no-op.
    pub fn close_modal(&mut self, handle: &ModalHandle) {
        let before = self.modals.len();
        self.modals.retain(|m| m.id() != handle.0);
        if self.modals.len() != before {
            debug!(id = handle.0, "modal force-closed");
        }
    }

    /// Whether any modal is on the stack.
    pub fn has_modal(&self) -> bool {
        !self.modals.is_empty()
    }

    /// Modal stack depth.
    pub fn modal_count(&self) -> usize {
        self.modals.len()
    }

    /// Pop the topmost modal and run the consequence of its outcome.
    fn apply_modal_outcome(&mut self, outcome: ModalOutcome) {
        match outcome {
            ModalOutcome::Consumed => {}
            ModalOutcome::Close => {
                if let Some(m) = self.modals.pop() {
                    debug!(id = m.id(), "modal closed");
                }
            }
            ModalOutcome::Invoke(index) => {
                if let Some(mut m) = self.modals.pop() {
                    debug!(id = m.id(), action = index, "modal action invoked");
                    // Close first, then run: the callback may open the
                    // next modal and must see a settled stack.
                    if let Some(mut cb) = m.take_callback(index) {
                        cb();
                    }
                }
            }
        }
    }

    // =========================================================================
    // TOASTS
    // =========================================================================

    /// Open a toast. It removes itself after `duration` on its own
    /// clock, independent of the render loop.
    pub fn open_toast(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        duration: Duration,
    ) -> ToastHandle {
        let id = self.next_id();
        self.toasts.push(Toast::new(id, message, severity, duration));
        ToastHandle(id)
    }

    /// Dismiss a toast early. Idempotent: dismissing an expired or
    /// already-dismissed toast is a no-op.
    pub fn dismiss_toast(&mut self, handle: &ToastHandle) {
        if let Some(t) = self.toasts.iter().find(|t| t.id() == handle.0) {
            t.dismiss();
        }
        self.prune_toasts();
    }

    /// Number of live (unexpired) toasts.
    pub fn toast_count(&mut self) -> usize {
        self.prune_toasts();
        self.toasts.len()
    }

    fn prune_toasts(&mut self) {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.is_expired());
        let removed = before - self.toasts.len();
        if removed > 0 {
            debug!(removed, "expired toasts pruned");
        }
    }

    // =========================================================================
    // RENDER LOOP
    // =========================================================================

    /// Arm the render loop. The host then calls [`frame`](Ui::frame)
    /// once per display refresh.
    pub fn start(&mut self) {
        self.running = true;
        self.last_tick = None;
        debug!("render loop started");
    }

    /// Disarm the render loop and clear the stored tick instant, so a
    /// later restart does not see a stale delta. Toast expiry timers
    /// keep running regardless.
    pub fn stop(&mut self) {
        self.running = false;
        self.last_tick = None;
        debug!("render loop stopped");
    }

    /// Whether the render loop is armed.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// One render tick: advance timers by the wall-clock delta, then
    /// draw every live element. Does nothing while stopped.
    pub fn frame(&mut self, surface: &mut dyn Surface) {
        if !self.running {
            return;
        }
        let now = Instant::now();
        let dt = self
            .last_tick
            .map(|t| now.duration_since(t).as_secs_f32())
            .unwrap_or(0.0);
        self.last_tick = Some(now);

        self.advance(dt);
        self.draw(surface);
    }

    /// The update pass alone: per-control `update(dt)` plus toast
    /// pruning. Exposed for deterministic tests and headless hosts.
    pub fn advance(&mut self, dt: f32) {
        for (_, control) in &mut self.controls {
            control.update(dt);
        }
        self.prune_toasts();
    }

    /// The draw pass alone, in fixed layering order: controls in
    /// insertion order, then toasts, then modals (topmost last).
    pub fn draw(&self, surface: &mut dyn Surface) {
        let focused = self.focused.get();
        let pointer = self.pointer.get();

        for (i, (_, control)) in self.controls.iter().enumerate() {
            let cx = DrawContext {
                focused: i as i32 == focused,
                pointer,
                theme: &self.theme,
            };
            control.draw(surface, &cx);
        }

        for (i, toast) in self.toasts.iter().enumerate() {
            toast.draw(surface, &self.theme, i);
        }

        for modal in &self.modals {
            modal.draw(surface, &self.theme);
        }
    }

    // =========================================================================
    // THEME
    // =========================================================================

    /// The active theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Mutable access to the active theme.
    pub fn theme_mut(&mut self) -> &mut Theme {
        &mut self.theme
    }
}

// =============================================================================
// TESTS
// =============================================================================
