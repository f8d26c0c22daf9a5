//! Leptos Swap Gestures
//!
//! Drag-one-slot-onto-another for a row of slots, built on pointer events so
//! touch and mouse behave the same. A movement threshold separates a tap
//! (left to the slot's own click handler) from a drag.
//!
//! Slots mark themselves with a `data-slot="<index>"` attribute; the drop
//! target is resolved from the element under the pointer on release.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Attribute every slot element carries
pub const SLOT_ATTR: &str = "data-slot";

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 8;

/// Gesture state signals
#[derive(Clone, Copy)]
pub struct SwapSignals {
    pub dragging_slot_read: ReadSignal<Option<usize>>,
    pub dragging_slot_write: WriteSignal<Option<usize>>,
    /// Slot currently under the dragged item
    pub hover_slot_read: ReadSignal<Option<usize>>,
    pub hover_slot_write: WriteSignal<Option<usize>>,
    /// Pointer offset of the dragged item from where it was pressed
    pub drag_delta_read: ReadSignal<(i32, i32)>,
    pub drag_delta_write: WriteSignal<(i32, i32)>,
    /// True for a moment after a drag so the trailing click is ignored
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pressed slot (pointerdown but not yet dragging)
    pub pending_slot_read: ReadSignal<Option<usize>>,
    pub pending_slot_write: WriteSignal<Option<usize>>,
    pub start_read: ReadSignal<(i32, i32)>,
    pub start_write: WriteSignal<(i32, i32)>,
}

pub fn create_swap_signals() -> SwapSignals {
    let (dragging_slot_read, dragging_slot_write) = signal(None::<usize>);
    let (hover_slot_read, hover_slot_write) = signal(None::<usize>);
    let (drag_delta_read, drag_delta_write) = signal((0i32, 0i32));
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_slot_read, pending_slot_write) = signal(None::<usize>);
    let (start_read, start_write) = signal((0i32, 0i32));
    SwapSignals {
        dragging_slot_read,
        dragging_slot_write,
        hover_slot_read,
        hover_slot_write,
        drag_delta_read,
        drag_delta_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_slot_read,
        pending_slot_write,
        start_read,
        start_write,
    }
}

/// Whether a pointer moved far enough from its press point to count as a drag
pub fn exceeds_threshold(dx: i32, dy: i32) -> bool {
    dx.abs() > DRAG_THRESHOLD_PX || dy.abs() > DRAG_THRESHOLD_PX
}

/// Parse a `data-slot` attribute value
pub fn parse_slot(value: &str) -> Option<usize> {
    value.trim().parse().ok()
}

/// Swap to perform when a drag of `dragging` is released over `hover`
pub fn resolve_drop(dragging: Option<usize>, hover: Option<usize>) -> Option<(usize, usize)> {
    match (dragging, hover) {
        (Some(from), Some(to)) if from != to => Some((from, to)),
        _ => None,
    }
}

/// Slot index of the element under a viewport point
pub fn slot_at_point(x: i32, y: i32) -> Option<usize> {
    let doc = web_sys::window()?.document()?;
    let element = doc.element_from_point(x as f32, y as f32)?;
    let slot = element.closest(&format!("[{}]", SLOT_ATTR)).ok()??;
    parse_slot(&slot.get_attribute(SLOT_ATTR)?)
}

/// End the current gesture
pub fn end_drag(swap: &SwapSignals) {
    let was_dragging = swap.dragging_slot_read.get_untracked().is_some();
    swap.dragging_slot_write.set(None);
    swap.hover_slot_write.set(None);
    swap.pending_slot_write.set(None);
    swap.drag_delta_write.set((0, 0));
    if !was_dragging {
        return;
    }

    swap.drag_just_ended_write.set(true);
    if let Some(win) = web_sys::window() {
        let clear = swap.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create pointerdown handler for a slot
/// Records a pending drag with its start position
pub fn make_on_pointerdown(swap: SwapSignals, slot: usize) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |ev: web_sys::PointerEvent| {
        if !ev.is_primary() || ev.button() != 0 {
            return;
        }
        swap.pending_slot_write.set(Some(slot));
        swap.start_write.set((ev.client_x(), ev.client_y()));
    }
}

/// Bind document pointermove: starts a drag past the threshold, then tracks
/// the pointer and the slot under it
pub fn bind_global_pointermove(swap: SwapSignals) {
    use wasm_bindgen::closure::Closure;

    let on_pointermove = Closure::<dyn FnMut(web_sys::PointerEvent)>::new(move |ev: web_sys::PointerEvent| {
        let pending = swap.pending_slot_read.get_untracked();
        if pending.is_none() {
            return;
        }
        let (start_x, start_y) = swap.start_read.get_untracked();
        let dx = ev.client_x() - start_x;
        let dy = ev.client_y() - start_y;

        if swap.dragging_slot_read.get_untracked().is_none() {
            if !exceeds_threshold(dx, dy) {
                return;
            }
            log::debug!("drag started from slot {:?}", pending);
            swap.dragging_slot_write.set(pending);
        }

        swap.drag_delta_write.set((dx, dy));
        let hover = slot_at_point(ev.client_x(), ev.client_y()).filter(|s| Some(*s) != pending);
        if swap.hover_slot_read.get_untracked() != hover {
            swap.hover_slot_write.set(hover);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("pointermove", on_pointermove.as_ref().unchecked_ref());
        }
    }
    on_pointermove.forget();
}

/// Bind document pointerup/pointercancel for drop detection
pub fn bind_global_pointerup<F>(swap: SwapSignals, on_swap: F)
where
    F: Fn(usize, usize) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_pointerup = Closure::<dyn FnMut(web_sys::PointerEvent)>::new(move |ev: web_sys::PointerEvent| {
        let dragging = swap.dragging_slot_read.get_untracked();
        let hover = swap.hover_slot_read.get_untracked();
        end_drag(&swap);

        if ev.type_() == "pointercancel" {
            return;
        }
        if let Some((from, to)) = resolve_drop(dragging, hover) {
            log::debug!("dropped slot {} on slot {}", from, to);
            on_swap(from, to);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            for name in ["pointerup", "pointercancel"] {
                let _ = doc.add_event_listener_with_callback(name, on_pointerup.as_ref().unchecked_ref());
            }
        }
    }
    on_pointerup.forget();

    // Also bind global pointermove
    bind_global_pointermove(swap);
}
