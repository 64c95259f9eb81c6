//! Leptos bindings that drive the headless [`interaction_core`] state machines from DOM input.
//!
//! Each controller owns a reducer state signal plus an ordered effect queue. Components feed
//! pointer samples into a [`interaction_core::DragTracker`], dispatch reducer actions, and run
//! queued effects (caller callbacks) after the state signal settles.

use leptos::*;

mod bottom_sheet;
mod flow;
mod pointer;
mod swipeable_row;

pub use bottom_sheet::{BottomSheet, BottomSheetController};
pub use flow::FlowLayout;
pub use swipeable_row::{SwipeAction, SwipeRowController, SwipeableRow};

/// Appends reducer effects to a queue without clobbering a batch that is still pending.
pub(crate) fn enqueue_effects<E: Clone + 'static>(queue: RwSignal<Vec<E>>, effects: Vec<E>) {
    if effects.is_empty() {
        return;
    }
    queue.update(|pending| pending.extend(effects));
}

/// Installs an executor that drains `queue` in order and hands each effect to `run`.
pub(crate) fn install_effect_drain<E, F>(queue: RwSignal<Vec<E>>, run: F)
where
    E: Clone + 'static,
    F: Fn(E) + 'static,
{
    // The queue is cleared before running so callbacks that dispatch again enqueue a fresh batch.
    create_effect(move |_| {
        let queued = queue.get();
        if queued.is_empty() {
            return;
        }

        queue.set(Vec::new());

        for effect in queued {
            run(effect);
        }
    });
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn enqueue_appends_after_pending_effects() {
        let _ = create_runtime();
        let queue = create_rw_signal(vec![1]);

        enqueue_effects(queue, vec![2, 3]);
        enqueue_effects(queue, Vec::new());

        assert_eq!(queue.get_untracked(), vec![1, 2, 3]);
    }
}
