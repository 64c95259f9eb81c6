use interaction_core::{
    reduce_bottom_sheet, BottomSheetConfig, BottomSheetState, Detent, DragTracker, SheetAction,
    SheetEffect, SpringCurve,
};
use leptos::*;

use super::pointer::{is_primary_press, pointer_sample, try_set_pointer_capture};
use super::{enqueue_effects, install_effect_drain};
use crate::primitives::{bool_token, merge_layout_class};

/// Container height used until the browser viewport can be read.
const FALLBACK_CONTAINER_HEIGHT: f64 = 800.0;

fn viewport_height() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        window()
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .filter(|height| *height > 0.0)
            .unwrap_or(FALLBACK_CONTAINER_HEIGHT)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        FALLBACK_CONTAINER_HEIGHT
    }
}

#[derive(Clone, Copy)]
/// Reactive handle around one sheet's [`BottomSheetState`].
pub struct BottomSheetController {
    /// Reactive sheet state.
    pub state: RwSignal<BottomSheetState>,
    effects: RwSignal<Vec<SheetEffect>>,
}

impl BottomSheetController {
    /// Creates a hidden sheet sized against the browser viewport.
    ///
    /// # Panics
    ///
    /// Panics when `config.initial_detent` is not one of `config.detents`.
    pub fn new(config: BottomSheetConfig) -> Self {
        Self::with_container_height(config, viewport_height())
    }

    /// Creates a hidden sheet sized against an explicit container height.
    ///
    /// # Panics
    ///
    /// Panics when the initial detent is not a member or `container_height` is not positive.
    pub fn with_container_height(config: BottomSheetConfig, container_height: f64) -> Self {
        Self {
            state: create_rw_signal(BottomSheetState::new(config, container_height)),
            effects: create_rw_signal(Vec::new()),
        }
    }

    /// Runs `action` through the sheet reducer and queues the resulting effects.
    pub fn dispatch(&self, action: SheetAction) {
        let mut sheet = self.state.get_untracked();
        let previous = sheet.clone();
        let new_effects = reduce_bottom_sheet(&mut sheet, action);
        if sheet != previous {
            self.state.set(sheet);
        }
        enqueue_effects(self.effects, new_effects);
    }

    /// Shows the sheet at its current detent.
    pub fn present(&self) {
        self.dispatch(SheetAction::Present);
    }

    /// Hides the sheet.
    pub fn dismiss(&self) {
        self.dispatch(SheetAction::Dismiss);
    }

    /// Whether the sheet is visible.
    pub fn is_presented(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(BottomSheetState::is_presented))
    }

    /// Detent the sheet rests at, or will reopen at.
    pub fn current_detent(&self) -> Signal<Detent> {
        let state = self.state;
        Signal::derive(move || state.with(BottomSheetState::current_detent))
    }

    /// Height currently rendered, including any in-flight drag.
    pub fn displayed_height(&self) -> Signal<f64> {
        let state = self.state;
        Signal::derive(move || state.with(BottomSheetState::displayed_height))
    }
}

#[component]
/// Modal sheet anchored to the bottom edge that snaps between detents.
///
/// Dragging the sheet resizes it; releasing snaps to the closest detent, and a fast downward
/// flick dismisses it. Tapping the backdrop dismisses as well.
pub fn BottomSheet(
    controller: BottomSheetController,
    #[prop(default = SpringCurve::SMOOTH)] motion: SpringCurve,
    /// Called after the sheet hides, whatever the cause.
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
    /// Called with the detent each time the sheet comes to rest.
    #[prop(optional)] on_settle: Option<Callback<Detent>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    let tracker = store_value(DragTracker::new());
    let show_handle = controller
        .state
        .with_untracked(|sheet| sheet.config().show_handle);

    install_effect_drain(controller.effects, move |effect| match effect {
        SheetEffect::Presented => {}
        SheetEffect::SettledAt(detent) => {
            if let Some(on_settle) = on_settle {
                on_settle.call(detent);
            }
        }
        SheetEffect::Dismissed => {
            if let Some(on_dismiss) = on_dismiss {
                on_dismiss.call(());
            }
        }
    });

    let resize_listener = window_event_listener(ev::resize, move |_| {
        controller.dispatch(SheetAction::ContainerResized {
            height: viewport_height(),
        });
    });
    on_cleanup(move || resize_listener.remove());

    let presented = controller.is_presented();
    let height = controller.displayed_height();
    let dragging = Signal::derive(move || controller.state.with(BottomSheetState::is_dragging));

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if !presented.get_untracked() || !is_primary_press(&ev) {
            return;
        }
        tracker.update_value(|tracker| tracker.begin(pointer_sample(&ev)));
    };
    let on_pointermove = move |ev: web_sys::PointerEvent| {
        let gesture = tracker
            .try_update_value(|tracker| tracker.update(pointer_sample(&ev)))
            .flatten();
        if let Some(gesture) = gesture {
            // Captured on first move so taps still reach buttons inside the content.
            try_set_pointer_capture(&ev);
            controller.dispatch(SheetAction::DragChanged {
                delta_y: gesture.translation.dy,
            });
        }
    };
    let on_pointerup = move |ev: web_sys::PointerEvent| {
        let gesture = tracker
            .try_update_value(|tracker| tracker.end(pointer_sample(&ev)))
            .flatten();
        // A press that never moved is a tap on the content, not a release.
        let moved = controller.state.with_untracked(BottomSheetState::is_dragging);
        if let Some(gesture) = gesture.filter(|_| moved) {
            controller.dispatch(SheetAction::DragEnded {
                delta_y: gesture.translation.dy,
                velocity_y: gesture.velocity.dy,
            });
        }
    };
    let on_pointercancel = move |_: web_sys::PointerEvent| {
        let cancelled = tracker.try_update_value(DragTracker::cancel).flatten();
        if cancelled.is_some() {
            controller.dispatch(SheetAction::DragCancelled);
        }
    };

    view! {
        <div
            class=merge_layout_class("ui-bottom-sheet", layout_class)
            data-ui-primitive="true"
            data-ui-kind="bottom-sheet"
            data-ui-state=move || sheet_state_token(presented.get(), dragging.get())
            aria-hidden=move || bool_token(!presented.get())
        >
            <div
                data-ui-slot="backdrop"
                style=move || backdrop_style(presented.get(), motion)
                on:click=move |_| controller.dispatch(SheetAction::BackdropTapped)
            ></div>
            <div
                data-ui-slot="sheet"
                role="dialog"
                aria-modal="true"
                aria-label=aria_label
                style=move || sheet_style(height.get(), presented.get(), dragging.get(), motion)
                on:pointerdown=on_pointerdown
                on:pointermove=on_pointermove
                on:pointerup=on_pointerup
                on:pointercancel=on_pointercancel
            >
                {show_handle.then(|| view! { <div data-ui-slot="handle" aria-hidden="true"></div> })}
                <div data-ui-slot="sheet-content">{children()}</div>
            </div>
        </div>
    }
}

fn sheet_state_token(presented: bool, dragging: bool) -> &'static str {
    match (presented, dragging) {
        (false, _) => "hidden",
        (true, true) => "dragging",
        (true, false) => "presented",
    }
}

fn backdrop_style(presented: bool, motion: SpringCurve) -> String {
    let (opacity, pointer_events) = if presented {
        (1, "auto")
    } else {
        (0, "none")
    };
    format!(
        "position: fixed; inset: 0; opacity: {opacity}; pointer-events: {pointer_events}; transition: {};",
        motion.css_transition("opacity")
    )
}

fn sheet_style(height: f64, presented: bool, dragging: bool, motion: SpringCurve) -> String {
    let translate = if presented { "0" } else { "100%" };
    let transition = if dragging {
        "none".to_string()
    } else {
        format!(
            "{}, {}",
            motion.css_transition("height"),
            motion.css_transition("transform")
        )
    };
    format!(
        "position: fixed; left: 0; right: 0; bottom: 0; height: {height}px; transform: translateY({translate}); transition: {transition}; touch-action: none;"
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn controller() -> BottomSheetController {
        BottomSheetController::with_container_height(BottomSheetConfig::default(), 800.0)
    }

    #[test]
    fn controller_starts_hidden_at_initial_detent() {
        let _ = create_runtime();
        let sheet = controller();

        assert!(!sheet.is_presented().get_untracked());
        assert_eq!(sheet.current_detent().get_untracked(), Detent::MEDIUM);
        assert_eq!(sheet.displayed_height().get_untracked(), 400.0);
    }

    #[test]
    fn backdrop_tap_queues_dismissal() {
        let _ = create_runtime();
        let sheet = controller();
        sheet.present();

        sheet.dispatch(SheetAction::BackdropTapped);

        assert!(!sheet.is_presented().get_untracked());
        assert_eq!(
            sheet.effects.get_untracked(),
            vec![SheetEffect::Presented, SheetEffect::Dismissed]
        );
    }

    #[test]
    fn drag_up_grows_sheet_then_snaps_large() {
        let _ = create_runtime();
        let sheet = controller();
        sheet.present();

        sheet.dispatch(SheetAction::DragChanged { delta_y: -250.0 });
        assert_eq!(sheet.displayed_height().get_untracked(), 650.0);

        sheet.dispatch(SheetAction::DragEnded {
            delta_y: -250.0,
            velocity_y: -300.0,
        });
        assert_eq!(sheet.current_detent().get_untracked(), Detent::LARGE);
        assert_eq!(sheet.displayed_height().get_untracked(), 720.0);
    }

    #[test]
    fn hidden_sheet_slides_below_viewport() {
        assert_eq!(sheet_state_token(false, true), "hidden");
        assert!(sheet_style(400.0, false, false, SpringCurve::SMOOTH)
            .contains("transform: translateY(100%)"));
        assert!(sheet_style(380.0, true, true, SpringCurve::SMOOTH)
            .contains("height: 380px; transform: translateY(0); transition: none;"));
        assert!(backdrop_style(false, SpringCurve::SMOOTH).contains("pointer-events: none"));
    }
}
