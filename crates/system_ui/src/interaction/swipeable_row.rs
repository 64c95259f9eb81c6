use interaction_core::{
    reduce_swipe_row, DragTracker, RowPosition, SpringCurve, SwipeEdge, SwipeRowAction,
    SwipeRowConfig, SwipeRowEffect, SwipeRowState,
};
use leptos::*;

use super::pointer::{is_primary_press, pointer_sample, try_set_pointer_capture};
use super::{enqueue_effects, install_effect_drain};
use crate::primitives::{bool_token, merge_layout_class, Button, ButtonSize, ButtonVariant};

#[derive(Clone)]
/// One action slot revealed behind a [`SwipeableRow`].
pub struct SwipeAction {
    /// Visible button label.
    pub label: String,
    /// Button styling.
    pub variant: ButtonVariant,
    /// Caller callback run once per tap, before the row closes.
    pub on_invoke: Callback<()>,
}

impl SwipeAction {
    /// Creates an action slot.
    pub fn new(
        label: impl Into<String>,
        variant: ButtonVariant,
        on_invoke: impl Fn() + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            variant,
            on_invoke: Callback::new(move |()| on_invoke()),
        }
    }
}

#[derive(Clone, Copy)]
/// Reactive handle around one row's [`SwipeRowState`].
///
/// Callers that want only one open row at a time keep a controller per row and call
/// [`SwipeRowController::reset`] on the others when one settles open.
pub struct SwipeRowController {
    /// Reactive row state.
    pub state: RwSignal<SwipeRowState>,
    effects: RwSignal<Vec<SwipeRowEffect>>,
}

impl SwipeRowController {
    /// Creates a closed row controller. Action counts are filled in by [`SwipeableRow`].
    ///
    /// # Panics
    ///
    /// Panics when `config` holds out-of-range geometry; see [`SwipeRowState::new`].
    pub fn new(config: SwipeRowConfig) -> Self {
        Self {
            state: create_rw_signal(SwipeRowState::new(config, 0, 0)),
            effects: create_rw_signal(Vec::new()),
        }
    }

    /// Runs `action` through the row reducer and queues the resulting effects.
    pub fn dispatch(&self, action: SwipeRowAction) {
        let mut row = self.state.get_untracked();
        let previous = row.clone();

        match reduce_swipe_row(&mut row, action) {
            Ok(new_effects) => {
                if row != previous {
                    self.state.set(row);
                }
                enqueue_effects(self.effects, new_effects);
            }
            Err(err) => logging::warn!("swipe row reducer error: {err}"),
        }
    }

    /// Closes the row.
    pub fn reset(&self) {
        self.dispatch(SwipeRowAction::Reset);
    }

    /// Current content offset.
    pub fn offset(&self) -> Signal<f64> {
        let state = self.state;
        Signal::derive(move || state.with(SwipeRowState::offset))
    }

    /// Current discrete position.
    pub fn position(&self) -> Signal<RowPosition> {
        let state = self.state;
        Signal::derive(move || state.with(SwipeRowState::position))
    }

    fn set_action_counts(&self, leading: usize, trailing: usize) {
        let current = self
            .state
            .with_untracked(|row| (row.leading_action_count(), row.trailing_action_count()));
        if current != (leading, trailing) {
            self.state
                .update(|row| row.set_action_counts(leading, trailing));
        }
    }
}

#[component]
/// Row whose content slides horizontally to reveal leading and trailing action buttons.
///
/// Releasing past the swipe threshold settles the row open; anything shorter springs back.
/// Tapping an action runs its callback and closes the row.
pub fn SwipeableRow(
    #[prop(optional)] leading_actions: Vec<SwipeAction>,
    #[prop(optional)] trailing_actions: Vec<SwipeAction>,
    /// External handle; takes precedence over `config`.
    #[prop(optional)] controller: Option<SwipeRowController>,
    #[prop(optional)] config: Option<SwipeRowConfig>,
    #[prop(default = SpringCurve::SNAPPY)] motion: SpringCurve,
    /// Called with the resting position each time the row settles.
    #[prop(optional)] on_settled: Option<Callback<RowPosition>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    let controller =
        controller.unwrap_or_else(|| SwipeRowController::new(config.unwrap_or_default()));
    controller.set_action_counts(leading_actions.len(), trailing_actions.len());

    let action_width = controller
        .state
        .with_untracked(|row| row.config().action_width);
    let leading = store_value(leading_actions);
    let trailing = store_value(trailing_actions);
    let tracker = store_value(DragTracker::new());

    install_effect_drain(controller.effects, move |effect| match effect {
        SwipeRowEffect::RunAction { edge, index } => {
            let actions = match edge {
                SwipeEdge::Leading => leading,
                SwipeEdge::Trailing => trailing,
            };
            match actions.with_value(|actions| actions.get(index).map(|action| action.on_invoke)) {
                Some(on_invoke) => on_invoke.call(()),
                None => logging::warn!("swipe action {edge:?}[{index}] is no longer mounted"),
            }
        }
        SwipeRowEffect::Settled { position, .. } => {
            if let Some(on_settled) = on_settled {
                on_settled.call(position);
            }
        }
    });

    let offset = controller.offset();
    let position = controller.position();

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
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
            controller.dispatch(SwipeRowAction::DragChanged {
                translation_x: gesture.translation.dx,
            });
        }
    };
    let on_pointerup = move |ev: web_sys::PointerEvent| {
        let gesture = tracker
            .try_update_value(|tracker| tracker.end(pointer_sample(&ev)))
            .flatten();
        if let Some(gesture) = gesture {
            controller.dispatch(SwipeRowAction::DragEnded {
                translation_x: gesture.translation.dx,
            });
        }
    };
    let on_pointercancel = move |_: web_sys::PointerEvent| {
        let cancelled = tracker.try_update_value(DragTracker::cancel).flatten();
        if cancelled.is_some() {
            controller.dispatch(SwipeRowAction::DragCancelled);
        }
    };

    let action_buttons = move |edge: SwipeEdge| {
        let actions = match edge {
            SwipeEdge::Leading => leading,
            SwipeEdge::Trailing => trailing,
        };
        actions.with_value(|actions| {
            actions
                .iter()
                .enumerate()
                .map(|(index, action)| {
                    let label = action.label.clone();
                    view! {
                        <Button
                            variant=action.variant
                            size=ButtonSize::Sm
                            layout_class="ui-swipe-action"
                            ui_slot="swipe-action"
                            style=format!("width: {action_width}px; height: 100%;")
                            on_click=Callback::new(move |_| {
                                controller.dispatch(SwipeRowAction::InvokeAction { edge, index });
                            })
                        >
                            {label}
                        </Button>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div
            class=merge_layout_class("ui-swipeable-row", layout_class)
            data-ui-primitive="true"
            data-ui-kind="swipeable-row"
            data-ui-state=move || position.get().token()
            aria-label=aria_label
            style="position: relative; overflow: hidden;"
        >
            <div
                data-ui-slot="leading-actions"
                aria-hidden=move || bool_token(offset.get() <= 0.0)
                style="position: absolute; top: 0; bottom: 0; left: 0; display: flex;"
            >
                {action_buttons(SwipeEdge::Leading)}
            </div>
            <div
                data-ui-slot="trailing-actions"
                aria-hidden=move || bool_token(offset.get() >= 0.0)
                style="position: absolute; top: 0; bottom: 0; right: 0; display: flex;"
            >
                {action_buttons(SwipeEdge::Trailing)}
            </div>
            <div
                data-ui-slot="content"
                style=move || content_style(offset.get(), position.get(), motion)
                on:pointerdown=on_pointerdown
                on:pointermove=on_pointermove
                on:pointerup=on_pointerup
                on:pointercancel=on_pointercancel
            >
                {children()}
            </div>
        </div>
    }
}

fn content_style(offset: f64, position: RowPosition, motion: SpringCurve) -> String {
    let transition = if position == RowPosition::Dragging {
        "none".to_string()
    } else {
        motion.css_transition("transform")
    };
    format!(
        "position: relative; transform: translateX({offset}px); transition: {transition}; touch-action: pan-y;"
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn dragging_content_follows_pointer_without_transition() {
        assert_eq!(
            content_style(-42.0, RowPosition::Dragging, SpringCurve::SNAPPY),
            "position: relative; transform: translateX(-42px); transition: none; touch-action: pan-y;"
        );
    }

    #[test]
    fn settled_content_springs_with_motion_curve() {
        assert_eq!(
            content_style(70.0, RowPosition::LeadingOpen, SpringCurve::SNAPPY),
            format!(
                "position: relative; transform: translateX(70px); transition: {}; touch-action: pan-y;",
                SpringCurve::SNAPPY.css_transition("transform")
            )
        );
    }

    #[test]
    fn controller_queues_action_before_settle() {
        let _ = create_runtime();
        let controller = SwipeRowController::new(SwipeRowConfig::default());
        controller.set_action_counts(1, 2);

        controller.dispatch(SwipeRowAction::DragEnded {
            translation_x: -150.0,
        });
        assert_eq!(controller.offset().get_untracked(), -140.0);

        controller.dispatch(SwipeRowAction::InvokeAction {
            edge: SwipeEdge::Trailing,
            index: 1,
        });

        assert_eq!(controller.position().get_untracked(), RowPosition::Closed);
        assert_eq!(
            controller.effects.get_untracked(),
            vec![
                SwipeRowEffect::Settled {
                    offset: -140.0,
                    position: RowPosition::TrailingOpen,
                },
                SwipeRowEffect::RunAction {
                    edge: SwipeEdge::Trailing,
                    index: 1,
                },
                SwipeRowEffect::Settled {
                    offset: 0.0,
                    position: RowPosition::Closed,
                },
            ]
        );
    }

    #[test]
    fn missing_action_leaves_row_open_and_queue_untouched() {
        let _ = create_runtime();
        let controller = SwipeRowController::new(SwipeRowConfig::default());
        controller.set_action_counts(1, 0);
        controller.dispatch(SwipeRowAction::DragEnded {
            translation_x: 120.0,
        });
        let before = controller.effects.get_untracked();

        controller.dispatch(SwipeRowAction::InvokeAction {
            edge: SwipeEdge::Leading,
            index: 3,
        });

        assert_eq!(controller.offset().get_untracked(), 70.0);
        assert_eq!(controller.effects.get_untracked(), before);
    }

    #[test]
    fn action_count_change_closes_open_row() {
        let _ = create_runtime();
        let controller = SwipeRowController::new(SwipeRowConfig::default());
        controller.set_action_counts(1, 0);
        controller.dispatch(SwipeRowAction::DragEnded {
            translation_x: 120.0,
        });

        controller.set_action_counts(1, 0);
        assert_eq!(controller.offset().get_untracked(), 70.0);

        controller.set_action_counts(2, 0);
        assert_eq!(controller.offset().get_untracked(), 0.0);
    }
}
