use interaction_core::{FlowArrangement, Point, Size, DEFAULT_FLOW_SPACING};
use leptos::*;
use wasm_bindgen::JsCast;

use crate::primitives::merge_layout_class;

#[component]
/// Wrapping container that places children left to right and starts a new row when the next
/// child would overflow the container width.
///
/// Children are measured after mount and positioned absolutely; the container takes the
/// arranged height. Layout reruns when the window resizes and whenever `relayout_on`
/// notifies, so callers that swap or resize children can ask for a remeasure.
///
/// # Panics
///
/// Panics when `spacing` is negative or not finite.
pub fn FlowLayout(
    #[prop(default = DEFAULT_FLOW_SPACING)] spacing: f64,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] relayout_on: Option<Signal<usize>>,
    children: Children,
) -> impl IntoView {
    let engine = interaction_core::FlowLayout::new(spacing);
    let container = create_node_ref::<html::Div>();
    let arranged = create_rw_signal(FlowArrangement::default());

    let relayout = move || {
        if let Some(container) = container.get_untracked() {
            let arrangement = arrange_children(&container, engine);
            if arrangement != arranged.get_untracked() {
                arranged.set(arrangement);
            }
        }
    };

    container.on_load(move |_| request_animation_frame(relayout));

    let resize_listener = window_event_listener(ev::resize, move |_| relayout());
    on_cleanup(move || resize_listener.remove());

    if let Some(trigger) = relayout_on {
        // Deferred a frame so reactive children have been patched before measuring.
        install_relayout_trigger(trigger, move || request_animation_frame(relayout));
    }

    view! {
        <div
            node_ref=container
            class=merge_layout_class("ui-flow-layout", layout_class)
            data-ui-primitive="true"
            data-ui-kind="flow-layout"
            data-ui-slot=ui_slot
            data-ui-rows=move || arranged.get().row_count
            aria-label=aria_label
            style=move || container_style(&arranged.get())
        >
            {children()}
        </div>
    }
}

/// Calls `schedule` on every notification from `trigger` after the first; mount is covered by
/// the node ref load.
fn install_relayout_trigger<F>(trigger: Signal<usize>, schedule: F)
where
    F: Fn() + 'static,
{
    create_effect(move |previous: Option<()>| {
        trigger.track();
        if previous.is_some() {
            schedule();
        }
    });
}

fn container_style(arrangement: &FlowArrangement) -> String {
    if arrangement.row_count == 0 {
        "position: relative;".to_string()
    } else {
        format!("position: relative; height: {}px;", arrangement.height)
    }
}

fn placement_transform(placement: Point) -> String {
    format!("translate({}px, {}px)", placement.x, placement.y)
}

fn child_elements(container: &web_sys::HtmlElement) -> Vec<web_sys::HtmlElement> {
    let children = container.children();
    (0..children.length())
        .filter_map(|index| children.item(index))
        .filter_map(|element| match element.dyn_into::<web_sys::HtmlElement>() {
            Ok(element) => Some(element),
            Err(element) => {
                logging::warn!(
                    "flow layout cannot measure <{}>; child left in place",
                    element.tag_name().to_lowercase()
                );
                None
            }
        })
        .collect()
}

fn arrange_children(
    container: &web_sys::HtmlElement,
    engine: interaction_core::FlowLayout,
) -> FlowArrangement {
    let items = child_elements(container);

    // Pull children out of normal flow first so they report their intrinsic size.
    for item in &items {
        let style = item.style();
        let _ = style.set_property("position", "absolute");
        let _ = style.set_property("left", "0");
        let _ = style.set_property("top", "0");
    }

    let sizes: Vec<Size> = items
        .iter()
        .map(|item| {
            Size::new(
                f64::from(item.offset_width()),
                f64::from(item.offset_height()),
            )
        })
        .collect();
    let available_width = f64::from(container.client_width()).max(0.0);
    let arrangement = engine.arrange(&sizes, available_width);

    for (item, placement) in items.iter().zip(&arrangement.placements) {
        let _ = item
            .style()
            .set_property("transform", &placement_transform(*placement));
    }

    arrangement
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn relayout_trigger_schedules_on_change_but_not_on_mount() {
        let _ = create_runtime();
        let revision = create_rw_signal(0_usize);
        let scheduled = Rc::new(Cell::new(0));

        let counter = Rc::clone(&scheduled);
        install_relayout_trigger(revision.into(), move || counter.set(counter.get() + 1));
        assert_eq!(scheduled.get(), 0);

        revision.set(1);
        revision.set(2);
        assert_eq!(scheduled.get(), 2);
    }

    #[test]
    fn empty_arrangement_leaves_height_to_content() {
        assert_eq!(
            container_style(&FlowArrangement::default()),
            "position: relative;"
        );
    }

    #[test]
    fn arranged_height_becomes_container_height() {
        let arrangement = interaction_core::FlowLayout::new(10.0)
            .arrange(&[(50.0, 24.0), (50.0, 24.0), (50.0, 24.0)], 120.0);

        assert_eq!(
            container_style(&arrangement),
            "position: relative; height: 58px;"
        );
        assert_eq!(
            placement_transform(arrangement.placements[2]),
            "translate(0px, 34px)"
        );
    }
}
