use interaction_core::InteractionConfig;
use leptos::*;
use system_ui::prelude::*;

const TAGS: &[&str] = &[
    "rust",
    "leptos",
    "wasm",
    "pointer events",
    "gestures",
    "flow layout",
    "swipe actions",
    "bottom sheet",
    "detents",
    "spring curves",
    "accessibility",
    "reduced motion",
    "touch",
    "state machines",
];

const EXTRA_TAGS: &[&str] = &["serde", "thiserror", "toml", "web-sys", "springs"];

/// Next extra tag to append, or `None` once every extra is shown.
fn next_extra_tag(shown: usize) -> Option<&'static str> {
    shown.checked_sub(TAGS.len()).and_then(|index| EXTRA_TAGS.get(index).copied())
}

#[component]
/// Tag cloud wrapped by [`FlowLayout`].
pub fn FlowShowcase(config: InteractionConfig) -> impl IntoView {
    let tags = create_rw_signal(TAGS.to_vec());
    let tag_count = Signal::derive(move || tags.with(Vec::len));

    let add_tag = Callback::new(move |_| {
        tags.update(|tags| {
            if let Some(tag) = next_extra_tag(tags.len()) {
                tags.push(tag);
            }
        });
    });

    view! {
        <Panel aria_label="Flow layout demo" ui_slot="flow-demo">
            <Stack gap=LayoutGap::Md>
                <Heading role=TextRole::Title>"Flow layout"</Heading>
                <Text tone=TextTone::Secondary>
                    "Chips fill each row left to right and wrap when the next one would overflow. Resize the window to reflow."
                </Text>
                <Cluster gap=LayoutGap::Sm>
                    <Button
                        disabled=Signal::derive(move || next_extra_tag(tag_count.get()).is_none())
                        on_click=add_tag
                    >
                        "Add tag"
                    </Button>
                    <Button
                        variant=ButtonVariant::Quiet
                        on_click=Callback::new(move |_| tags.set(TAGS.to_vec()))
                    >
                        "Reset tags"
                    </Button>
                </Cluster>
                <FlowLayout spacing=config.flow.spacing relayout_on=tag_count aria_label="Tags">
                    {move || {
                        tags.get()
                            .into_iter()
                            .map(|tag| view! { <Badge tone=TextTone::Accent>{tag}</Badge> })
                            .collect_view()
                    }}
                </FlowLayout>
            </Stack>
        </Panel>
    }
}
