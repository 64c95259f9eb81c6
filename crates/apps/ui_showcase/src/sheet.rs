use interaction_core::{Detent, InteractionConfig};
use leptos::*;
use system_ui::prelude::*;

use crate::inspector_json;

fn detent_label(detent: Detent) -> String {
    format!("{:.0}%", detent.ratio() * 100.0)
}

#[component]
/// Bottom sheet snapping between the configured detents, with a live state inspector.
pub fn SheetShowcase(config: InteractionConfig) -> impl IntoView {
    let detent_summary = config
        .sheet
        .detents
        .iter()
        .map(detent_label)
        .collect::<Vec<_>>()
        .join(" / ");
    let sheet = BottomSheetController::new(config.sheet);
    let last_event = create_rw_signal(String::from("Sheet hidden"));

    let on_settle = Callback::new(move |detent: Detent| {
        logging::log!("sheet settled at {}", detent_label(detent));
        last_event.set(format!("Settled at {}", detent_label(detent)));
    });
    let on_dismiss = Callback::new(move |()| {
        logging::log!("sheet dismissed");
        last_event.set(String::from("Dismissed"));
    });

    view! {
        <Panel aria_label="Bottom sheet demo" ui_slot="sheet-demo">
            <Stack gap=LayoutGap::Md>
                <Heading role=TextRole::Title>"Bottom sheet"</Heading>
                <Text tone=TextTone::Secondary>
                    "Drag the sheet between detents. A fast downward flick or a backdrop tap dismisses it."
                </Text>
                <Cluster gap=LayoutGap::Sm>
                    <Button
                        variant=ButtonVariant::Primary
                        disabled=sheet.is_presented()
                        on_click=Callback::new(move |_| sheet.present())
                    >
                        "Present sheet"
                    </Button>
                    <Badge>{format!("Detents {detent_summary}")}</Badge>
                </Cluster>
                <Text role=TextRole::Caption>{move || last_event.get()}</Text>
                <pre data-ui-slot="state-inspector">
                    {move || sheet.state.with(|state| inspector_json(state, "sheet"))}
                </pre>
            </Stack>
        </Panel>
        <BottomSheet
            controller=sheet
            motion=config.motion.sheet_settle
            on_settle=on_settle
            on_dismiss=on_dismiss
            aria_label="Demo sheet"
        >
            <Stack gap=LayoutGap::Md padding=LayoutPadding::Md>
                <Heading role=TextRole::Title>
                    {move || format!("Resting at {}", detent_label(sheet.current_detent().get()))}
                </Heading>
                <Text tone=TextTone::Secondary>
                    {move || format!("{:.0}px tall", sheet.displayed_height().get())}
                </Text>
                <Cluster gap=LayoutGap::Sm>
                    <Button on_click=Callback::new(move |_| sheet.dismiss())>"Done"</Button>
                </Cluster>
            </Stack>
        </BottomSheet>
    }
}
