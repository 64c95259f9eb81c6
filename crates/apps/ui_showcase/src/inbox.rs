use std::time::Duration;

use interaction_core::{InteractionConfig, RowPosition};
use leptos::*;
use serde::Serialize;
use system_ui::prelude::*;

use crate::inspector_json;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct InboxMessage {
    id: u32,
    sender: String,
    subject: String,
    read: bool,
    flagged: bool,
}

impl InboxMessage {
    fn new(id: u32, sender: &str, subject: &str) -> Self {
        Self {
            id,
            sender: sender.to_string(),
            subject: subject.to_string(),
            read: false,
            flagged: false,
        }
    }
}

fn sample_inbox() -> Vec<InboxMessage> {
    vec![
        InboxMessage::new(1, "Build bot", "Nightly wasm bundle is ready"),
        InboxMessage::new(2, "Design review", "Sheet detent spacing feedback"),
        InboxMessage::new(3, "Release notes", "Swipe threshold tuned to 90px"),
        InboxMessage::new(4, "Accessibility", "Reduced motion audit results"),
        InboxMessage::new(5, "Standup", "Agenda for Thursday"),
    ]
}

fn toggle(
    messages: &mut [InboxMessage],
    id: u32,
    field: impl FnOnce(&mut InboxMessage) -> &mut bool,
) {
    if let Some(message) = messages.iter_mut().find(|message| message.id == id) {
        let value = field(message);
        *value = !*value;
    }
}

fn is_open(position: RowPosition) -> bool {
    matches!(position, RowPosition::LeadingOpen | RowPosition::TrailingOpen)
}

#[component]
/// Inbox list whose rows reveal read, flag, and archive actions.
pub fn SwipeShowcase(config: InteractionConfig) -> impl IntoView {
    let messages = create_rw_signal(sample_inbox());
    let single_open = create_rw_signal(true);
    let rows = store_value(Vec::<(u32, SwipeRowController)>::new());
    let swipe = config.swipe;
    let row_motion = config.motion.row_settle;

    let close_other_rows = move |opened: u32| {
        rows.with_value(|rows| {
            for (id, controller) in rows {
                if *id != opened && controller.position().get_untracked() != RowPosition::Closed {
                    controller.reset();
                }
            }
        });
    };

    let render_row = move |message: InboxMessage| {
        let InboxMessage {
            id,
            sender,
            subject,
            ..
        } = message;
        let row_label = format!("Message from {sender}");
        let controller = SwipeRowController::new(swipe);
        rows.update_value(|rows| rows.push((id, controller)));
        on_cleanup(move || rows.update_value(|rows| rows.retain(|(row_id, _)| *row_id != id)));

        let leading = vec![SwipeAction::new("Read", ButtonVariant::Accent, move || {
            logging::log!("inbox message {id}: toggle read");
            messages.update(|all| toggle(all, id, |message| &mut message.read));
        })];
        let trailing = vec![
            SwipeAction::new("Flag", ButtonVariant::Warning, move || {
                logging::log!("inbox message {id}: toggle flag");
                messages.update(|all| toggle(all, id, |message| &mut message.flagged));
            }),
            SwipeAction::new("Archive", ButtonVariant::Danger, move || {
                logging::log!("inbox message {id}: archive");
                // Removal waits for the close spring, after the row's settle callback.
                set_timeout(
                    move || messages.update(|all| all.retain(|message| message.id != id)),
                    Duration::from_millis(u64::from(row_motion.duration_ms())),
                );
            }),
        ];
        let on_settled = Callback::new(move |position: RowPosition| {
            if single_open.get_untracked() && is_open(position) {
                close_other_rows(id);
            }
        });

        let read = move || {
            messages.with(|all| all.iter().any(|message| message.id == id && message.read))
        };
        let flagged = move || {
            messages.with(|all| all.iter().any(|message| message.id == id && message.flagged))
        };

        view! {
            <SwipeableRow
                controller=controller
                leading_actions=leading
                trailing_actions=trailing
                motion=row_motion
                on_settled=on_settled
                layout_class="showcase-inbox-row"
                aria_label=row_label
            >
                <Stack gap=LayoutGap::Sm padding=LayoutPadding::Sm>
                    <Cluster gap=LayoutGap::Sm justify=LayoutJustify::Between>
                        <Text role=TextRole::Label>{sender}</Text>
                        {move || flagged().then(|| view! { <Badge tone=TextTone::Warning>"flagged"</Badge> })}
                    </Cluster>
                    {move || {
                        let tone = if read() { TextTone::Secondary } else { TextTone::Primary };
                        let subject = subject.clone();
                        view! { <Text tone=tone>{subject}</Text> }
                    }}
                </Stack>
            </SwipeableRow>
        }
    };

    view! {
        <Panel aria_label="Swipeable row demo" ui_slot="swipe-demo">
            <Stack gap=LayoutGap::Md>
                <Heading role=TextRole::Title>"Swipeable rows"</Heading>
                <Text tone=TextTone::Secondary>
                    "Drag a row right to mark it read or left to flag or archive. Short drags spring back."
                </Text>
                <Cluster gap=LayoutGap::Sm>
                    <Button
                        variant=ButtonVariant::Quiet
                        selected=Signal::derive(move || single_open.get())
                        aria_pressed=Signal::derive(move || single_open.get())
                        on_click=Callback::new(move |_| single_open.update(|value| *value = !*value))
                    >
                        "One open row"
                    </Button>
                    <Button
                        on_click=Callback::new(move |_| {
                            rows.with_value(|rows| rows.iter().for_each(|(_, controller)| controller.reset()));
                        })
                    >
                        "Close all"
                    </Button>
                    <Button
                        variant=ButtonVariant::Primary
                        on_click=Callback::new(move |_| messages.set(sample_inbox()))
                    >
                        "Restore inbox"
                    </Button>
                </Cluster>
                <Stack gap=LayoutGap::None layout_class="showcase-inbox">
                    <For each=move || messages.get() key=|message| message.id children=render_row />
                </Stack>
                <pre data-ui-slot="state-inspector">
                    {move || messages.with(|all| inspector_json(all, "inbox"))}
                </pre>
            </Stack>
        </Panel>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn toggle_flips_only_the_matching_message() {
        let mut messages = sample_inbox();

        toggle(&mut messages, 2, |message| &mut message.flagged);

        let flagged: Vec<u32> = messages
            .iter()
            .filter(|message| message.flagged)
            .map(|message| message.id)
            .collect();
        assert_eq!(flagged, vec![2]);

        toggle(&mut messages, 2, |message| &mut message.flagged);
        assert!(messages.iter().all(|message| !message.flagged));
    }

    #[test]
    fn inspector_shows_message_flags() {
        let json = inspector_json(&sample_inbox()[..1], "inbox");

        assert!(json.contains("\"subject\": \"Nightly wasm bundle is ready\""));
        assert!(json.contains("\"flagged\": false"));
    }

    #[test]
    fn only_settled_open_rows_close_siblings() {
        assert!(is_open(RowPosition::LeadingOpen));
        assert!(is_open(RowPosition::TrailingOpen));
        assert!(!is_open(RowPosition::Closed));
        assert!(!is_open(RowPosition::Dragging));
    }
}
