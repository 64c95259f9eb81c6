//! Demo screens for the gesture-driven interaction components.
//!
//! Each screen composes one `system_ui` component against the interaction tokens embedded from
//! `showcase.toml`: a wrapping tag cloud, a swipeable inbox list, and a detent bottom sheet.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use interaction_core::InteractionConfig;
use leptos::*;
use serde::Serialize;
use system_ui::prelude::*;

mod flow;
mod inbox;
mod sheet;

pub use flow::FlowShowcase;
pub use inbox::SwipeShowcase;
pub use sheet::SheetShowcase;

const SHOWCASE_CONFIG: &str = include_str!("../showcase.toml");

/// Interaction tokens embedded in the showcase, or library defaults when they fail to load.
pub fn showcase_config() -> InteractionConfig {
    match InteractionConfig::from_toml_str(SHOWCASE_CONFIG) {
        Ok(config) => config,
        Err(err) => {
            logging::warn!("ui showcase config rejected, using defaults: {err}");
            InteractionConfig::default()
        }
    }
}

/// Pretty JSON for the state inspectors; empty when serialization fails.
fn inspector_json<T: Serialize + ?Sized>(value: &T, label: &str) -> String {
    match serde_json::to_string_pretty(value) {
        Ok(json) => json,
        Err(err) => {
            logging::warn!("ui showcase {label} serialize failed: {err}");
            String::new()
        }
    }
}

#[component]
/// All three showcase screens on one page.
pub fn UiShowcaseApp(
    /// Tokens for every screen; defaults to [`showcase_config`].
    #[prop(optional)]
    config: Option<InteractionConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_else(showcase_config);

    view! {
        <Stack gap=LayoutGap::Lg padding=LayoutPadding::Md layout_class="showcase-root">
            <Heading role=TextRole::Title>"Interaction primitives"</Heading>
            <Text tone=TextTone::Secondary>
                "Flow layout, swipeable rows, and a detent bottom sheet driven by the same headless state machines."
            </Text>
            <FlowShowcase config=config.clone() />
            <SwipeShowcase config=config.clone() />
            <SheetShowcase config=config />
        </Stack>
    }
}

#[cfg(test)]
mod tests {
    use interaction_core::Detent;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn embedded_config_loads_all_three_detents() {
        let config = InteractionConfig::from_toml_str(SHOWCASE_CONFIG).expect("showcase config");

        assert_eq!(
            config.sheet.detents.iter().collect::<Vec<_>>(),
            vec![Detent::SMALL, Detent::MEDIUM, Detent::LARGE]
        );
        assert_eq!(config.sheet.initial_detent, Detent::MEDIUM);
        assert_eq!(config.swipe.action_width, 72.0);
        assert_eq!(config.motion.sheet_settle, SpringCurve::SMOOTH);
    }

    #[test]
    fn inspector_renders_pretty_json() {
        #[derive(Serialize)]
        struct Toggle {
            open: bool,
        }

        assert_eq!(
            inspector_json(&Toggle { open: true }, "toggle"),
            "{\n  \"open\": true\n}"
        );
    }
}
