use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use system_ui::prelude::*;
use ui_showcase::{showcase_config, FlowShowcase, SheetShowcase, SwipeShowcase, UiShowcaseApp};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Interaction primitives" />
        <Meta
            name="description"
            content="Flow layout, swipeable rows, and detent bottom sheets built on headless state machines."
        />

        <Router>
            <main class="site-root">
                <ShowcaseNav />
                <Routes>
                    <Route path="" view=AllScreens />
                    <Route path="/flow" view=FlowRoute />
                    <Route path="/swipe" view=SwipeRoute />
                    <Route path="/sheet" view=SheetRoute />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn ShowcaseNav() -> impl IntoView {
    view! {
        <nav class="site-nav" aria-label="Showcase screens">
            <Cluster gap=LayoutGap::Sm padding=LayoutPadding::Sm>
                <A href="/">"All"</A>
                <A href="/flow">"Flow layout"</A>
                <A href="/swipe">"Swipeable rows"</A>
                <A href="/sheet">"Bottom sheet"</A>
            </Cluster>
        </nav>
    }
}

#[component]
fn AllScreens() -> impl IntoView {
    view! { <UiShowcaseApp config=showcase_config() /> }
}

#[component]
fn FlowRoute() -> impl IntoView {
    view! { <FlowShowcase config=showcase_config() /> }
}

#[component]
fn SwipeRoute() -> impl IntoView {
    view! { <SwipeShowcase config=showcase_config() /> }
}

#[component]
fn SheetRoute() -> impl IntoView {
    view! { <SheetShowcase config=showcase_config() /> }
}
