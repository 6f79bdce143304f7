//! Root application component and the textbook page layout.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::chat_widget::ChatWidget;
use crate::util::theme::{ColorMode, read_preference};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/chat-widget.css"/>
        <Title text="Physical AI & Humanoid Robotics"/>

        <TextbookLayout>
            <main class="textbook-layout__content"></main>
        </TextbookLayout>
    }
}

/// Page layout wrapping the textbook content. Mounts exactly one chat
/// widget per page.
///
/// The colour mode is resolved here, after hydration, and passed down; the
/// widget never reads it from the page itself.
#[component]
pub fn TextbookLayout(children: Children) -> impl IntoView {
    let color_mode = RwSignal::new(ColorMode::default());

    // Effects only run in the browser, so SSR and hydration agree on light.
    Effect::new(move || color_mode.set(read_preference()));

    view! {
        <div class="textbook-layout">
            {children()}
            <ChatWidget color_mode=color_mode/>
        </div>
    }
}
