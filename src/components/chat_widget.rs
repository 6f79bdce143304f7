//! Floating chat assistant: a toggle button and an overlay panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns one `WidgetState` signal for its lifetime. All mutations go through
//! `ChatController`; the view only reads the signal. On unmount the store is
//! marked dead so a reply still in flight is discarded.

use std::rc::Rc;

use leptos::prelude::*;

use crate::config::ChatConfig;
use crate::controller::{ChatController, SignalStore, WidgetStore};
use crate::net::answer::HttpAnswerService;
use crate::state::message::{ConversationMessage, Origin};
use crate::state::widget::WidgetState;
use crate::util::keys::KeyPress;
use crate::util::markdown::render_markdown_html;
use crate::util::theme::ColorMode;

/// Chat widget with transcript, typing indicator, and draft input.
///
/// Both properties are optional; the host normally passes only the colour
/// mode it has already resolved.
#[component]
pub fn ChatWidget(
    #[prop(optional)] config: ChatConfig,
    #[prop(optional, into)] color_mode: Option<Signal<ColorMode>>,
) -> impl IntoView {
    let config = config.validated_or_default();
    let state = RwSignal::new(WidgetState::new(&config.greeting));
    let store = SignalStore::new(state);
    let service = Rc::new(HttpAnswerService::from_config(&config));
    let controller = StoredValue::new_local(ChatController::new(store.clone(), service, config.fallback_message.as_str()));

    on_cleanup(move || store.unmount());

    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = state.with(WidgetState::scroll_seq);

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let send = move || {
        let pending = controller.with_value(ChatController::submit);
        leptos::task::spawn_local(async move {
            let _ = pending.await;
        });
    };

    let on_toggle = move |_| {
        controller.with_value(ChatController::toggle_visibility);
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let press = KeyPress::from(&ev);
        if let Some(pending) = controller.with_value(|c| c.submit_on_enter(&press)) {
            ev.prevent_default();
            leptos::task::spawn_local(async move {
                let _ = pending.await;
            });
        }
    };

    let is_open = move || state.with(WidgetState::is_visible);
    let in_flight = move || state.with(WidgetState::in_flight);
    let can_send = move || state.with(WidgetState::can_submit);
    let is_dark = move || color_mode.is_some_and(|mode| mode.get().is_dark());

    let title = config.title;
    let placeholder = config.placeholder;

    view! {
        <div class="chat-widget" class:chat-widget--dark=is_dark>
            <button class="chat-widget__toggle" on:click=on_toggle aria-label="Open chat">
                <span class="chat-widget__icon">"💬"</span>
            </button>

            <Show when=is_open>
                <div class="chat-widget__panel">
                    <div class="chat-widget__header">
                        <h3>{title.clone()}</h3>
                        <button class="chat-widget__close" on:click=on_toggle aria-label="Close chat">
                            "×"
                        </button>
                    </div>

                    <div class="chat-widget__messages" node_ref=messages_ref>
                        {move || {
                            state.with(|s| s.transcript().iter().map(render_message).collect::<Vec<_>>())
                        }}

                        {move || {
                            in_flight()
                                .then(|| {
                                    view! {
                                        <div class="chat-widget__message chat-widget__message--assistant">
                                            <span class="chat-widget__typing">"Typing..."</span>
                                        </div>
                                    }
                                })
                        }}
                    </div>

                    <div class="chat-widget__input-row">
                        <textarea
                            class="chat-widget__input"
                            rows="1"
                            placeholder=placeholder.clone()
                            disabled=in_flight
                            prop:value=move || state.with(|s| s.draft().to_owned())
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                controller.with_value(|c| c.update_draft(text));
                            }
                            on:keydown=on_keydown
                        ></textarea>
                        <button
                            class="btn btn--primary chat-widget__send"
                            on:click=move |_| send()
                            disabled=move || !can_send()
                            aria-label="Send message"
                        >
                            "Send"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}

fn render_message(message: &ConversationMessage) -> AnyView {
    let class = format!("chat-widget__message chat-widget__message--{}", message.origin().css_modifier());
    let body = match message.origin() {
        Origin::Assistant => {
            let rendered = render_markdown_html(message.text());
            view! { <div class="chat-widget__text chat-widget__markdown" inner_html=rendered></div> }.into_any()
        }
        Origin::User => {
            let text = message.text().to_owned();
            view! { <div class="chat-widget__text">{text}</div> }.into_any()
        }
    };
    view! { <div class=class>{body}</div> }.into_any()
}
