//! New Todo Form Component
//!
//! Text box that creates a todo on Enter, with a delayed "press Enter" hint.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use todos_core::accepts_key;

use crate::store::{store_create_todo, use_app_store, AppStateStoreFields};

/// Form for creating new todos
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_app_store();
    let hint_delay = store.config().read_untracked().tooltip_delay_ms;

    let (new_text, set_new_text) = signal(String::new());
    let (show_hint, set_show_hint) = signal(false);
    // Bumped on every keystroke; a pending hint only shows if it is still current
    let (typing_ticket, set_typing_ticket) = signal(0u32);

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        if text.trim().is_empty() {
            return;
        }
        store_create_todo(&store, &text);
        set_new_text.set(String::new());
        set_show_hint.set(false);
    };

    let schedule_hint = move || {
        set_show_hint.set(false);
        set_typing_ticket.update(|n| *n = n.wrapping_add(1));
        let ticket = typing_ticket.get_untracked();
        spawn_local(async move {
            TimeoutFuture::new(hint_delay).await;
            let still_typing = typing_ticket.try_get_untracked() == Some(ticket);
            let has_text = new_text.try_with_untracked(|text| !text.is_empty()).unwrap_or(false);
            if still_typing && has_text {
                let _ = set_show_hint.try_set(true);
            }
        });
    };

    view! {
        <form id="create-todo" on:submit=create_todo>
            <input
                id="new-todo"
                type="text"
                placeholder="What needs to be done?"
                prop:value=move || new_text.get()
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if !accepts_key(&ev.key()) {
                        ev.prevent_default();
                    }
                }
                on:input=move |ev| {
                    set_new_text.set(event_target_value(&ev));
                    schedule_hint();
                }
            />
            <Show when=move || show_hint.get()>
                <span class="ui-tooltip-top">"Press Enter to save this task"</span>
            </Show>
        </form>
    }
}
