//! Stats Footer Component
//!
//! "N items left" and the "Clear N completed items" link.

use leptos::prelude::*;
use todos_core::{pluralize, Stats};

use crate::store::{store_clear_completed, use_app_store};

#[component]
pub fn StatsFooter(stats: Memo<Stats>) -> impl IntoView {
    let store = use_app_store();

    let remaining = move || stats.get().remaining;
    let done = move || stats.get().done;

    view! {
        <Show when=move || (stats.get().total > 0)>
            <div id="todo-stats">
                <span class="todo-count">
                    <span class="number">{remaining}</span>
                    " "
                    <span class="word">{move || pluralize(remaining(), "item")}</span>
                    " left."
                </span>
                <Show when=move || (done() > 0)>
                    <span class="todo-clear">
                        <a
                            href="#"
                            on:click=move |ev| {
                                ev.prevent_default();
                                store_clear_completed(&store);
                            }
                        >
                            "Clear "
                            <span class="number-done">{done}</span>
                            " completed "
                            <span class="word-done">{move || pluralize(done(), "item")}</span>
                        </a>
                    </span>
                </Show>
            </div>
        </Show>
    }
}
