//! Todos Frontend App
//!
//! Input box on top, the list with its "mark all" checkbox, stats below.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NewTodoForm, StatsFooter, TodoListView};
use crate::store::{store_mark_all, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::load());
    provide_context(store);

    let stats = Memo::new(move |_| store.session().read().list().stats());
    let all_done = Memo::new(move |_| store.session().read().list().all_done());

    view! {
        <div id="todoapp">
            <div class="title">
                <h1>"Todos"</h1>
            </div>

            <div class="content">
                <NewTodoForm />

                <Show when=move || (stats.get().total > 0)>
                    <div id="todos">
                        <input
                            id="check-all"
                            class="mark-all-done"
                            type="checkbox"
                            prop:checked=move || all_done.get()
                            on:change=move |ev| store_mark_all(&store, event_target_checked(&ev))
                        />
                        <label for="check-all">"Mark all as complete"</label>
                        <TodoListView />
                    </div>
                </Show>
            </div>

            <StatsFooter stats=stats />
        </div>
    }
}
