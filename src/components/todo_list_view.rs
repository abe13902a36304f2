//! Todo List View Component
//!
//! Renders every item of the session in order.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoListView() -> impl IntoView {
    let store = use_app_store();

    let items = move || store.session().read().list().items().to_vec();

    view! {
        <ul id="todo-list">
            <For
                each=items
                key=|item| {
                    // Every field a row displays, so any change re-renders that row
                    (item.id, item.title.clone(), item.done, item.task_info.clone())
                }
                children=move |item| view! {
                    <li>
                        <TodoItem item=item />
                    </li>
                }
            />
        </ul>
    }
}
