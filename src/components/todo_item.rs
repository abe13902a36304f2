//! Todo Item Component
//!
//! One row: checkbox, title, delete control and notes line. Double-click the
//! title or notes to edit them; Enter or leaving the field saves, Escape cancels.

use leptos::html;
use leptos::prelude::*;
use log::debug;
use todos_core::{accepts_key, EditField, EditState, Item};

use crate::store::{
    store_commit_edit, store_destroy_todo, store_toggle_todo, use_app_store, AppStateStoreFields,
};

#[component]
pub fn TodoItem(item: Item) -> impl IntoView {
    let store = use_app_store();

    let id = item.id;
    let done = item.done;
    let title = item.title;
    let task_info = item.task_info;

    let edit = RwSignal::new(EditState::default());
    let title_input = NodeRef::<html::Input>::new();
    let notes_input = NodeRef::<html::Input>::new();

    // Focus the field as soon as it is shown
    Effect::new(move |_| {
        let input = match edit.get() {
            EditState::Editing { field: EditField::Title, .. } => title_input.get(),
            EditState::Editing { field: EditField::Notes, .. } => notes_input.get(),
            EditState::Viewing => None,
        };
        if let Some(input) = input {
            if let Err(e) = input.focus() {
                debug!("[ITEM] Could not focus editor for #{}: {:?}", id, e);
            }
        }
    });

    let begin = move |field: EditField| {
        let current = store.session().read_untracked().list().get(id).map(|item| match field {
            EditField::Title => item.title.clone(),
            EditField::Notes => item.task_info.clone(),
        });
        if let Some(current) = current {
            edit.update(|state| state.begin(field, &current));
        }
    };

    let commit = move || {
        if let Some(commit) = edit.try_update(|state| state.commit()).flatten() {
            store_commit_edit(&store, id, commit);
        }
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
        "Enter" => commit(),
        "Escape" => edit.update(|state| state.cancel()),
        key if !accepts_key(key) => ev.prevent_default(),
        _ => {}
    };

    let editing = move |field: EditField| edit.with(|state| state.is_editing_field(field));
    let draft = move || edit.with(|state| state.draft().unwrap_or_default().to_string());

    view! {
        <div class=move || if done { "todo done" } else { "todo" }>
            <Show
                when=move || editing(EditField::Title)
                fallback=move || view! {
                    <div class="display">
                        <input
                            class="check"
                            type="checkbox"
                            prop:checked=done
                            on:change=move |_| store_toggle_todo(&store, id)
                        />
                        <div class="todo-title" on:dblclick=move |_| begin(EditField::Title)>
                            {title.clone()}
                        </div>
                        <span class="todo-destroy" on:click=move |_| store_destroy_todo(&store, id)></span>
                    </div>
                }
            >
                <div class="edit">
                    <input
                        class="todo-input"
                        type="text"
                        node_ref=title_input
                        prop:value=draft
                        on:input=move |ev| edit.update(|state| state.set_draft(event_target_value(&ev)))
                        on:keydown=on_keydown
                        on:blur=move |_| commit()
                    />
                </div>
            </Show>

            <Show
                when=move || editing(EditField::Notes)
                fallback=move || view! {
                    <div class="todo-task-info" on:dblclick=move |_| begin(EditField::Notes)>
                        {task_info.clone()}
                    </div>
                }
            >
                <div class="edit">
                    <input
                        class="todo-notes-input"
                        type="text"
                        placeholder="Notes"
                        node_ref=notes_input
                        prop:value=draft
                        on:input=move |ev| edit.update(|state| state.set_draft(event_target_value(&ev)))
                        on:keydown=on_keydown
                        on:blur=move |_| commit()
                    />
                </div>
            </Show>
        </div>
    }
}
