//! Todo Tab Component
//!
//! Todo list persisted to local storage.

use leptos::prelude::*;

use crate::context::use_workbench;

#[component]
pub fn TodoTab() -> impl IntoView {
    let ctx = use_workbench();
    let (new_todo, set_new_todo) = signal(String::new());

    let add_todo = move || {
        let mut input = new_todo.get_untracked();
        if let Some(Some(id)) = ctx.apply("add todo", |b| b.take_todo_input(&mut input)) {
            tracing::debug!(id, "todo added");
        }
        set_new_todo.set(input);
    };

    view! {
        <div>
            <h3>"Todo List (with Local Storage)"</h3>
            <div class="input-row">
                <input
                    type="text"
                    placeholder="Add a new todo..."
                    prop:value=move || new_todo.get()
                    on:input=move |ev| set_new_todo.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            add_todo();
                        }
                    }
                />
                <button class="btn btn-green" on:click=move |_| add_todo()>"Add"</button>
            </div>

            <div class="todo-list">
                <For
                    each=move || ctx.bench.with(|b| b.todos().to_vec())
                    key=|todo| (todo.id, todo.completed)
                    children=move |todo| {
                        let id = todo.id;
                        view! {
                            <div class="todo-item">
                                <input
                                    type="checkbox"
                                    checked=todo.completed
                                    on:change=move |_| {
                                        ctx.apply("toggle todo", |b| b.toggle_todo(id));
                                    }
                                />
                                <span class=if todo.completed { "todo-text done" } else { "todo-text" }>
                                    {todo.text}
                                </span>
                                <button
                                    class="todo-delete"
                                    on:click=move |_| {
                                        ctx.apply("delete todo", |b| b.delete_todo(id));
                                    }
                                >
                                    "Delete"
                                </button>
                            </div>
                        }
                    }
                />
                <Show when=move || ctx.bench.with(|b| b.todos().is_empty())>
                    <p class="empty-hint">"No todos yet. Add one above!"</p>
                </Show>
            </div>
        </div>
    }
}
