//! Generic collection table driven by `Resource::COLUMNS` and `cells()`.

use leptos::prelude::*;

use crate::resource::{Cell, Resource};
use crate::state::screen::{ListStatus, ScreenState};
use crate::util::format::status_label;

#[cfg(test)]
#[path = "data_table_test.rs"]
mod data_table_test;

/// Current cells for the row keyed by `id`, empty once the record is gone.
pub(crate) fn row_cells<R: Resource>(items: &[R], id: &str) -> Vec<Cell> {
    items.iter().find(|r| r.id() == id).map(R::cells).unwrap_or_default()
}

fn render_cell(cell: Cell) -> AnyView {
    match cell {
        Cell::Text(text) => view! { <td>{text}</td> }.into_any(),
        Cell::Status(active) => {
            let class = if active { "badge badge--active" } else { "badge badge--inactive" };
            view! {
                <td>
                    <span class=class>{status_label(active)}</span>
                </td>
            }
            .into_any()
        }
        Cell::Image(Some(src)) => view! {
            <td>
                <img class="data-table__thumb" src=src alt="" loading="lazy"/>
            </td>
        }
        .into_any(),
        Cell::Image(None) => view! { <td class="data-table__empty">"No image"</td> }.into_any(),
        Cell::Link(href) if href.is_empty() => view! { <td>"\u{2014}"</td> }.into_any(),
        Cell::Link(href) => {
            let text = href.clone();
            view! {
                <td>
                    <a href=href target="_blank" rel="noopener noreferrer">
                        {text}
                    </a>
                </td>
            }
            .into_any()
        }
    }
}

/// Table of the screen's rows with optional edit/delete actions.
pub fn data_table<R: Resource>(
    screen: RwSignal<ScreenState<R>>,
    on_edit: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let items = Memo::new(move |_| screen.with(|s| s.items.clone()));
    let status = Memo::new(move |_| screen.with(|s| s.status));
    let caps = R::CAPABILITIES;
    let span = R::COLUMNS.len() + usize::from(caps.has_row_actions());

    view! {
        <div class="data-table__wrap">
            <table class="data-table">
                <thead>
                    <tr>
                        {R::COLUMNS.iter().map(|label| view! { <th>{*label}</th> }).collect::<Vec<_>>()}
                        {caps.has_row_actions().then(|| view! { <th>"Actions"</th> })}
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || items.with(Vec::is_empty)>
                        <tr>
                            <td class="data-table__empty" colspan=span.to_string()>
                                {move || match status.get() {
                                    ListStatus::Idle | ListStatus::Loading => "Loading...",
                                    ListStatus::Errored => "Could not load records.",
                                    ListStatus::Loaded => "No records found.",
                                }}
                            </td>
                        </tr>
                    </Show>
                    <For
                        each=move || items.get()
                        key=|record| record.id().to_owned()
                        children=move |record| {
                            let id = record.id().to_owned();
                            // Keyed by id only: refetched field values flow in through this memo.
                            let row_id = id.clone();
                            let cells = Memo::new(move |_| items.with(|all| row_cells(all, &row_id)));
                            let actions = caps.has_row_actions().then(|| row_actions(screen, id, on_edit, on_delete));
                            view! {
                                <tr>
                                    {move || cells.get().into_iter().map(render_cell).collect::<Vec<_>>()}
                                    {actions}
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

fn row_actions<R: Resource>(
    screen: RwSignal<ScreenState<R>>,
    id: String,
    on_edit: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let caps = R::CAPABILITIES;
    let edit_id = id.clone();
    let delete_id = id.clone();
    let deleting_this = move || screen.with(|s| s.deleting.as_deref() == Some(id.as_str()));
    let any_deleting = move || screen.with(|s| s.deleting.is_some());

    view! {
        <td class="data-table__actions">
            {caps.edit.then(|| {
                view! {
                    <button class="btn" on:click=move |_| on_edit.run(edit_id.clone())>
                        "Edit"
                    </button>
                }
            })}
            {caps.delete.then(|| {
                view! {
                    <button
                        class="btn btn--danger"
                        disabled=any_deleting
                        on:click=move |_| on_delete.run(delete_id.clone())
                    >
                        {move || if deleting_this() { "Deleting..." } else { "Delete" }}
                    </button>
                }
            })}
        </td>
    }
}
