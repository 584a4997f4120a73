//! Form controls for the edit/create modal, one per `FieldKind`.
//!
//! DESIGN
//! ======
//! Controls read from and write to the draft inside `ScreenState` directly,
//! so the modal has no local copy to keep in sync. Every control is disabled
//! while the draft is submitting.

#[cfg(test)]
#[path = "field_input_test.rs"]
mod field_input_test;

use leptos::prelude::*;

use crate::net::types::EventRecord;
use crate::resource::draft::Draft;
use crate::resource::{FieldKind, FieldSpec, Resource, RowColumn, RowInput};
use crate::state::screen::ScreenState;
use crate::util::upload::{read_selected_file, revoke_previews};

/// Entry of the event-reference select.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventOption {
    pub value: String,
    pub label: String,
}

/// Select options for event-reference fields, active events first.
#[must_use]
pub fn event_options(events: &[EventRecord]) -> Vec<EventOption> {
    let mut options: Vec<EventOption> = events
        .iter()
        .filter(|e| e.is_active)
        .chain(events.iter().filter(|e| !e.is_active))
        .map(|e| EventOption {
            value: e.id.clone(),
            label: if e.title.trim().is_empty() { e.id.clone() } else { e.title.clone() },
        })
        .collect();
    options.dedup_by(|a, b| a.value == b.value);
    options
}

fn input_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Email => "email",
        FieldKind::Date => "date",
        _ => "text",
    }
}

fn row_input_type(input: RowInput) -> &'static str {
    match input {
        RowInput::Date => "date",
        RowInput::Text | RowInput::Number => "text",
    }
}

// =============================================================
// Draft access
// =============================================================

fn read_text<R: Resource>(screen: RwSignal<ScreenState<R>>, key: &str) -> String {
    screen.with(|s| s.modal.draft().map(|d| d.text(key).to_owned()).unwrap_or_default())
}

fn read_flag<R: Resource>(screen: RwSignal<ScreenState<R>>, key: &str) -> bool {
    screen.with(|s| s.modal.draft().is_some_and(|d| d.flag(key)))
}

fn read_cell<R: Resource>(screen: RwSignal<ScreenState<R>>, key: &str, index: usize, column: &str) -> String {
    screen.with(|s| {
        s.modal
            .draft()
            .and_then(|d| d.rows(key).get(index).and_then(|row| row.get(column)).cloned())
            .unwrap_or_default()
    })
}

fn edit<R: Resource>(screen: RwSignal<ScreenState<R>>, apply: impl FnOnce(&mut Draft)) {
    screen.update(|s| {
        if let Some(draft) = s.draft_mut() {
            apply(draft);
        }
    });
}

/// Revoke preview URLs the screen no longer displays.
pub fn release_previews<R: Resource>(screen: RwSignal<ScreenState<R>>) {
    if let Some(urls) = screen.try_update(ScreenState::take_released_previews) {
        revoke_previews(&urls);
    }
}

fn locked<R: Resource>(screen: RwSignal<ScreenState<R>>) -> bool {
    screen.with(|s| s.modal.is_submitting())
}

// =============================================================
// Controls
// =============================================================

/// Labeled control for one schema field.
pub fn field_input<R: Resource>(
    field: &'static FieldSpec,
    screen: RwSignal<ScreenState<R>>,
    events: RwSignal<Vec<EventOption>>,
) -> AnyView {
    let key = field.key;
    let control = match field.kind {
        FieldKind::Text | FieldKind::Email | FieldKind::Number | FieldKind::Date => view! {
            <input
                class="dialog__input"
                type=input_type(field.kind)
                inputmode=if matches!(field.kind, FieldKind::Number) { "decimal" } else { "text" }
                prop:value=move || read_text(screen, key)
                on:input=move |ev| edit(screen, |d| d.set_text(key, event_target_value(&ev)))
                disabled=move || locked(screen)
            />
        }
        .into_any(),
        FieldKind::LongText => view! {
            <textarea
                class="dialog__input dialog__input--long"
                rows="6"
                prop:value=move || read_text(screen, key)
                on:input=move |ev| edit(screen, |d| d.set_text(key, event_target_value(&ev)))
                disabled=move || locked(screen)
            ></textarea>
        }
        .into_any(),
        FieldKind::Active => active_radios(key, screen).into_any(),
        FieldKind::Choice(options) => view! {
            <select
                class="dialog__input"
                on:change=move |ev| edit(screen, |d| d.set_text(key, event_target_value(&ev)))
                disabled=move || locked(screen)
            >
                <option value="" disabled=true selected=move || read_text(screen, key).is_empty()>
                    "Select..."
                </option>
                {options
                    .iter()
                    .map(|(value, label)| {
                        let value = *value;
                        view! {
                            <option value=value selected=move || read_text(screen, key) == value>
                                {*label}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
        }
        .into_any(),
        FieldKind::EventRef => view! {
            <select
                class="dialog__input"
                on:change=move |ev| edit(screen, |d| d.set_text(key, event_target_value(&ev)))
                disabled=move || locked(screen)
            >
                <option value="" disabled=true selected=move || read_text(screen, key).is_empty()>
                    "Select an event"
                </option>
                {move || {
                    events
                        .get()
                        .into_iter()
                        .map(|option| {
                            let value = option.value.clone();
                            view! {
                                <option value=option.value selected=move || read_text(screen, key) == value>
                                    {option.label}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </select>
        }
        .into_any(),
        FieldKind::Image => image_picker(key, screen).into_any(),
        FieldKind::Rows(columns) => row_group(key, columns, screen).into_any(),
    };

    view! {
        <div class="dialog__field">
            <span class="dialog__label">{field.label}</span>
            {control}
        </div>
    }
    .into_any()
}

fn active_radios<R: Resource>(key: &'static str, screen: RwSignal<ScreenState<R>>) -> impl IntoView {
    view! {
        <div class="dialog__radios">
            <label>
                <input
                    type="radio"
                    name=key
                    prop:checked=move || read_flag(screen, key)
                    on:change=move |_| edit(screen, |d| d.set_flag(key, true))
                    disabled=move || locked(screen)
                />
                " Active"
            </label>
            <label>
                <input
                    type="radio"
                    name=key
                    prop:checked=move || !read_flag(screen, key)
                    on:change=move |_| edit(screen, |d| d.set_flag(key, false))
                    disabled=move || locked(screen)
                />
                " Inactive"
            </label>
        </div>
    }
}

fn image_picker<R: Resource>(key: &'static str, screen: RwSignal<ScreenState<R>>) -> impl IntoView {
    let preview = Memo::new(move |_| screen.with(|s| s.modal.draft().and_then(|d| d.image_preview(key))));

    view! {
        <div class="dialog__image">
            {move || {
                preview.get().map(|src| view! { <img class="dialog__preview" src=src alt="Preview"/> })
            }}
            <input
                type="file"
                accept="image/*"
                on:change=move |ev| {
                    read_selected_file(
                        &ev,
                        move |upload, url| {
                            screen.update(|s| s.attach_upload(key, upload, url));
                            release_previews(screen);
                        },
                    );
                }
                disabled=move || locked(screen)
            />
        </div>
    }
}

fn row_group<R: Resource>(
    key: &'static str,
    columns: &'static [RowColumn],
    screen: RwSignal<ScreenState<R>>,
) -> impl IntoView {
    let count = Memo::new(move |_| screen.with(|s| s.modal.draft().map_or(0, |d| d.rows(key).len())));

    view! {
        <div class="rows-field">
            {move || {
                (0..count.get())
                    .map(|index| {
                        view! {
                            <div class="rows-field__row">
                                {columns
                                    .iter()
                                    .map(|column| {
                                        let col = column.key;
                                        view! {
                                            <input
                                                class="dialog__input"
                                                type=row_input_type(column.input)
                                                placeholder=column.label
                                                prop:value=move || read_cell(screen, key, index, col)
                                                on:input=move |ev| {
                                                    edit(
                                                        screen,
                                                        |d| d.set_row_cell(key, index, col, event_target_value(&ev)),
                                                    );
                                                }
                                                disabled=move || locked(screen)
                                            />
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                                <button
                                    type="button"
                                    class="btn btn--danger"
                                    on:click=move |_| edit(screen, |d| d.remove_row(key, index))
                                    disabled=move || locked(screen)
                                >
                                    "Remove"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
            <button
                type="button"
                class="btn"
                on:click=move |_| edit(screen, |d| d.add_row(key, columns))
                disabled=move || locked(screen)
            >
                "+ Add"
            </button>
        </div>
    }
}
