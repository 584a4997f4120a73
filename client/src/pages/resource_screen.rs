//! Generic management screen shared by every entity route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routes in `entities` instantiate this with a concrete `Resource`. The page
//! owns the I/O: it drives `ScreenState` transitions, performs the requests
//! they return through `BrowserTransport`, and turns notices into toasts.
//!
//! DESIGN
//! ======
//! Every successful create or update refetches the collection. Deletes either
//! refetch or prune locally depending on `Resource::AFTER_DELETE`.

use leptos::prelude::*;

use crate::components::data_table::data_table;
use crate::components::field_input::{EventOption, event_options, field_input, release_previews};
use crate::components::layout::AdminLayout;
use crate::components::modal::Modal;
use crate::net::api::{execute, fetch_collection};
use crate::net::transport::BrowserTransport;
use crate::net::types::EventRecord;
use crate::resource::Resource;
use crate::state::auth::AuthState;
use crate::state::screen::{ListStatus, ScreenState};
use crate::state::toast::{Notice, ToastState};
use crate::util::format::capitalize;
use crate::util::task::{confirm, notify, spawn};

/// Full list/edit/delete screen for `R`.
pub fn resource_screen<R: Resource>() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let screen = RwSignal::new(ScreenState::<R>::default());
    let events = RwSignal::new(Vec::<EventOption>::new());

    let refresh = move || {
        screen.update(ScreenState::begin_load);
        spawn(async move {
            let result = fetch_collection::<R>(&BrowserTransport).await;
            if let Some(notice) = screen.try_update(|s| s.finish_load(result)).flatten() {
                notify(toasts, notice);
            }
        });
    };

    let load_events = move || {
        spawn(async move {
            match fetch_collection::<EventRecord>(&BrowserTransport).await {
                Ok(records) => {
                    events.try_set(event_options(&records));
                }
                Err(err) => {
                    log::error!("failed to fetch events: {err}");
                    notify(toasts, Notice::error("Failed to fetch events"));
                }
            }
        });
    };

    // Initial load once the session is known.
    Effect::new(move || {
        if auth.with(AuthState::is_authenticated) && screen.with_untracked(|s| s.status == ListStatus::Idle) {
            refresh();
            if R::has_event_field() {
                load_events();
            }
        }
    });

    let on_edit = Callback::new(move |id: String| {
        screen.update(|s| {
            s.open_edit(&id);
        });
    });

    let on_delete = Callback::new(move |id: String| {
        if !confirm(&ScreenState::<R>::confirm_delete_message()) {
            return;
        }
        let token = auth.with_untracked(|a| a.bearer().map(str::to_owned));
        let Some(request) = screen.try_update(|s| s.begin_delete(&id, token.as_deref())).flatten() else {
            return;
        };
        spawn(async move {
            let result = execute(&BrowserTransport, request).await;
            let Some(notice) = screen.try_update(|s| s.finish_delete(result)).flatten() else {
                return;
            };
            let reload = notice.is_success() && ScreenState::<R>::refetch_after_delete();
            notify(toasts, notice);
            if reload {
                refresh();
            }
        });
    });

    let on_submit = move || {
        let token = auth.with_untracked(|a| a.bearer().map(str::to_owned));
        let Some(started) = screen.try_update(|s| s.begin_submit(token.as_deref())).flatten() else {
            return;
        };
        let request = match started {
            Ok(request) => request,
            Err(notice) => {
                notify(toasts, notice);
                return;
            }
        };
        spawn(async move {
            let result = execute(&BrowserTransport, request).await;
            let Some(notice) = screen.try_update(|s| s.finish_submit(result)).flatten() else {
                return;
            };
            release_previews(screen);
            let reload = notice.is_success();
            notify(toasts, notice);
            if reload {
                refresh();
            }
        });
    };

    let on_close = Callback::new(move |()| {
        screen.update(ScreenState::close_modal);
        release_previews(screen);
    });
    let modal_open = Memo::new(move |_| screen.with(|s| s.modal.is_open()));
    let submitting = Memo::new(move |_| screen.with(|s| s.modal.is_submitting()));
    let modal_title = Signal::derive(move || screen.with(ScreenState::modal_title));
    // Re-rendered on mode changes only, so typing never rebuilds the inputs.
    let fields = move || {
        screen.with_untracked(|s| {
            s.modal.mode().map_or_else(Vec::new, |mode| {
                R::SCHEMA.iter().filter(|f| f.applies_to(mode)).collect::<Vec<_>>()
            })
        })
    };
    let edit_mode = Memo::new(move |_| screen.with(|s| s.modal.mode().cloned()));

    view! {
        <AdminLayout>
            <section class="resource-screen">
                <header class="resource-screen__header">
                    <h1>{R::TITLE}</h1>
                    {R::CAPABILITIES.create.then(|| {
                        view! {
                            <button
                                class="btn btn--primary"
                                on:click=move |_| {
                                    screen.update(|s| {
                                        s.open_create();
                                    });
                                }
                            >
                                {format!("New {}", capitalize(R::LABEL))}
                            </button>
                        }
                    })}
                </header>
                {data_table(screen, on_edit, on_delete)}
                <Show when=move || modal_open.get()>
                    <Modal title=modal_title on_close=on_close>
                        <form
                            class="dialog__form"
                            on:submit=move |ev| {
                                ev.prevent_default();
                                on_submit();
                            }
                        >
                            {move || {
                                edit_mode.track();
                                fields()
                                    .into_iter()
                                    .map(|field| field_input(field, screen, events))
                                    .collect::<Vec<_>>()
                            }}
                            <div class="dialog__actions">
                                <button
                                    type="button"
                                    class="btn"
                                    disabled=move || submitting.get()
                                    on:click=move |_| on_close.run(())
                                >
                                    "Cancel"
                                </button>
                                <button type="submit" class="btn btn--primary" disabled=move || submitting.get()>
                                    {move || if submitting.get() { "Saving..." } else { "Save" }}
                                </button>
                            </div>
                        </form>
                    </Modal>
                </Show>
            </section>
        </AdminLayout>
    }
}
