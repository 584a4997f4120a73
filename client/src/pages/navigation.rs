//! Navigation visibility page.

use leptos::prelude::*;

use crate::components::layout::AdminLayout;
use crate::net::api::{execute_all, fetch_collection};
use crate::net::transport::BrowserTransport;
use crate::net::types::NavItem;
use crate::state::auth::AuthState;
use crate::state::navigation::NavigationState;
use crate::state::screen::ListStatus;
use crate::state::toast::ToastState;
use crate::util::task::{notify, spawn};

/// Checklist of public navigation entries with a single "Update" action.
#[component]
pub fn NavigationPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let nav = RwSignal::new(NavigationState::default());

    Effect::new(move || {
        if auth.with(AuthState::is_authenticated) && nav.with_untracked(|n| n.status == ListStatus::Idle) {
            nav.update(NavigationState::begin_load);
            spawn(async move {
                let result = fetch_collection::<NavItem>(&BrowserTransport).await;
                if let Some(notice) = nav.try_update(|n| n.finish_load(result)).flatten() {
                    notify(toasts, notice);
                }
            });
        }
    });

    let on_save = move |_: leptos::ev::MouseEvent| {
        let token = auth.with_untracked(|a| a.bearer().map(str::to_owned));
        let Some(started) = nav.try_update(|n| n.begin_save(token.as_deref())).flatten() else {
            return;
        };
        let requests = match started {
            Ok(requests) => requests,
            Err(notice) => {
                notify(toasts, notice);
                return;
            }
        };
        spawn(async move {
            let result = execute_all(&BrowserTransport, requests).await;
            if let Some(notice) = nav.try_update(|n| n.finish_save(result)) {
                notify(toasts, notice);
            }
        });
    };

    let saving = Memo::new(move |_| nav.with(|n| n.saving));
    let items = Memo::new(move |_| nav.with(|n| n.items.clone()));

    view! {
        <AdminLayout>
            <section class="resource-screen">
                <header class="resource-screen__header">
                    <h1>"Navigation"</h1>
                </header>
                <ul class="nav-toggles">
                    <For
                        each=move || items.get()
                        key=|item| item.id.clone()
                        children=move |item| {
                            let id = item.id.clone();
                            let checked_id = item.id.clone();
                            view! {
                                <li class="nav-toggles__item">
                                    <label>
                                        <input
                                            type="checkbox"
                                            prop:checked=move || {
                                                items.with(|all| all.iter().any(|i| i.id == checked_id && i.is_active))
                                            }
                                            on:change=move |_| {
                                                nav.update(|n| {
                                                    n.toggle(&id);
                                                });
                                            }
                                            disabled=move || saving.get()
                                        />
                                        " "
                                        {item.label}
                                    </label>
                                </li>
                            }
                        }
                    />
                </ul>
                <Show when=move || nav.with(|n| n.status == ListStatus::Loaded && n.items.is_empty())>
                    <p class="data-table__empty">"No navigation items found."</p>
                </Show>
                <button class="btn btn--primary" disabled=move || saving.get() on:click=on_save>
                    {move || if saving.get() { "Updating..." } else { "Update" }}
                </button>
            </section>
        </AdminLayout>
    }
}
