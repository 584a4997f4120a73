//! Console landing page: one card per managed section.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::layout::AdminLayout;
use crate::components::sidebar::NAV_LINKS;

/// Sidebar destinations other than the dashboard itself.
fn section_links() -> impl Iterator<Item = &'static (&'static str, &'static str)> {
    NAV_LINKS.iter().filter(|(href, _)| *href != "/")
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <AdminLayout>
            <section class="dashboard">
                <h1>"Dashboard"</h1>
                <div class="dashboard__grid">
                    {section_links()
                        .map(|(href, label)| {
                            view! {
                                <a class="dashboard__card" href=*href>
                                    {*label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        </AdminLayout>
    }
}
