//! Admin user-management page: listing, filters, CRUD dialog, export.

use leptos::prelude::*;
use serde_json::Value;

use crate::components::filter_bar::FilterBar;
use crate::components::nav_bar::NavBar;
use crate::components::pagination::Pagination;
use crate::components::user_dialog::UserDialog;
use crate::components::user_table::UserTable;
use crate::export::table::{CellKind, Column};
use crate::export::{csv, download, pdf, xlsx};
use crate::net::types::{Status, User, UserDraft};
use crate::state::toast::ToastState;
use crate::state::users::{self, UsersState};

/// Which artifact an export button produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ExportKind {
    Csv,
    Xlsx,
    Pdf,
}

/// Editor dialog state: closed, creating, or editing a specific account.
#[derive(Clone, Debug, Default, PartialEq)]
enum Editor {
    #[default]
    Closed,
    Create,
    Edit(User),
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let state = expect_context::<RwSignal<UsersState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let editor = RwSignal::new(Editor::Closed);

    // Initial fetch on mount.
    Effect::new(move || {
        spawn(users::refresh(state, toasts));
    });

    let refresh = Callback::new(move |()| {
        spawn(users::refresh(state, toasts));
    });

    let on_page = Callback::new(move |page: u32| {
        state.update(|u| u.set_page(page));
        spawn(users::refresh(state, toasts));
    });

    let on_edit = Callback::new(move |user: User| editor.set(Editor::Edit(user)));
    let on_toggle = Callback::new(move |(id, status): (i64, Status)| {
        spawn(users::change_status(state, toasts, id, status));
    });
    let on_delete = Callback::new(move |id: i64| {
        spawn(users::remove(state, toasts, id));
    });

    let on_cancel = Callback::new(move |()| editor.set(Editor::Closed));
    let on_submit = Callback::new(move |draft: UserDraft| {
        let mode = editor.get_untracked();
        editor.set(Editor::Closed);
        match mode {
            Editor::Edit(user) => spawn(users::update(state, toasts, user.id, draft)),
            _ => spawn(users::create(state, toasts, draft)),
        }
    });

    let on_export = move |kind: ExportKind| {
        let items = state.with_untracked(|u| u.items.clone());
        if items.is_empty() {
            toasts.update(|t| t.error("Nothing to export"));
            return;
        }
        let columns = export_columns();
        let rows = export_rows(&items);
        let produced = match kind {
            ExportKind::Csv => csv::to_csv(&columns, &rows)
                .map(|bytes| (bytes, "users.csv", csv::MIME)),
            ExportKind::Xlsx => xlsx::to_xlsx(&columns, &rows)
                .map(|bytes| (bytes, "users.xlsx", xlsx::MIME)),
            ExportKind::Pdf => pdf::to_pdf("User report", &columns, &rows)
                .map(|bytes| (bytes, "users.pdf", pdf::MIME)),
        };
        match produced {
            Ok((bytes, filename, mime)) => {
                download::save_file(&bytes, filename, mime);
                toasts.update(|t| t.success(format!("Exported {filename}")));
            }
            Err(err) => {
                toasts.update(|t| t.error(format!("Export failed: {err}")));
            }
        }
    };

    view! {
        <div class="users-page">
            <NavBar/>
            <main class="users-page__body">
                <header class="users-page__header">
                    <h1>"Users"</h1>
                    <div class="users-page__actions">
                        <button class="btn" on:click=move |_| on_export(ExportKind::Csv)>
                            "Export CSV"
                        </button>
                        <button class="btn" on:click=move |_| on_export(ExportKind::Xlsx)>
                            "Export Excel"
                        </button>
                        <button class="btn" on:click=move |_| on_export(ExportKind::Pdf)>
                            "Export PDF"
                        </button>
                        <button
                            class="btn btn--primary"
                            on:click=move |_| editor.set(Editor::Create)
                        >
                            "+ New User"
                        </button>
                    </div>
                </header>

                <FilterBar on_refresh=refresh/>
                <UserTable on_edit=on_edit on_toggle=on_toggle on_delete=on_delete/>
                <Pagination on_page=on_page/>
            </main>

            {move || match editor.get() {
                Editor::Closed => ().into_any(),
                Editor::Create => {
                    view! { <UserDialog initial=None on_cancel=on_cancel on_submit=on_submit/> }
                        .into_any()
                }
                Editor::Edit(user) => {
                    view! {
                        <UserDialog initial=Some(user) on_cancel=on_cancel on_submit=on_submit/>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

/// Column set shared by all three exporters.
fn export_columns() -> Vec<Column> {
    vec![
        Column::text("username", "Username"),
        Column::text("email", "Email"),
        Column::text("phone_number", "Phone"),
        Column::text("role", "Role"),
        Column::text("status", "Status"),
        Column::new("created_at", "Created", CellKind::Date),
    ]
}

fn export_rows(items: &[User]) -> Vec<Value> {
    items
        .iter()
        .map(|u| {
            serde_json::json!({
                "username": u.username,
                "email": u.email,
                "phone_number": u.phone_number,
                "role": u.role.label(),
                "status": u.status.label(),
                "created_at": u.created_at.map(|d| d.to_rfc3339()),
            })
        })
        .collect()
}

/// Run an async flow from an event handler. Outside the browser the flow
/// is dropped; every call site refetches on the next mount anyway.
fn spawn(fut: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "hydrate"))]
    drop(fut);
}
