//! Reusable UI widgets for the admin pages.

pub mod filter_bar;
pub mod nav_bar;
pub mod pagination;
pub mod status_badge;
pub mod toast_host;
pub mod user_dialog;
pub mod user_table;
