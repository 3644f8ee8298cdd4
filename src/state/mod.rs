//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `users`, `toast`) so individual
//! components can depend on small focused models. Each struct is plain
//! data provided to the tree as an `RwSignal` context; the async flows
//! that touch the network live next to the state they mutate.

pub mod session;
pub mod toast;
pub mod users;
