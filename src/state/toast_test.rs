use super::*;

#[test]
fn toasts_keep_arrival_order() {
    let mut state = ToastState::default();
    state.success("saved");
    state.error("boom");
    let messages: Vec<&str> = state.toasts.iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, ["saved", "boom"]);
    assert_eq!(state.toasts[0].level, ToastLevel::Success);
    assert_eq!(state.toasts[1].level, ToastLevel::Error);
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = ToastState::default();
    state.success("one");
    state.success("two");
    let first_id = state.toasts[0].id;
    state.dismiss(first_id);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].message, "two");
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    state.success("one");
    let first_id = state.toasts[0].id;
    state.dismiss(first_id);
    state.success("two");
    assert_ne!(state.toasts[0].id, first_id);
}

#[test]
fn dismissing_unknown_id_is_ignored() {
    let mut state = ToastState::default();
    state.success("one");
    state.dismiss(999);
    assert_eq!(state.toasts.len(), 1);
}
