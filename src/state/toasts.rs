//! The toast store: transient user-facing notifications.
//!
//! Success and error toasts dismiss themselves after a short delay.
//! Loading toasts stay until [`resolve`]d, which swaps the message and kind
//! in place (same id, same position in the list) rather than stacking a
//! second toast; the stock-save flow depends on that.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use std::time::Duration;

use leptos::prelude::*;

pub type ToastId = u64;

const DISMISS_AFTER: Duration = Duration::from_millis(3500);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Loading,
}

/// A single on-screen notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
}

/// Ordered list of active toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    toasts: Vec<Toast>,
    next_id: ToastId,
}

impl ToastState {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Append a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> ToastId {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Swap kind and message in place, keeping id and position.
    /// A no-op when the toast has already been dismissed.
    pub fn replace(&mut self, id: ToastId, kind: ToastKind, message: impl Into<String>) {
        if let Some(toast) = self.toasts.iter_mut().find(|toast| toast.id == id) {
            toast.kind = kind;
            toast.message = message.into();
        }
    }

    pub fn dismiss(&mut self, id: ToastId) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

thread_local! {
    static TOASTS: RwSignal<ToastState> = RwSignal::new(ToastState::default());
}

/// Handle to the process-wide toast signal, read by the `Toaster` overlay.
pub fn use_toasts() -> RwSignal<ToastState> {
    TOASTS.with(|signal| *signal)
}

/// Show a success toast that dismisses itself.
pub fn success(message: impl Into<String>) {
    let id = push(ToastKind::Success, message.into());
    schedule_dismiss(id);
}

/// Show an error toast that dismisses itself.
pub fn error(message: impl Into<String>) {
    let id = push(ToastKind::Error, message.into());
    schedule_dismiss(id);
}

/// Show a loading toast. It stays up until [`resolve`]d.
pub fn loading(message: impl Into<String>) -> ToastId {
    push(ToastKind::Loading, message.into())
}

/// Turn a loading toast into its outcome in place, then let it dismiss
/// itself like any other terminal toast.
pub fn resolve(id: ToastId, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    use_toasts().update(|state| state.replace(id, kind, message));
    schedule_dismiss(id);
}

fn push(kind: ToastKind, message: String) -> ToastId {
    let toasts = use_toasts();
    let mut id = 0;
    toasts.update(|state| id = state.push(kind, message));
    id
}

fn schedule_dismiss(id: ToastId) {
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(DISMISS_AFTER).await;
        use_toasts().update(|state| state.dismiss(id));
    });
}
