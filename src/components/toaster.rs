//! Toast overlay rendering the active notification list.

use leptos::prelude::*;

use crate::state::toasts::{self, ToastKind};

/// Fixed overlay in the top-right corner; toasts stack oldest first.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = toasts::use_toasts();

    view! {
        <div class="toaster">
            {move || {
                toasts
                    .get()
                    .toasts()
                    .iter()
                    .map(|toast| {
                        let class = match toast.kind {
                            ToastKind::Success => "toast toast--success",
                            ToastKind::Error => "toast toast--error",
                            ToastKind::Loading => "toast toast--loading",
                        };
                        view! { <div class=class>{toast.message.clone()}</div> }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
