//! Token-gated route guard.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::session;

/// Renders its children only while a session token is present; otherwise
/// redirects to the login page.
///
/// The gate reads the session signal on every render and is never cached,
/// so a logout performed anywhere (the logout button, the 401 interceptor)
/// flips it on the next render.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = session::use_session();

    view! {
        <Show
            when=move || session.get().is_authenticated()
            fallback=|| view! { <Redirect path="/login"/> }
        >
            {children()}
        </Show>
    }
}
