//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Redirect, Route, Router, Routes};

use crate::components::guard::RequireAuth;
use crate::components::toaster::Toaster;
use crate::pages::{login::LoginPage, products::ProductsPage};

/// Root component: toast overlay plus the two routes.
///
/// Every unknown path lands on `/products`, which the guard bounces to
/// `/login` when there is no session.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Stockroom"/>
        <Toaster/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/products"/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=StaticSegment("products")
                    view=|| {
                        view! {
                            <RequireAuth>
                                <ProductsPage/>
                            </RequireAuth>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
