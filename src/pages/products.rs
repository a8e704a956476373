//! Products page: list, create form, inline stock editing, logout.
//!
//! The list is always the last full `GET` payload. Both mutations (create,
//! stock patch) trigger a complete refetch on success instead of merging
//! the server's reply into the rendered list.

use leptos::ev;
use leptos::prelude::*;

use crate::forms::product::{self, ProductDraft, ProductDraftErrors};
use crate::net::api;
use crate::net::types::Product;
use crate::state::toasts::ToastKind;
use crate::state::{session, toasts};

pub const LOAD_FAILED: &str = "Could not load products.";
pub const CREATE_FAILED: &str = "Could not create the product.";
pub const UPDATE_FAILED: &str = "Could not update stock.";
pub const INVALID_STOCK: &str = "Invalid stock value.";

/// Products page. Fetches the list exactly once on mount, with a loading
/// indicator until the request settles.
#[component]
pub fn ProductsPage() -> impl IntoView {
    let products = RwSignal::new(Vec::<Product>::new());
    let loading = RwSignal::new(true);
    // At most one row is editable at a time, tracked by product id.
    let editing = RwSignal::new(None::<i64>);

    let refetch = move || {
        leptos::task::spawn_local(async move {
            loading.set(true);
            match api::fetch_products().await {
                Ok(list) => products.set(list),
                // The 401 interceptor already logged us out; don't toast twice.
                Err(err) if err.is_unauthorized() => {}
                Err(err) => {
                    log::warn!("product fetch failed: {err}");
                    toasts::error(LOAD_FAILED);
                }
            }
            loading.set(false);
        });
    };

    // Exactly one fetch on mount.
    refetch();

    let on_save = Callback::new(move |(id, stock): (i64, u32)| {
        leptos::task::spawn_local(async move {
            let toast = toasts::loading("Updating stock...");
            match api::update_stock(id, stock).await {
                Ok(()) => {
                    toasts::resolve(toast, ToastKind::Success, "Stock updated.");
                    editing.set(None);
                    refetch();
                }
                Err(err) => {
                    log::warn!("stock update failed: {err}");
                    toasts::resolve(toast, ToastKind::Error, UPDATE_FAILED);
                }
            }
        });
    });

    let on_cancel = Callback::new(move |()| editing.set(None));

    // Create form state; the draft keeps its values on a failed submit.
    let name = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let stock = RwSignal::new(String::new());
    let draft_errors = RwSignal::new(ProductDraftErrors::default());
    let submitting = RwSignal::new(false);

    let on_create = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let draft = ProductDraft {
            name: name.get_untracked(),
            price: price.get_untracked(),
            stock: stock.get_untracked(),
        };
        let new_product = match draft.validate() {
            Ok(product) => product,
            Err(field_errors) => {
                draft_errors.set(field_errors);
                return;
            }
        };
        draft_errors.set(ProductDraftErrors::default());
        submitting.set(true);
        leptos::task::spawn_local(async move {
            match api::create_product(&new_product).await {
                Ok(()) => {
                    toasts::success("Product created.");
                    name.set(String::new());
                    price.set(String::new());
                    stock.set(String::new());
                    refetch();
                }
                Err(err) => {
                    log::warn!("product create failed: {err}");
                    toasts::error(CREATE_FAILED);
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="products-page">
            <header class="products-page__header">
                <h1>"Products"</h1>
                // Pure session logout; the route guard redirects on the
                // next render.
                <button class="btn" on:click=move |_| session::logout()>
                    "Sign out"
                </button>
            </header>

            <form class="product-form" on:submit=on_create>
                <h2>"Create product"</h2>
                <label class="field">
                    "Name"
                    <input
                        class="field__input"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                {move || {
                    draft_errors.get().name.map(|msg| view! { <p class="field__error">{msg}</p> })
                }}

                <label class="field">
                    "Price"
                    <input
                        class="field__input"
                        type="number"
                        step="0.01"
                        prop:value=move || price.get()
                        on:input=move |ev| price.set(event_target_value(&ev))
                    />
                </label>
                {move || {
                    draft_errors.get().price.map(|msg| view! { <p class="field__error">{msg}</p> })
                }}

                <label class="field">
                    "Stock"
                    <input
                        class="field__input"
                        type="number"
                        prop:value=move || stock.get()
                        on:input=move |ev| stock.set(event_target_value(&ev))
                    />
                </label>
                {move || {
                    draft_errors.get().stock.map(|msg| view! { <p class="field__error">{msg}</p> })
                }}

                <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Saving..." } else { "Create product" }}
                </button>
            </form>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="products-page__loading">"Loading products..."</p> }
            >
                <table class="product-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Name"</th>
                            <th>"Price"</th>
                            <th>"Stock"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            products
                                .get()
                                .into_iter()
                                .map(|p| {
                                    if editing.get() == Some(p.id) {
                                        view! {
                                            <StockEditRow product=p on_save=on_save on_cancel=on_cancel/>
                                        }
                                            .into_any()
                                    } else {
                                        let id = p.id;
                                        view! {
                                            <tr>
                                                <td>{p.id}</td>
                                                <td>{p.name}</td>
                                                <td>{format!("${:.2}", p.price)}</td>
                                                <td>{p.stock}</td>
                                                <td>
                                                    <button class="btn" on:click=move |_| editing.set(Some(id))>
                                                        "Update stock"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                            .into_any()
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}

/// Inline editor for a single row's stock.
///
/// Seeds its input from the row's current value and validates locally
/// before handing the parsed value up; an invalid value shows an error
/// toast and sends nothing.
#[component]
fn StockEditRow(
    product: Product,
    on_save: Callback<(i64, u32)>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let value = RwSignal::new(product.stock.to_string());
    let id = product.id;
    let label = format!("Stock for {}", product.name);

    let save = move |_| match product::parse_stock(&value.get_untracked()) {
        Some(stock) => on_save.run((id, stock)),
        None => toasts::error(INVALID_STOCK),
    };

    view! {
        <tr class="product-table__edit-row">
            <td>{product.id}</td>
            <td>{product.name.clone()}</td>
            <td>{format!("${:.2}", product.price)}</td>
            <td>
                <input
                    class="field__input field__input--stock"
                    type="number"
                    aria-label=label
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </td>
            <td>
                <button class="btn btn--primary" on:click=save>
                    "Save"
                </button>
                <button class="btn" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
            </td>
        </tr>
    }
}
