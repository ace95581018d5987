use payloads::requests::ChecksQuery;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::{ChecksTable, FilterBar, PaginationControls};
use crate::hooks::use_checks;
use crate::state::State;

/// The check report listing: filters, table, and pagination, all driven
/// by one option set whose merged form identifies the cached query.
#[function_component]
pub fn ChecksPage() -> Html {
    let options = use_state(ChecksQuery::default);
    let (state, _) = use_store::<State>();
    let checks_hook = use_checks((*options).clone());

    let on_options_change = {
        let options = options.clone();
        Callback::from(move |next: ChecksQuery| {
            // Changing a filter jumps back to the first page
            options.set(ChecksQuery { page: None, ..next });
        })
    };

    let on_page_change = {
        let options = options.clone();
        Callback::from(move |page: u32| {
            options.set(ChecksQuery {
                page: Some(page),
                ..(*options).clone()
            });
        })
    };

    html! {
        <div class="max-w-5xl mx-auto px-4 py-8 space-y-6">
            <div>
                <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Vehicle history checks"}
                </h1>
                <p class="text-lg text-neutral-600 dark:text-neutral-400 mt-2">
                    {"Browse, filter, and review check reports"}
                </p>
            </div>

            if let Some(error) = &state.error_message {
                <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                    <p class="text-sm text-red-700 dark:text-red-400">{error}</p>
                </div>
            }

            <FilterBar
                options={(*options).clone()}
                on_change={on_options_change}
            />

            {checks_hook.render("check reports", |page, is_loading, error| html! {
                <div class="space-y-4">
                    if is_loading {
                        <p class="text-sm text-neutral-500">{"Refreshing..."}</p>
                    }
                    if let Some(err) = error {
                        <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                            <p class="text-sm text-red-700 dark:text-red-400">{err}</p>
                        </div>
                    }
                    <ChecksTable page={page.clone()} />
                    <PaginationControls
                        page={page.clone()}
                        on_page_change={on_page_change.clone()}
                    />
                </div>
            })}
        </div>
    }
}
