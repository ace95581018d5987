use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn NotFoundPage() -> Html {
    html! {
        <div class="max-w-5xl mx-auto px-4 py-24 text-center space-y-4">
            <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                {"Page not found"}
            </h1>
            <Link<Route>
                to={Route::Home}
                classes="text-sm underline hover:no-underline"
            >
                {"Back to check reports"}
            </Link<Route>>
        </div>
    }
}
