use payloads::responses::CheckPage;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationControlsProps {
    pub page: CheckPage,
    pub on_page_change: Callback<u32>,
}

/// Previous/next controls driven by the effective pagination the server
/// echoed back.
#[function_component]
pub fn PaginationControls(props: &PaginationControlsProps) -> Html {
    let current = props.page.page;
    let total_pages = props.page.total_pages().max(1);

    let on_previous = {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_| on_page_change.emit(current - 1))
    };
    let on_next = {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_| on_page_change.emit(current + 1))
    };

    let button_classes = "px-3 py-1 rounded-md border border-neutral-300 \
                          dark:border-neutral-600 text-sm \
                          disabled:opacity-40 disabled:cursor-not-allowed";

    html! {
        <div class="flex items-center justify-between">
            <p class="text-sm text-neutral-600 dark:text-neutral-400">
                {format!("{} reports", props.page.total)}
            </p>
            <div class="flex items-center gap-3">
                <button
                    onclick={on_previous}
                    disabled={current <= 1}
                    class={button_classes}
                >
                    {"Previous"}
                </button>
                <span class="text-sm text-neutral-600 dark:text-neutral-400">
                    {format!("Page {current} of {total_pages}")}
                </span>
                <button
                    onclick={on_next}
                    disabled={u64::from(current) >= total_pages}
                    class={button_classes}
                >
                    {"Next"}
                </button>
            </div>
        </div>
    }
}
