use payloads::requests::ChecksQuery;
use payloads::{CodeState, PaymentState, SortOrder};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub options: ChecksQuery,
    pub on_change: Callback<ChecksQuery>,
}

/// Search, state filters, and sort controls for the check listing.
///
/// Every control emits the full next option set; the page owns the
/// state and decides what a change means for pagination.
#[function_component]
pub fn FilterBar(props: &FilterBarProps) -> Html {
    let on_search_change = {
        let options = props.options.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let search = if value.is_empty() { None } else { Some(value) };
            on_change.emit(ChecksQuery {
                search,
                ..options.clone()
            });
        })
    };

    let on_viewed_change = {
        let options = props.options.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            // "false" is a real filter (unopened reports), not "unset"
            let viewed = match value.as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            };
            on_change.emit(ChecksQuery {
                viewed,
                ..options.clone()
            });
        })
    };

    let on_code_state_change = {
        let options = props.options.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            let code_state = match value.as_str() {
                "pending" => Some(CodeState::Pending),
                "confirmed" => Some(CodeState::Confirmed),
                "expired" => Some(CodeState::Expired),
                _ => None,
            };
            on_change.emit(ChecksQuery {
                code_state,
                ..options.clone()
            });
        })
    };

    let on_payment_state_change = {
        let options = props.options.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            let payment_state = match value.as_str() {
                "unpaid" => Some(PaymentState::Unpaid),
                "paid" => Some(PaymentState::Paid),
                "refunded" => Some(PaymentState::Refunded),
                _ => None,
            };
            on_change.emit(ChecksQuery {
                payment_state,
                ..options.clone()
            });
        })
    };

    let on_sort_change = {
        let options = props.options.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            let (sort_by, sort_order) = match value.as_str() {
                "oldest" => {
                    (Some("created_at".to_string()), Some(SortOrder::Asc))
                }
                "plate" => {
                    (Some("plate_number".to_string()), Some(SortOrder::Asc))
                }
                "model" => {
                    (Some("vehicle_model".to_string()), Some(SortOrder::Asc))
                }
                _ => (None, None), // newest first via the defaults
            };
            on_change.emit(ChecksQuery {
                sort_by,
                sort_order,
                ..options.clone()
            });
        })
    };

    let select_classes = "rounded-md border border-neutral-300 \
                          dark:border-neutral-600 bg-white \
                          dark:bg-neutral-800 px-3 py-2 text-sm";

    html! {
        <div class="flex flex-wrap gap-3 items-end">
            <div class="flex-1 min-w-48">
                <label class="block text-sm text-neutral-600 dark:text-neutral-400 mb-1">
                    {"Search"}
                </label>
                <input
                    type="text"
                    placeholder="Plate or model"
                    value={props.options.search.clone().unwrap_or_default()}
                    onchange={on_search_change}
                    class="w-full rounded-md border border-neutral-300 dark:border-neutral-600 bg-white dark:bg-neutral-800 px-3 py-2 text-sm"
                />
            </div>
            <div>
                <label class="block text-sm text-neutral-600 dark:text-neutral-400 mb-1">
                    {"Viewed"}
                </label>
                <select onchange={on_viewed_change} class={select_classes}>
                    <option value="" selected={props.options.viewed.is_none()}>{"All"}</option>
                    <option value="false" selected={props.options.viewed == Some(false)}>{"Unopened"}</option>
                    <option value="true" selected={props.options.viewed == Some(true)}>{"Opened"}</option>
                </select>
            </div>
            <div>
                <label class="block text-sm text-neutral-600 dark:text-neutral-400 mb-1">
                    {"Code"}
                </label>
                <select onchange={on_code_state_change} class={select_classes}>
                    <option value="" selected={props.options.code_state.is_none()}>{"All"}</option>
                    <option value="pending" selected={props.options.code_state == Some(CodeState::Pending)}>{"Pending"}</option>
                    <option value="confirmed" selected={props.options.code_state == Some(CodeState::Confirmed)}>{"Confirmed"}</option>
                    <option value="expired" selected={props.options.code_state == Some(CodeState::Expired)}>{"Expired"}</option>
                </select>
            </div>
            <div>
                <label class="block text-sm text-neutral-600 dark:text-neutral-400 mb-1">
                    {"Payment"}
                </label>
                <select onchange={on_payment_state_change} class={select_classes}>
                    <option value="" selected={props.options.payment_state.is_none()}>{"All"}</option>
                    <option value="unpaid" selected={props.options.payment_state == Some(PaymentState::Unpaid)}>{"Unpaid"}</option>
                    <option value="paid" selected={props.options.payment_state == Some(PaymentState::Paid)}>{"Paid"}</option>
                    <option value="refunded" selected={props.options.payment_state == Some(PaymentState::Refunded)}>{"Refunded"}</option>
                </select>
            </div>
            <div>
                <label class="block text-sm text-neutral-600 dark:text-neutral-400 mb-1">
                    {"Sort"}
                </label>
                <select onchange={on_sort_change} class={select_classes}>
                    <option value="newest" selected={props.options.sort_by.is_none()}>{"Newest first"}</option>
                    <option value="oldest" selected={props.options.sort_by.as_deref() == Some("created_at")}>{"Oldest first"}</option>
                    <option value="plate" selected={props.options.sort_by.as_deref() == Some("plate_number")}>{"Plate number"}</option>
                    <option value="model" selected={props.options.sort_by.as_deref() == Some("vehicle_model")}>{"Model"}</option>
                </select>
            </div>
        </div>
    }
}
