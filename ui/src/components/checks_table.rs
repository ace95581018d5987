use payloads::keys::QueryKey;
use payloads::responses::CheckPage;
use payloads::{CheckId, CodeState, PaymentState};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::get_api_client;
use crate::state::State;

#[derive(Properties, PartialEq)]
pub struct ChecksTableProps {
    pub page: CheckPage,
}

fn code_state_label(code_state: CodeState) -> &'static str {
    match code_state {
        CodeState::Pending => "Pending",
        CodeState::Confirmed => "Confirmed",
        CodeState::Expired => "Expired",
    }
}

fn payment_state_label(payment_state: PaymentState) -> &'static str {
    match payment_state {
        PaymentState::Unpaid => "Unpaid",
        PaymentState::Paid => "Paid",
        PaymentState::Refunded => "Refunded",
    }
}

/// Table of check reports for one page of the listing.
#[function_component]
pub fn ChecksTable(props: &ChecksTableProps) -> Html {
    let (_, dispatch) = use_store::<State>();

    let on_mark_viewed = {
        let dispatch = dispatch.clone();
        Callback::from(move |check_id: CheckId| {
            let dispatch = dispatch.clone();
            yew::platform::spawn_local(async move {
                let api_client = get_api_client();
                match api_client.mark_viewed(&check_id).await {
                    Ok(()) => {
                        // Any cached list may contain this report, so drop
                        // the whole list sub-domain; hooks refetch on their
                        // next render
                        dispatch
                            .reduce_mut(|s| s.invalidate(&QueryKey::lists()));
                    }
                    Err(e) => {
                        dispatch.reduce_mut(|s| {
                            s.error_message = Some(e.to_string())
                        });
                    }
                }
            });
        })
    };

    if props.page.checks.is_empty() {
        return html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"No check reports match the current filters."}
                </p>
            </div>
        };
    }

    html! {
        <div class="overflow-x-auto rounded-lg border border-neutral-200 dark:border-neutral-700">
            <table class="min-w-full divide-y divide-neutral-200 dark:divide-neutral-700">
                <thead class="bg-neutral-50 dark:bg-neutral-800">
                    <tr>
                        <th class="px-4 py-3 text-left text-xs font-medium uppercase tracking-wider text-neutral-500">{"Plate"}</th>
                        <th class="px-4 py-3 text-left text-xs font-medium uppercase tracking-wider text-neutral-500">{"Model"}</th>
                        <th class="px-4 py-3 text-left text-xs font-medium uppercase tracking-wider text-neutral-500">{"Code"}</th>
                        <th class="px-4 py-3 text-left text-xs font-medium uppercase tracking-wider text-neutral-500">{"Payment"}</th>
                        <th class="px-4 py-3 text-left text-xs font-medium uppercase tracking-wider text-neutral-500">{"Created"}</th>
                        <th class="px-4 py-3"></th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-neutral-200 dark:divide-neutral-700">
                    {props.page.checks.iter().map(|check| {
                        let mark_viewed = {
                            let on_mark_viewed = on_mark_viewed.clone();
                            let check_id = check.id;
                            Callback::from(move |_| on_mark_viewed.emit(check_id))
                        };
                        html! {
                            <tr key={check.id.to_string()} class={if check.viewed { "opacity-60" } else { "" }}>
                                <td class="px-4 py-3 text-sm font-mono">{&check.plate_number}</td>
                                <td class="px-4 py-3 text-sm">{&check.vehicle_model}</td>
                                <td class="px-4 py-3 text-sm">{code_state_label(check.code_state)}</td>
                                <td class="px-4 py-3 text-sm">{payment_state_label(check.payment_state)}</td>
                                <td class="px-4 py-3 text-sm text-neutral-600 dark:text-neutral-400">
                                    {check.created_at.to_zoned(jiff::tz::TimeZone::system()).strftime("%B %d, %Y").to_string()}
                                </td>
                                <td class="px-4 py-3 text-right">
                                    {if check.viewed {
                                        html! {
                                            <span class="text-xs text-neutral-500">{"Opened"}</span>
                                        }
                                    } else {
                                        html! {
                                            <button
                                                onclick={mark_viewed}
                                                class="text-xs font-medium text-neutral-900 dark:text-neutral-100 underline hover:no-underline"
                                            >
                                                {"Mark opened"}
                                            </button>
                                        }
                                    }}
                                </td>
                            </tr>
                        }
                    }).collect::<Html>()}
                </tbody>
            </table>
        </div>
    }
}
