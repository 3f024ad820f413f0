use yew::prelude::*;

use super::icons::icon_arrow_left;
use crate::format::format_currency;
use crate::settings::AppSettings;
use crate::tally::{ReportBody, Tally};

#[derive(Properties, PartialEq)]
pub struct ReportPanelProps {
    pub tally: Tally,
    pub on_back: Callback<()>,
}

/// Read-only deposit summary meant to be shown to a bank teller.
#[function_component(ReportPanel)]
pub fn report_panel(props: &ReportPanelProps) -> Html {
    let settings = use_context::<UseStateHandle<AppSettings>>();
    let currency_symbol = settings
        .as_ref()
        .map(|s| s.currency_symbol.clone())
        .unwrap_or_else(|| "$".to_string());
    let symbol = currency_symbol.as_str();
    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    let rows = match props.tally.report() {
        ReportBody::Empty => html! {
            <tr>
                <td colspan="3" class="py-8 text-center text-gray-400 text-lg font-normal">
                    {"尚未輸入任何紙幣"}
                </td>
            </tr>
        },
        ReportBody::Lines(lines) => html! {
            <>
                { for lines.iter().map(|line| html! {
                    <tr key={line.denomination.face_value().to_string()} class="border-b border-gray-100">
                        <td class="py-4 text-red-600">{ format!("{}{}", symbol, line.denomination.face_value()) }</td>
                        <td class="py-4 text-center">{ line.count.to_string() }</td>
                        <td class="py-4 text-right">{ format_currency(line.line_total, symbol) }</td>
                    </tr>
                }) }
            </>
        },
    };

    html! {
        <div class="bg-white rounded-2xl shadow-xl border-2 border-red-200 overflow-hidden">
            <div class="bg-gradient-to-r from-red-700 to-red-600 text-yellow-400 p-6 text-center">
                <h2 class="text-3xl font-black tracking-wider">{"銀行入數報告"}</h2>
                <p class="text-red-100 mt-2 text-sm">{"請向銀行職員展示此畫面"}</p>
            </div>

            <div class="p-6">
                <table class="w-full text-left border-collapse">
                    <thead>
                        <tr class="border-b-2 border-gray-200 text-gray-500 text-lg">
                            <th class="pb-3 font-medium w-1/3">{"面額"}</th>
                            <th class="pb-3 font-medium text-center w-1/3">{"張數"}</th>
                            <th class="pb-3 font-medium text-right w-1/3">{"總額"}</th>
                        </tr>
                    </thead>
                    <tbody class="text-2xl font-bold text-gray-800">
                        { rows }
                    </tbody>
                    <tfoot>
                        <tr class="border-t-4 border-red-600">
                            <td colspan="2" class="pt-6 text-2xl font-black text-red-800">{"總計 (Grand Total)"}</td>
                            <td class="pt-6 text-3xl sm:text-4xl font-black text-red-600 text-right">{ format_currency(props.tally.total(), symbol) }</td>
                        </tr>
                    </tfoot>
                </table>

                <button
                    onclick={on_back}
                    class="w-full mt-10 bg-gray-100 hover:bg-gray-200 text-gray-700 font-bold text-xl py-4 rounded-xl transition-colors flex items-center justify-center gap-2 active:scale-[0.98]"
                >
                    { icon_arrow_left("w-6 h-6") }
                    {"返回修改"}
                </button>
            </div>
        </div>
    }
}
