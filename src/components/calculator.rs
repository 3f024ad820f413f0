use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::icons::{icon_calculator, icon_file_text};
use super::layout::section_card;
use crate::format::format_currency;
use crate::settings::AppSettings;
use crate::tally::{Denomination, Tally};

#[derive(Properties, PartialEq)]
pub struct CalculatorPanelProps {
    pub tally: Tally,
    pub on_count_change: Callback<(Denomination, String)>,
    pub on_generate: Callback<()>,
}

#[function_component(CalculatorPanel)]
pub fn calculator_panel(props: &CalculatorPanelProps) -> Html {
    let settings = use_context::<UseStateHandle<AppSettings>>();
    let currency_symbol = settings
        .as_ref()
        .map(|s| s.currency_symbol.clone())
        .unwrap_or_else(|| "$".to_string());
    let symbol = currency_symbol.as_str();
    let on_generate = {
        let on_generate = props.on_generate.clone();
        Callback::from(move |_: MouseEvent| on_generate.emit(()))
    };

    html! {
        <div class="space-y-6 animate-in fade-in duration-300">
            { section_card(
                icon_calculator("w-6 h-6 text-yellow-300"),
                "點算利是",
                html! {
                    <div class="p-4 space-y-3">
                        { for Denomination::ALL.into_iter().map(|denom| {
                            let on_count_change = props.on_count_change.clone();
                            let oninput = Callback::from(move |e: InputEvent| {
                                if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                    on_count_change.emit((denom, input.value()));
                                }
                            });
                            html! {
                                <div key={denom.face_value().to_string()} class="flex items-center justify-between p-3 bg-red-50/50 rounded-xl border border-red-100 hover:bg-red-50 transition-colors">
                                    <div class="flex items-center gap-3 w-1/3">
                                        <span class="text-xl font-bold text-red-700">{ format!("{}{}", symbol, denom.face_value()) }</span>
                                    </div>
                                    <div class="flex items-center gap-2 w-1/3 justify-center">
                                        <span class="text-gray-400 text-sm">{"x"}</span>
                                        <input
                                            type="number"
                                            min="0"
                                            value={props.tally.input_value(denom)}
                                            oninput={oninput}
                                            class="w-20 p-2 text-center text-lg font-semibold border-2 border-red-200 rounded-lg focus:outline-none focus:border-red-500 focus:ring-2 focus:ring-red-200 bg-white"
                                            placeholder="0"
                                        />
                                        <span class="text-gray-500 text-sm">{"張"}</span>
                                    </div>
                                    <div class="w-1/3 text-right">
                                        <span class="text-lg font-bold text-gray-800">
                                            { format_currency(props.tally.line_total(denom), symbol) }
                                        </span>
                                    </div>
                                </div>
                            }
                        }) }

                        <div class="mt-6 p-5 bg-gradient-to-br from-yellow-50 to-yellow-100 rounded-xl border-2 border-yellow-400 flex justify-between items-center shadow-inner">
                            <span class="text-xl font-bold text-red-800">{"利是總數"}</span>
                            <span class="text-3xl font-black text-red-600">{ format_currency(props.tally.total(), symbol) }</span>
                        </div>

                        <button
                            onclick={on_generate}
                            class="w-full mt-4 bg-gradient-to-r from-red-600 to-red-700 hover:from-red-700 hover:to-red-800 text-yellow-300 font-bold text-lg py-4 rounded-xl shadow-md transition-all flex items-center justify-center gap-2 active:scale-[0.98]"
                        >
                            { icon_file_text("w-6 h-6") }
                            {"生成入數報告"}
                        </button>
                    </div>
                }
            ) }
        </div>
    }
}
