use yew::prelude::*;

use super::icons::{icon_chevron_down, icon_chevron_up, icon_piggy_bank, icon_trending_up};
use super::layout::section_card;
use super::line_chart::LineChart;
use crate::chart::ChartKind;
use crate::view::ChartToggles;

/// Tailwind classes for a chart's colour theme.
pub struct Palette {
    pub emphasis: &'static str,
    pub toggle: &'static str,
    pub table: &'static str,
    pub table_head: &'static str,
    pub head_cell: &'static str,
    pub odd_row: &'static str,
    pub index_cell: &'static str,
}

pub fn palette(kind: ChartKind) -> Palette {
    match kind {
        ChartKind::Insurance => Palette {
            emphasis: "text-red-600 font-semibold mb-1",
            toggle: "flex items-center justify-center w-full py-2 text-sm font-medium text-red-700 bg-red-50 hover:bg-red-100 rounded-lg transition-colors border border-red-200",
            table: "mt-2 max-h-40 overflow-y-auto bg-white rounded-lg border border-red-100 text-sm",
            table_head: "bg-red-50 sticky top-0",
            head_cell: "p-2 font-medium text-red-800",
            odd_row: "bg-red-50/30",
            index_cell: "p-2 text-right font-medium text-red-600",
        },
        ChartKind::TechFund => Palette {
            emphasis: "text-emerald-600 font-semibold mb-1",
            toggle: "flex items-center justify-center w-full py-2 text-sm font-medium text-emerald-700 bg-emerald-50 hover:bg-emerald-100 rounded-lg transition-colors border border-emerald-200",
            table: "mt-2 max-h-40 overflow-y-auto bg-white rounded-lg border border-emerald-100 text-sm",
            table_head: "bg-emerald-50 sticky top-0",
            head_cell: "p-2 font-medium text-emerald-800",
            odd_row: "bg-emerald-50/30",
            index_cell: "p-2 text-right font-medium text-emerald-600",
        },
    }
}

fn blurb(kind: ChartKind) -> Html {
    match kind {
        ChartKind::Insurance => html! {
            <p class="text-gray-700 text-sm mt-1 mb-4 leading-relaxed">
                {"首16年預期回報 "}<span class="font-bold text-red-600">{"4.5%"}</span>{"，期後每年 "}<span class="font-bold text-red-600">{"6.5%"}</span>
            </p>
        },
        ChartKind::TechFund => html! {
            <p class="text-gray-700 text-sm mt-1 mb-4 leading-relaxed">
                {"歷史數據參考 (2008-2026)，累計回報達 "}<span class="font-bold text-red-600">{"1001%"}</span>{" (年化回報約 14.3%)"}
            </p>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct ChartPanelProps {
    pub kind: ChartKind,
    pub show_table: bool,
    pub on_toggle: Callback<ChartKind>,
}

#[function_component(ChartPanel)]
fn chart_panel(props: &ChartPanelProps) -> Html {
    let kind = props.kind;
    let colours = palette(kind);
    let on_toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(kind))
    };
    let [date_header, index_header, raw_header] = kind.table_headers();
    let points = kind.points();

    html! {
        <div class="animate-in fade-in duration-300">
            <h4 class="font-bold text-red-800">{ kind.title() }</h4>
            { blurb(kind) }

            <LineChart kind={kind} />

            <div class="mt-4">
                <button onclick={on_toggle} class={colours.toggle}>
                    { if props.show_table {
                        html! { <>{ icon_chevron_up("w-4 h-4 mr-1") }{"隱藏詳細數據"}</> }
                    } else {
                        html! { <>{ icon_chevron_down("w-4 h-4 mr-1") }{"顯示詳細數據"}</> }
                    } }
                </button>

                { if props.show_table {
                    html! {
                        <div class={colours.table}>
                            <table class="w-full text-left">
                                <thead class={colours.table_head}>
                                    <tr>
                                        <th class={colours.head_cell}>{ date_header }</th>
                                        <th class={classes!(colours.head_cell, "text-right")}>{ index_header }</th>
                                        <th class={classes!(colours.head_cell, "text-right")}>{ raw_header }</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    { for points.iter().enumerate().map(|(i, point)| {
                                        let row = kind.table_row(point);
                                        let shade = if i % 2 == 0 { "bg-white" } else { colours.odd_row };
                                        html! {
                                            <tr key={point.year} class={shade}>
                                                <td class="p-2 text-gray-600">{ row.date }</td>
                                                <td class={colours.index_cell}>{ row.indexed }</td>
                                                <td class="p-2 text-right font-medium text-gray-800">{ row.raw }</td>
                                            </tr>
                                        }
                                    }) }
                                </tbody>
                            </table>
                        </div>
                    }
                } else { html! {} } }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SavingsSectionProps {
    pub tab: ChartKind,
    pub on_tab: Callback<ChartKind>,
    pub toggles: ChartToggles,
    pub on_toggle: Callback<ChartKind>,
}

/// Kids' savings tips with the two illustrative charts behind tabs.
#[function_component(SavingsSection)]
pub fn savings_section(props: &SavingsSectionProps) -> Html {
    let tabs = ChartKind::ALL.into_iter().map(|kind| {
        let on_tab = props.on_tab.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_tab.emit(kind));
        let state = if props.tab == kind {
            "text-red-700 border-b-2 border-red-700"
        } else {
            "text-red-400 hover:text-red-600"
        };
        html! {
            <button key={kind.tab_label()} onclick={onclick} class={classes!("pb-2", "px-4", "text-sm", "font-bold", "transition-colors", state)}>
                { kind.tab_label() }
            </button>
        }
    });

    section_card(
        icon_piggy_bank("w-6 h-6 text-yellow-300"),
        "幫小朋友儲利是錢",
        html! {
            <div class="p-5 space-y-4">
                <div class="bg-yellow-50 border-l-4 border-yellow-400 p-4 rounded-r-lg">
                    <p class="text-gray-800 font-medium leading-relaxed">
                        {"「唔好俾通脹令金錢貶值！善用利是錢為小朋友建立未來。」"}
                    </p>
                </div>
                <div class="flex gap-3 items-start bg-red-50 p-4 rounded-xl border border-red-100">
                    <div class="bg-red-100 p-2 rounded-full text-red-600 shrink-0">
                        { icon_trending_up("w-5 h-5") }
                    </div>
                    <div class="w-full">
                        <div class="flex border-b border-red-200 mb-4">
                            { for tabs }
                        </div>
                        <ChartPanel
                            key={props.tab.tab_label()}
                            kind={props.tab}
                            show_table={props.toggles.is_shown(props.tab)}
                            on_toggle={props.on_toggle.clone()}
                        />
                    </div>
                </div>
            </div>
        },
    )
}
