use yew::prelude::*;

use crate::chart::ChartKind;
use crate::components::{
    BranchDirectory, CalculatorPanel, CharityLinks, Layout, ReportPanel, SavingsSection,
};
use crate::content::load_content;
use crate::settings::{scroll_to_top, AppSettings};
use crate::tally::{Denomination, Tally};
use crate::view::{ChartToggles, ViewAction, ViewMode};

#[function_component(App)]
pub fn app() -> Html {
    let settings = use_state(AppSettings::default);
    let tally = use_state(Tally::new);
    let view = use_state(ViewMode::default);
    let tab = use_state(ChartKind::default);
    let toggles = use_state(ChartToggles::default);
    let content = use_state(load_content);

    let on_count_change = {
        let tally = tally.clone();
        Callback::from(move |(denomination, raw): (Denomination, String)| {
            let mut next = (*tally).clone();
            next.set_count(denomination, &raw);
            tracing::debug!(
                denomination = denomination.face_value(),
                raw = %raw,
                count = next.count(denomination),
                "count updated"
            );
            tally.set(next);
        })
    };

    let on_view_action = {
        let view = view.clone();
        let settings = settings.clone();
        let tally = tally.clone();
        Callback::from(move |action: ViewAction| {
            let next = view.apply(action);
            tracing::info!(?action, ?next, total = tally.total(), "view changed");
            view.set(next);
            scroll_to_top(&settings);
        })
    };

    let on_tab = {
        let tab = tab.clone();
        Callback::from(move |kind: ChartKind| tab.set(kind))
    };

    let on_toggle = {
        let toggles = toggles.clone();
        Callback::from(move |kind: ChartKind| toggles.set(toggles.toggled(kind)))
    };

    let content_view = match *view {
        ViewMode::Calculator => html! {
            <CalculatorPanel
                tally={(*tally).clone()}
                on_count_change={on_count_change}
                on_generate={on_view_action.reform(|_: ()| ViewAction::GenerateReport)}
            />
        },
        ViewMode::Report => html! {
            <div class="space-y-6 animate-in fade-in slide-in-from-bottom-4 duration-300">
                <ReportPanel
                    tally={(*tally).clone()}
                    on_back={on_view_action.reform(|_: ()| ViewAction::Back)}
                />
                <BranchDirectory content={(*content).clone()} />
                <CharityLinks content={(*content).clone()} />
                <SavingsSection tab={*tab} on_tab={on_tab} toggles={*toggles} on_toggle={on_toggle} />
            </div>
        },
    };

    html! {
        <ContextProvider<UseStateHandle<AppSettings>> context={settings}>
            <Layout>
                { content_view }
            </Layout>
        </ContextProvider<UseStateHandle<AppSettings>>>
    }
}
