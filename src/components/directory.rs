use yew::prelude::*;

use super::icons::{icon_heart, icon_map_pin};
use super::layout::section_card;
use crate::content::{ExternalLink, StaticContent};

#[derive(Properties, PartialEq)]
pub struct ContentProps {
    pub content: StaticContent,
}

fn outbound_link(link: &ExternalLink, class: &'static str) -> Html {
    html! {
        <a key={link.url.clone()} href={link.url.clone()} target="_blank" rel="noopener noreferrer" class={class}>
            { link.name.clone() }
        </a>
    }
}

#[function_component(BranchDirectory)]
pub fn branch_directory(props: &ContentProps) -> Html {
    let content = &props.content;
    section_card(
        icon_map_pin("w-6 h-6 text-yellow-300"),
        "銀行存鈔機及分行位置",
        html! {
            <div class="p-4">
                <p class="text-sm text-red-800 font-medium mb-4 bg-yellow-100 p-3 rounded-lg border border-yellow-300 flex items-center gap-2">
                    <span class="text-lg">{"💡"}</span>{ content.deposit_tip.clone() }
                </p>
                <div class="space-y-5 mb-6">
                    { for content.regions.iter().map(|region| html! {
                        <div key={region.name.clone()}>
                            <h3 class="font-bold text-red-700 border-b-2 border-red-100 pb-1 mb-2 inline-block">{ format!("【{}】", region.name) }</h3>
                            <ul class="list-disc list-inside text-gray-700 space-y-1.5 text-sm ml-1">
                                { for region.branches.iter().map(|branch| html! { <li>{ branch.clone() }</li> }) }
                            </ul>
                        </div>
                    }) }
                </div>

                <div class="border-t border-red-100 pt-4">
                    <h3 class="font-bold text-red-800 mb-3">{"各大銀行分行及存鈔機搜尋："}</h3>
                    <div class="grid grid-cols-2 sm:grid-cols-3 gap-3">
                        { for content.bank_locators.iter().map(|link| outbound_link(
                            link,
                            "flex items-center justify-center p-2 bg-gray-50 hover:bg-red-50 border border-gray-200 hover:border-red-300 rounded-lg text-sm text-gray-700 hover:text-red-700 transition-colors font-medium",
                        )) }
                    </div>
                </div>
            </div>
        },
    )
}

#[function_component(CharityLinks)]
pub fn charity_links(props: &ContentProps) -> Html {
    section_card(
        icon_heart("w-6 h-6 text-yellow-300"),
        "分享祝福：支持慈善機構",
        html! {
            <div class="p-4">
                <div class="grid grid-cols-2 sm:grid-cols-3 gap-3">
                    { for props.content.charities.iter().map(|link| outbound_link(
                        link,
                        "block bg-red-50 text-red-800 font-medium p-3 rounded-lg text-center border border-red-100 text-sm hover:bg-red-100 transition-colors",
                    )) }
                </div>
            </div>
        },
    )
}
