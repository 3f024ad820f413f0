use yew::prelude::*;

use super::icons::icon_dollar_sign;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="min-h-screen bg-red-50 font-sans text-gray-900 selection:bg-red-200">
            <Header />
            <main class="max-w-3xl mx-auto p-4 pb-20">
                { for props.children.iter() }
            </main>
        </div>
    }
}

#[function_component(Header)]
fn header() -> Html {
    html! {
        <header class="bg-gradient-to-r from-red-700 to-red-600 text-yellow-400 p-4 shadow-md sticky top-0 z-10">
            <div class="max-w-3xl mx-auto flex items-center justify-center gap-2">
                { icon_dollar_sign("w-8 h-8") }
                <h1 class="text-2xl font-bold tracking-wider text-center">{"香港農曆新年利是計算機"}</h1>
            </div>
        </header>
    }
}

/// White card with a red title bar, used by every section on the page.
pub fn section_card(icon: Html, title: &'static str, children: Html) -> Html {
    html! {
        <section class="bg-white rounded-2xl shadow-sm border border-red-100 overflow-hidden">
            <div class="bg-red-600 text-white p-4 flex items-center gap-2">
                { icon }
                <h2 class="text-xl font-bold">{ title }</h2>
            </div>
            { children }
        </section>
    }
}
