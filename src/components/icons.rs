use yew::prelude::*;

fn icon_base(path: &'static str, class: &'static str) -> Html {
    html! {
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class={class}>
            <path d={path}></path>
        </svg>
    }
}

pub fn icon_dollar_sign(class: &'static str) -> Html {
    icon_base("M12 1v22M17 5H9.5a3.5 3.5 0 000 7h5a3.5 3.5 0 010 7H6", class)
}
pub fn icon_calculator(class: &'static str) -> Html {
    icon_base("M6 2h12a2 2 0 012 2v16a2 2 0 01-2 2H6a2 2 0 01-2-2V4a2 2 0 012-2zM8 6h8M16 14v4M16 10h.01M12 10h.01M8 10h.01M12 14h.01M8 14h.01M12 18h.01M8 18h.01", class)
}
pub fn icon_file_text(class: &'static str) -> Html {
    icon_base("M14 2H6a2 2 0 00-2 2v16a2 2 0 002 2h12a2 2 0 002-2V8zM14 2v6h6M16 13H8M16 17H8M10 9H8", class)
}
pub fn icon_arrow_left(class: &'static str) -> Html {
    icon_base("M19 12H5M12 19l-7-7 7-7", class)
}
pub fn icon_map_pin(class: &'static str) -> Html {
    icon_base("M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0118 0zM12 13a3 3 0 100-6 3 3 0 000 6z", class)
}
pub fn icon_heart(class: &'static str) -> Html {
    icon_base("M20.8 4.6a5.5 5.5 0 00-7.8 0L12 5.7l-1-1.1a5.5 5.5 0 00-7.8 7.8l1 1.1L12 21l7.8-7.5 1-1.1a5.5 5.5 0 000-7.8z", class)
}
pub fn icon_piggy_bank(class: &'static str) -> Html {
    icon_base("M19 5c-1.5 0-2.8 1.4-3 2-3.5-1.5-11-.3-11 5 0 1.8 0 3 2 4.5V20h4v-2h3v2h4v-4c1-.5 1.7-1 2-2h2v-4h-2c0-1-.5-1.5-1-2V5zM2 9v1c0 1.1.9 2 2 2h1", class)
}
pub fn icon_trending_up(class: &'static str) -> Html {
    icon_base("M23 6l-9.5 9.5-5-5L1 18M17 6h6v6", class)
}
pub fn icon_chevron_down(class: &'static str) -> Html {
    icon_base("M6 9l6 6 6-6", class)
}
pub fn icon_chevron_up(class: &'static str) -> Html {
    icon_base("M18 15l-6-6-6 6", class)
}
