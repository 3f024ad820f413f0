use web_sys::{ScrollBehavior, ScrollToOptions};

/// Display settings shared through context. Nothing is persisted between visits.
#[derive(Clone, Debug, PartialEq)]
pub struct AppSettings {
    pub currency_symbol: String,
    pub smooth_scroll: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            currency_symbol: "$".to_string(),
            smooth_scroll: true,
        }
    }
}

/// Brings the top of the page back into view after switching screens.
pub fn scroll_to_top(settings: &AppSettings) {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(if settings.smooth_scroll {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Instant
        });
        window.scroll_to_with_scroll_to_options(&options);
    }
}
