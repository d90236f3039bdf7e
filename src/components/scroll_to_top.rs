use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::i18n::use_i18n;

pub fn should_show(scroll_y: f64) -> bool {
    scroll_y > config::SCROLL_TO_TOP_THRESHOLD
}

#[function_component(ScrollToTop)]
pub fn scroll_to_top() -> Html {
    let i18n = use_i18n();
    // Listener is attached and removed by the hook itself.
    let (_, scroll_y) = use_window_scroll();

    if !should_show(scroll_y) {
        return html! {};
    }

    let onclick = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    html! {
        <button class="scroll-to-top" onclick={onclick} aria-label={i18n.t("ui.back_to_top").to_string()}>
            <img src={config::assets::HOME} alt="Home" />
        </button>
    }
}

pub const STYLE: &str = r#"
.scroll-to-top {
    position: fixed;
    bottom: 1.5rem;
    right: 1.5rem;
    z-index: 40;
    padding: 0.75rem;
    border: none;
    border-radius: 9999px;
    background: var(--glass-bg);
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.15);
    cursor: pointer;
    transition: transform 0.3s;
}
.scroll-to-top:hover {
    transform: scale(1.1);
}
.scroll-to-top img {
    width: 1.5rem;
    height: 1.5rem;
    object-fit: contain;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_only_past_threshold() {
        assert!(!should_show(0.0));
        assert!(!should_show(200.0));
        assert!(should_show(200.5));
        assert!(should_show(1500.0));
    }
}
