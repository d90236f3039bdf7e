use yew::prelude::*;

use crate::i18n::use_i18n;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaqEntry {
    pub question_key: &'static str,
    pub answer_key: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub entry: FaqEntry,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let i18n = use_i18n();
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", (*is_open).then(|| "open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={is_open.to_string()}>
                <h4>{ i18n.t(props.entry.question_key) }</h4>
                <span class="toggle-icon">{"▼"}</span>
            </button>
            <div class="faq-answer">
                <p>{ i18n.t(props.entry.answer_key) }</p>
            </div>
        </div>
    }
}

pub const STYLE: &str = r#"
.faq-item {
    min-height: 90px;
    padding: 1.25rem;
    border-radius: 0.75rem;
    background: var(--card-bg);
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
    transition: box-shadow 0.5s, background-color 0.5s;
}
.faq-item:hover {
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
}
.faq-question {
    width: 100%;
    display: flex;
    justify-content: space-between;
    align-items: center;
    text-align: left;
    background: none;
    border: none;
    cursor: pointer;
    color: inherit;
}
.faq-question h4 {
    font-size: 1rem;
    font-weight: 500;
    color: var(--heading);
}
.toggle-icon {
    color: var(--muted);
    transition: transform 0.5s;
}
.faq-item.open .toggle-icon {
    transform: rotate(180deg);
}
.faq-answer {
    max-height: 0;
    opacity: 0;
    overflow: hidden;
    transition: max-height 0.7s ease-in-out, opacity 0.7s ease-in-out, margin 0.7s;
}
.faq-item.open .faq-answer {
    max-height: 10rem;
    opacity: 1;
    margin-top: 0.75rem;
}
.faq-answer p {
    font-size: 0.875rem;
    line-height: 1.6;
    color: var(--muted);
}
"#;
