use yew::prelude::*;

use crate::i18n::use_i18n;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reference {
    pub title: &'static str,
    pub note_key: &'static str,
    /// The first image is the card's preview.
    pub images: &'static [&'static str],
}

#[derive(Properties, PartialEq)]
pub struct ReferenceCardProps {
    pub reference: Reference,
    pub on_open: Callback<&'static [&'static str]>,
}

#[function_component(ReferenceCard)]
pub fn reference_card(props: &ReferenceCardProps) -> Html {
    let i18n = use_i18n();
    let reference = props.reference;

    let open = {
        let on_open = props.on_open.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(reference.images))
    };

    html! {
        <div class="reference-card">
            {
                if let Some(preview) = reference.images.first() {
                    html! {
                        <button class="reference-preview" onclick={open} aria-label={i18n.t("reference.open").to_string()}>
                            <img src={*preview} alt={reference.title} />
                        </button>
                    }
                } else {
                    html! {}
                }
            }
            <div class="reference-body">
                <h3>{ reference.title }</h3>
                <p>{ i18n.t(reference.note_key) }</p>
            </div>
        </div>
    }
}

pub const STYLE: &str = r#"
.reference-card {
    overflow: hidden;
    border-radius: 0.75rem;
    background: var(--card-bg);
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
    transition: background-color 0.5s;
}
.reference-preview {
    display: block;
    width: 100%;
    padding: 0;
    border: none;
    cursor: pointer;
}
.reference-preview img {
    width: 100%;
    height: 16rem;
    object-fit: cover;
}
.reference-body {
    padding: 1rem;
}
.reference-body h3 {
    font-size: 1.25rem;
    font-weight: 600;
    color: var(--heading);
}
.reference-body p {
    margin-top: 0.5rem;
    color: var(--muted);
}
"#;
