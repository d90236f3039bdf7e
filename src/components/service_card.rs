use yew::prelude::*;

use crate::i18n::use_i18n;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PriceLabel {
    Literal(&'static str),
    /// Gift vouchers and other translated labels.
    Key(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub title_key: &'static str,
    pub description_key: &'static str,
    pub price: PriceLabel,
}

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: Service,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let i18n = use_i18n();
    let service = props.service;
    let price = match service.price {
        PriceLabel::Literal(price) => price,
        PriceLabel::Key(key) => i18n.t(key),
    };

    html! {
        <div class="service-card">
            <div class="service-card-glow"></div>
            <h3>{ i18n.t(service.title_key) }</h3>
            <p class="service-description">{ i18n.t(service.description_key) }</p>
            <p class="service-price">{ price }</p>
        </div>
    }
}

pub const STYLE: &str = r#"
.service-card {
    position: relative;
    min-height: 180px;
    overflow: hidden;
    padding: 1.5rem;
    border-radius: 0.75rem;
    background: var(--card-bg);
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
    transition: box-shadow 0.5s, background-color 0.5s;
}
.service-card:hover {
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.15);
}
.service-card-glow {
    position: absolute;
    inset: 0;
    opacity: 0;
    background: linear-gradient(to right, #9ca3af, #374151);
    transition: opacity 0.7s;
}
.service-card:hover .service-card-glow {
    opacity: 0.1;
}
.service-card h3 {
    position: relative;
    font-size: 1.125rem;
    font-weight: 600;
    color: var(--heading);
}
.service-description {
    position: relative;
    margin-top: 0.5rem;
    font-size: 0.875rem;
    color: var(--muted);
}
.service-price {
    position: relative;
    margin-top: 0.75rem;
    font-size: 0.875rem;
    font-weight: 500;
    color: var(--muted-strong);
}
"#;
