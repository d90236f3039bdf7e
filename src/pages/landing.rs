use chrono::Datelike;
use yew::prelude::*;

use crate::components::{
    self, ExpandableSection, FaqEntry, FaqItem, Lightbox, PriceLabel, Reference, ReferenceCard,
    ScrollToTop, Service, ServiceCard,
};
use crate::config::{self, assets, contact};
use crate::i18n::use_i18n;
use crate::regions::{
    fade_class, navigate_to, use_active_region, use_seen_regions, ActiveRegion, RegionId,
};
use crate::theme::use_theme;

const SERVICES: [Service; 6] = [
    Service {
        title_key: "service.title1",
        description_key: "service.serv1",
        price: PriceLabel::Literal("50 lei"),
    },
    Service {
        title_key: "service.title2",
        description_key: "service.serv2",
        price: PriceLabel::Literal("50 lei"),
    },
    Service {
        title_key: "service.title3",
        description_key: "service.serv3",
        price: PriceLabel::Key("service.gift1"),
    },
    Service {
        title_key: "service.title4",
        description_key: "service.serv4",
        price: PriceLabel::Literal("100 lei"),
    },
    Service {
        title_key: "service.title5",
        description_key: "service.serv5",
        price: PriceLabel::Literal("25 lei"),
    },
    Service {
        title_key: "service.title6",
        description_key: "service.serv6",
        price: PriceLabel::Key("service.gift2"),
    },
];

const FAQ: [FaqEntry; 8] = [
    FaqEntry {
        question_key: "questions.faq1.q1",
        answer_key: "questions.faq1.a1",
    },
    FaqEntry {
        question_key: "questions.faq2.q2",
        answer_key: "questions.faq2.a2",
    },
    FaqEntry {
        question_key: "questions.faq3.q3",
        answer_key: "questions.faq3.a3",
    },
    FaqEntry {
        question_key: "questions.faq4.q4",
        answer_key: "questions.faq4.a4",
    },
    FaqEntry {
        question_key: "questions.faq5.q5",
        answer_key: "questions.faq5.a5",
    },
    FaqEntry {
        question_key: "questions.faq6.q6",
        answer_key: "questions.faq6.a6",
    },
    FaqEntry {
        question_key: "questions.faq7.q7",
        answer_key: "questions.faq7.a7",
    },
    FaqEntry {
        question_key: "questions.faq8.q8",
        answer_key: "questions.faq8.a8",
    },
];

const REFERENCES: [Reference; 4] = [
    Reference {
        title: "Lexus IS300h",
        note_key: "reference.ref1",
        images: &[assets::LEXUS_EXTERIOR, assets::LEXUS_INTERIOR],
    },
    Reference {
        title: "Mercedes-Benz GLA200",
        note_key: "reference.ref2",
        images: &[assets::MERCEDES_EXTERIOR, assets::MERCEDES_INTERIOR],
    },
    Reference {
        title: "Volkswagen PASSAT 2.0TDI",
        note_key: "reference.ref1",
        images: &[assets::PASSAT_INTERIOR, assets::PASSAT_EXTERIOR],
    },
    Reference {
        title: "Skoda OCTAVIA",
        note_key: "reference.ref3",
        images: &[assets::OCTAVIA_EXTERIOR],
    },
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let i18n = use_i18n();
    let theme = use_theme();
    let active = use_active_region();
    let seen = use_seen_regions();
    let gallery = use_state(|| None::<&'static [&'static str]>);

    let go_to = |region: RegionId| {
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigate_to(region);
        })
    };

    let section_class =
        |region: RegionId| classes!("content-section", fade_class(seen.is_seen(region)));

    let render_service = Callback::from(|(service, _): (Service, usize)| {
        html! { <ServiceCard service={service} /> }
    });
    let render_faq = Callback::from(|(entry, _): (FaqEntry, usize)| {
        html! { <FaqItem entry={entry} /> }
    });
    let render_reference = {
        let gallery = gallery.clone();
        Callback::from(move |(reference, _): (Reference, usize)| {
            let gallery = gallery.clone();
            let on_open =
                Callback::from(move |images: &'static [&'static str]| gallery.set(Some(images)));
            html! { <ReferenceCard reference={reference} on_open={on_open} /> }
        })
    };
    let close_gallery = {
        let gallery = gallery.clone();
        Callback::from(move |_: ()| gallery.set(None))
    };

    let (hero_bg, logo) = if theme.theme.is_dark() {
        (assets::HERO_DARK, assets::LOGO_LIGHT)
    } else {
        (assets::HERO_LIGHT, assets::LOGO_DARK)
    };
    let year = chrono::Local::now().year();

    html! {
        <ContextProvider<ActiveRegion> context={ActiveRegion(active)}>
            <main class="landing-page">
                <section
                    id={RegionId::Hero.anchor()}
                    class="hero"
                    style={format!("background-image: url('{}');", hero_bg)}
                >
                    <div class="hero-panel">
                        <img src={logo} alt="P-Line Car Detail logo" class="hero-logo" />
                        <p class="hero-title">{ i18n.t("hero.title") }</p>
                        <div class="hero-actions">
                            <button class="hero-secondary" onclick={go_to(RegionId::Services)}>
                                { i18n.t("nav.services") }
                            </button>
                            <button class="hero-cta" onclick={go_to(RegionId::Contact)}>
                                { i18n.t("nav.booking") }
                            </button>
                        </div>
                    </div>
                </section>

                <section id={RegionId::Intro.anchor()} class={section_class(RegionId::Intro)}>
                    <div class="intro-panel">
                        <h2>{ i18n.t("nav.intro") }</h2>
                        <p>{ i18n.t("hero.subtitle") }</p>
                    </div>
                </section>

                <section id={RegionId::Services.anchor()} class={section_class(RegionId::Services)}>
                    <h2>{ i18n.t("nav.services") }</h2>
                    <ExpandableSection<Service>
                        items={SERVICES.to_vec()}
                        render_item={render_service}
                        initial_count={config::SERVICES_PREVIEW}
                        section_id={RegionId::Services}
                    />
                </section>

                <section id={RegionId::Faq.anchor()} class={section_class(RegionId::Faq)}>
                    <h2>{ i18n.t("nav.faq") }</h2>
                    <ExpandableSection<FaqEntry>
                        items={FAQ.to_vec()}
                        render_item={render_faq}
                        initial_count={config::FAQ_PREVIEW}
                        section_id={RegionId::Faq}
                        columns={1}
                    />
                </section>

                <section id={RegionId::References.anchor()} class={section_class(RegionId::References)}>
                    <h2>{ i18n.t("nav.references") }</h2>
                    <ExpandableSection<Reference>
                        items={REFERENCES.to_vec()}
                        render_item={render_reference}
                        initial_count={config::REFERENCES_PREVIEW}
                        section_id={RegionId::References}
                        columns={2}
                    />
                </section>

                <section id={RegionId::Contact.anchor()} class="contact-section">
                    <div class="contact-inner">
                        <h2>{ i18n.t("nav.contact") }</h2>
                        <div class="contact-grid">
                            <div class="contact-item">
                                <img src={assets::LOCATION} alt={i18n.t("contact.location").to_string()} />
                                <p>{ contact::LOCATION }</p>
                            </div>
                            <div class="contact-item">
                                <img src={assets::MOBILE} alt={i18n.t("contact.phone").to_string()} />
                                <p><a href={format!("tel:{}", contact::PHONE.replace(' ', ""))}>{ contact::PHONE }</a></p>
                            </div>
                            <div class="contact-item">
                                <img src={assets::EMAIL} alt={i18n.t("contact.email").to_string()} />
                                <p><a href={format!("mailto:{}", contact::EMAIL)}>{ contact::EMAIL }</a></p>
                            </div>
                        </div>
                        <div class="social-links">
                            <a href={contact::TIKTOK_URL} target="_blank" rel="noopener noreferrer">
                                <img src={assets::TIKTOK} alt="TikTok" />
                            </a>
                            <a href={contact::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer">
                                <img src={assets::INSTAGRAM} alt="Instagram" />
                            </a>
                            <a href={contact::FACEBOOK_URL} target="_blank" rel="noopener noreferrer">
                                <img src={assets::FACEBOOK} alt="Facebook" />
                            </a>
                        </div>
                    </div>
                </section>

                <footer class="landing-footer">
                    { format!("© {} {}", year, i18n.t("about.text")) }
                </footer>

                <ScrollToTop />
                {
                    if let Some(images) = *gallery {
                        html! { <Lightbox images={images} on_close={close_gallery} /> }
                    } else {
                        html! {}
                    }
                }
            </main>
            <style>
                { format!("{}{}", PAGE_STYLE, components::styles()) }
            </style>
        </ContextProvider<ActiveRegion>>
    }
}

const PAGE_STYLE: &str = r#"
.landing-page {
    padding-top: 5rem;
}
.landing-page h2 {
    font-size: 1.5rem;
    font-weight: 600;
    margin-bottom: 2rem;
    color: var(--heading);
}
.hero {
    position: relative;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 3rem 0;
    background-size: cover;
    background-position: center;
    transition: background-image 0.5s ease-in-out;
}
.hero-panel {
    max-width: 42rem;
    margin: 0 auto;
    padding: 2rem;
    text-align: center;
    border-radius: 0.75rem;
    background: var(--glass-bg);
    backdrop-filter: blur(4px);
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
}
.hero-logo {
    width: 16rem;
    margin: 0 auto;
}
.hero-title {
    margin-top: 0.5rem;
    font-size: 1.125rem;
    color: var(--muted-strong);
}
.hero-actions {
    margin-top: 0.5rem;
    display: flex;
    justify-content: center;
    gap: 0.75rem;
}
.hero-secondary,
.hero-cta {
    padding: 0.75rem 1.5rem;
    border-radius: 0.375rem;
    cursor: pointer;
    transition: background-color 0.5s, color 0.5s;
}
.hero-secondary {
    background: var(--button-bg);
    border: 1px solid var(--border);
    color: var(--heading);
}
.hero-cta {
    background: var(--heading);
    border: none;
    color: var(--page-bg);
}
.content-section {
    max-width: 72rem;
    margin: 0 auto;
    padding: 4rem 2rem;
}
.fade-section {
    opacity: 0;
    transform: translateY(1.5rem);
    transition: opacity 1s ease-out, transform 1s ease-out;
}
.fade-section.visible {
    opacity: 1;
    transform: translateY(0);
}
.intro-panel {
    padding: 3rem;
    border-radius: 1rem;
    background: var(--card-bg);
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
}
.intro-panel p {
    max-width: 48rem;
    color: var(--muted-strong);
}
.contact-section {
    padding: 4rem 0;
    background: var(--section-bg);
}
.contact-inner {
    max-width: 72rem;
    margin: 0 auto;
    padding: 0 2rem;
}
.contact-inner h2 {
    text-align: center;
    font-size: 1.875rem;
}
.contact-grid {
    display: grid;
    grid-template-columns: repeat(3, minmax(0, 1fr));
    gap: 2rem;
    margin-bottom: 3rem;
    text-align: center;
}
@media (max-width: 768px) {
    .contact-grid {
        grid-template-columns: 1fr;
    }
}
.contact-item {
    display: flex;
    flex-direction: column;
    align-items: center;
    color: var(--muted-strong);
}
.contact-item img {
    width: 3rem;
    height: 3rem;
    margin-bottom: 1rem;
    transition: transform 0.3s, opacity 0.3s;
}
.contact-item a {
    color: inherit;
    text-decoration: none;
}
.social-links {
    display: flex;
    justify-content: center;
    gap: 3rem;
}
.social-links img,
.contact-item img {
    transition: transform 0.3s, opacity 0.3s;
}
.social-links img {
    width: 2.5rem;
    height: 2.5rem;
}
.social-links a:hover img,
.contact-item img:hover {
    transform: scale(1.1);
    opacity: 0.8;
}
html.dark .social-links img,
html.dark .contact-item img {
    filter: invert(1);
}
.landing-footer {
    padding: 2rem 0;
    text-align: center;
    font-size: 0.875rem;
    color: var(--muted);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_reference_has_a_preview() {
        assert!(REFERENCES.iter().all(|r| !r.images.is_empty()));
    }

    #[test]
    fn lists_are_longer_than_their_previews() {
        assert!(SERVICES.len() > config::SERVICES_PREVIEW);
        assert!(FAQ.len() > config::FAQ_PREVIEW);
        assert!(REFERENCES.len() > config::REFERENCES_PREVIEW);
    }
}
