use log::info;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod config;
mod i18n;
mod regions;
mod theme;
mod pages {
    pub mod landing;
}

use i18n::{use_i18n, I18nProvider, Language};
use pages::landing::Landing;
use regions::{navigate_to, RegionId};
use theme::{apply_theme, use_theme, BrowserStore, ThemeContext, ThemeController};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Unknown path, rendering landing page");
            html! { <Landing /> }
        }
    }
}

const NAV_ITEMS: [(RegionId, &str); 4] = [
    (RegionId::Intro, "nav.intro"),
    (RegionId::Services, "nav.services"),
    (RegionId::Faq, "nav.faq"),
    (RegionId::References, "nav.references"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let i18n = use_i18n();
    let theme = use_theme();
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Navigating always closes the mobile menu.
    let nav_to = |region: RegionId| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigate_to(region);
            menu_open.set(false);
        })
    };

    let toggle_theme = {
        let toggle = theme.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    let dark = theme.theme.is_dark();
    let theme_button = html! {
        <button class="theme-toggle" onclick={toggle_theme} aria-label={i18n.t("ui.theme_toggle").to_string()}>
            <img
                src={if dark { config::assets::SUN } else { config::assets::MOON }}
                alt="mode switch"
                class={classes!("theme-icon", dark.then(|| "rotated"))}
            />
        </button>
    };

    let links = |class: &'static str| -> Html {
        html! {
            <>
                {
                    for NAV_ITEMS.iter().map(|(region, key)| html! {
                        <button class={class} onclick={nav_to(*region)}>{ i18n.t(key) }</button>
                    })
                }
                <button class={classes!(class, "nav-contact")} onclick={nav_to(RegionId::Contact)}>
                    { i18n.t("nav.contact") }
                </button>
            </>
        }
    };

    html! {
        <header class="top-nav">
            <div class="nav-content">
                <div class="language-flags">
                    {
                        for Language::ALL.iter().map(|lang| {
                            let lang = *lang;
                            let set_language = i18n.set_language.clone();
                            let onclick = Callback::from(move |_: MouseEvent| set_language.emit(lang));
                            html! {
                                <button
                                    class={classes!("flag", (i18n.language == lang).then(|| "active"))}
                                    onclick={onclick}
                                >
                                    <img src={lang.flag()} alt={lang.code().to_uppercase()} />
                                </button>
                            }
                        })
                    }
                </div>

                <nav class="nav-links">
                    { links("nav-link") }
                    { theme_button.clone() }
                </nav>

                <div class="nav-mobile">
                    { theme_button }
                    <button class="burger-menu" onclick={toggle_menu} aria-label={i18n.t("nav.menu").to_string()}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </div>
            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { links("mobile-link") }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                :root {
                    --page-bg: #ffffff;
                    --section-bg: #f9fafb;
                    --card-bg: #ffffff;
                    --button-bg: #e5e7eb;
                    --glass-bg: rgba(255, 255, 255, 0.7);
                    --border: #d1d5db;
                    --heading: #111827;
                    --muted: #4b5563;
                    --muted-strong: #374151;
                }
                html.dark {
                    --page-bg: #030712;
                    --section-bg: #111827;
                    --card-bg: #1f2937;
                    --button-bg: #1f2937;
                    --glass-bg: rgba(17, 24, 39, 0.7);
                    --border: #4b5563;
                    --heading: #f9fafb;
                    --muted: #d1d5db;
                    --muted-strong: #9ca3af;
                }
                body {
                    margin: 0;
                    font-family: sans-serif;
                    background: var(--page-bg);
                    color: var(--muted-strong);
                    transition: background-color 0.5s ease-in-out, color 0.5s ease-in-out;
                }
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 40;
                    background: var(--glass-bg);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    transition: background-color 0.5s ease-in-out;
                }
                .nav-content {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                    height: 4rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .language-flags {
                    display: flex;
                    gap: 0.5rem;
                }
                .flag {
                    padding: 0;
                    border: none;
                    background: none;
                    cursor: pointer;
                    transition: transform 0.3s;
                }
                .flag:hover {
                    transform: scale(1.1);
                }
                .flag img {
                    width: 1.5rem;
                    height: 1.5rem;
                    border-radius: 0.125rem;
                    opacity: 0.7;
                }
                .flag.active img {
                    opacity: 1;
                }
                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .nav-link,
                .mobile-link {
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: var(--muted-strong);
                }
                .nav-link:hover {
                    color: var(--heading);
                }
                .nav-link.nav-contact {
                    padding: 0.5rem 1rem;
                    border: 1px solid var(--border);
                    border-radius: 0.375rem;
                }
                .theme-toggle {
                    padding: 0.5rem;
                    border: 1px solid var(--border);
                    border-radius: 0.375rem;
                    background: none;
                    cursor: pointer;
                }
                .theme-icon {
                    width: 1.5rem;
                    height: 1.5rem;
                    transition: transform 0.5s;
                }
                .theme-icon.rotated {
                    transform: rotate(180deg);
                }
                .nav-mobile {
                    display: none;
                    align-items: center;
                    gap: 0.5rem;
                }
                .burger-menu {
                    display: flex;
                    flex-direction: column;
                    gap: 4px;
                    padding: 0.5rem;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 1.5rem;
                    height: 2px;
                    background: var(--heading);
                }
                .mobile-menu {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    padding: 0 1rem 1rem;
                }
                .mobile-link {
                    padding: 0.5rem 0;
                    text-align: left;
                }
                @media (max-width: 768px) {
                    .nav-links {
                        display: none;
                    }
                    .nav-mobile {
                        display: flex;
                    }
                }
                "#}
            </style>
        </header>
    }
}

#[function_component]
fn App() -> Html {
    let controller =
        use_mut_ref(|| ThemeController::load(BrowserStore::open(), config::DEFAULT_THEME));
    let theme = use_state(|| controller.borrow().theme());

    use_effect_with_deps(
        |theme| {
            apply_theme(*theme);
            || ()
        },
        *theme,
    );

    // Smooth scrolling for anchor jumps while the app is mounted.
    use_effect_with_deps(
        |_| {
            let root = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
                .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok());
            if let Some(root) = root.as_ref() {
                let _ = root.style().set_property("scroll-behavior", "smooth");
            }
            move || {
                if let Some(root) = root {
                    let _ = root.style().set_property("scroll-behavior", "auto");
                }
            }
        },
        (),
    );

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_: ()| {
            let next = controller.borrow_mut().toggle();
            info!("Theme switched to {:?}", next);
            theme.set(next);
        })
    };

    let theme_ctx = ThemeContext {
        theme: *theme,
        toggle,
    };

    html! {
        <BrowserRouter>
            <I18nProvider>
                <ContextProvider<ThemeContext> context={theme_ctx}>
                    <Nav />
                    <Switch<Route> render={switch} />
                </ContextProvider<ThemeContext>>
            </I18nProvider>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting P-Line landing page");
    yew::Renderer::<App>::new().render();
}
