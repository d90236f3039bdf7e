//! Static translation tables and the language context.
//!
//! Every visible string on the page is looked up by key. A key missing from
//! the active language falls back to Hungarian, and a key missing from every
//! table is shown as-is so gaps are easy to spot on the page.

use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    Hu,
    Ro,
    En,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Hu, Language::Ro, Language::En];

    pub fn code(self) -> &'static str {
        match self {
            Language::Hu => "hu",
            Language::Ro => "ro",
            Language::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
    }

    pub fn flag(self) -> &'static str {
        match self {
            Language::Hu => config::assets::HUNGARY,
            Language::Ro => config::assets::ROMANIA,
            Language::En => config::assets::ENGLAND,
        }
    }

    fn lookup(self, key: &str) -> Option<&'static str> {
        match self {
            Language::Hu => hu(key),
            Language::Ro => ro(key),
            Language::En => en(key),
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        config::DEFAULT_LANGUAGE
    }
}

pub fn translate<'a>(lang: Language, key: &'a str) -> &'a str {
    lang.lookup(key)
        .or_else(|| Language::Hu.lookup(key))
        .unwrap_or(key)
}

/// What the root component publishes: the active language and the setter.
#[derive(Clone, PartialEq)]
pub struct I18n {
    pub language: Language,
    pub set_language: Callback<Language>,
}

impl I18n {
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        translate(self.language, key)
    }
}

#[hook]
pub fn use_i18n() -> I18n {
    use_context::<I18n>().unwrap_or_else(|| I18n {
        language: Language::default(),
        set_language: Callback::from(|_| ()),
    })
}

/// The `lang` attribute the page was served with, if it names a supported language.
fn initial_language() -> Language {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|root| root.get_attribute("lang"))
        .and_then(|code| Language::from_code(&code))
        .unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct I18nProviderProps {
    pub children: Children,
}

#[function_component(I18nProvider)]
pub fn i18n_provider(props: &I18nProviderProps) -> Html {
    let language = use_state(initial_language);

    let set_language = {
        let language = language.clone();
        Callback::from(move |lang: Language| {
            log::info!("Switching language to {}", lang.code());
            language.set(lang);
        })
    };

    {
        let lang = *language;
        use_effect_with_deps(
            move |lang| {
                if let Some(root) = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.document_element())
                {
                    let _ = root.set_attribute("lang", lang.code());
                }
                || ()
            },
            lang,
        );
    }

    let ctx = I18n {
        language: *language,
        set_language,
    };

    html! {
        <ContextProvider<I18n> context={ctx}>
            { for props.children.iter() }
        </ContextProvider<I18n>>
    }
}

fn hu(key: &str) -> Option<&'static str> {
    Some(match key {
        "nav.intro" => "Bemutatkozás",
        "nav.services" => "Szolgáltatások",
        "nav.faq" => "Gyakori kérdések",
        "nav.references" => "Referenciák",
        "nav.contact" => "Elérhetőség",
        "nav.booking" => "Időpontfoglalás",
        "nav.menu" => "Menü",

        "hero.title" => "Prémium autókozmetika Székelyudvarhelyen",
        "hero.subtitle" => "A P-Line Car Detail célja, hogy autód kívül-belül újra a legjobb formáját mutassa. Minőségi termékekkel, türelemmel és odafigyeléssel dolgozunk, legyen szó egy gyors külső mosásról vagy teljes belső felújításról.",

        "service.title1" => "Külső kézi mosás",
        "service.serv1" => "Aktív habos előmosás, kétvödrös kézi mosás, felni- és gumitisztítás, szárítás mikroszálas kendővel.",
        "service.title2" => "Belső takarítás",
        "service.serv2" => "Porszívózás, műszerfal és burkolatok tisztítása, ablakok belső tisztítása, illatosítás.",
        "service.title3" => "Kárpittisztítás",
        "service.serv3" => "Ülések és szőnyegek mélytisztítása extrakciós géppel, foltok eltávolítása.",
        "service.title4" => "Polírozás",
        "service.serv4" => "Egylépcsős gépi polírozás a finom karcok és a fényvesztés ellen, wax védelemmel.",
        "service.title5" => "Fényszóró-polírozás",
        "service.serv5" => "Bemattult, sárgult fényszórók visszapolírozása és UV-védelme.",
        "service.title6" => "Ózonos fertőtlenítés",
        "service.serv6" => "Szagtalanítás és fertőtlenítés ózongenerátorral, a klímarendszerrel együtt.",
        "service.gift1" => "Ajándék a belső takarítás mellé",
        "service.gift2" => "Ajándék a teljes csomag mellé",

        "questions.faq1.q1" => "Mennyi ideig tart egy teljes autókozmetika?",
        "questions.faq1.a1" => "Az autó méretétől és állapotától függően általában 3-6 óra.",
        "questions.faq2.q2" => "Szükséges előre időpontot foglalni?",
        "questions.faq2.a2" => "Igen, telefonon vagy e-mailben érdemes legalább néhány nappal korábban egyeztetni.",
        "questions.faq3.q3" => "Milyen termékeket használtok?",
        "questions.faq3.a3" => "Kizárólag professzionális, pH-semleges és fényezésbarát autóápolási termékekkel dolgozunk.",
        "questions.faq4.q4" => "Meg kell várnom az autót?",
        "questions.faq4.a4" => "Nem szükséges, a kész autóról értesítést küldünk.",
        "questions.faq5.q5" => "Hogyan lehet fizetni?",
        "questions.faq5.a5" => "Készpénzzel és bankkártyával is fizethetsz a helyszínen.",
        "questions.faq6.q6" => "Milyen gyakran ajánlott a polírozás?",
        "questions.faq6.a6" => "Átlagos használat mellett évente egyszer, rendszeres kézi mosással kiegészítve.",
        "questions.faq7.q7" => "Eltávolítható minden folt a kárpitból?",
        "questions.faq7.a7" => "A legtöbb folt igen, de a régi, beleivódott szennyeződéseknél nem garantálható a teljes eltüntetés.",
        "questions.faq8.q8" => "Lehet ajándékutalványt vásárolni?",
        "questions.faq8.a8" => "Igen, bármelyik szolgáltatásunkra vagy tetszőleges összegre kérhetsz utalványt.",

        "reference.ref1" => "Teljes külső és belső tisztítás, polírozással.",
        "reference.ref2" => "Külső kézi mosás és fényszóró-polírozás.",
        "reference.ref3" => "Kárpittisztítás és ózonos fertőtlenítés.",
        "reference.open" => "Galéria megnyitása",

        "contact.location" => "Helyszín ikon",
        "contact.phone" => "Telefon ikon",
        "contact.email" => "E-mail ikon",

        "ui.show_more" => "Továbbiak megjelenítése",
        "ui.show_less" => "Kevesebb megjelenítése",
        "ui.more" => "Továbbiak",
        "ui.less" => "Kevesebb",
        "ui.back_to_top" => "Vissza a tetejére",
        "ui.theme_toggle" => "Sötét mód váltása",
        "ui.close" => "Bezárás",
        "ui.next" => "Következő kép",
        "ui.prev" => "Előző kép",

        "about.text" => "P-Line Car Detail. Minden jog fenntartva.",
        _ => return None,
    })
}

fn ro(key: &str) -> Option<&'static str> {
    Some(match key {
        "nav.intro" => "Despre noi",
        "nav.services" => "Servicii",
        "nav.faq" => "Întrebări frecvente",
        "nav.references" => "Referințe",
        "nav.contact" => "Contact",
        "nav.booking" => "Programare",
        "nav.menu" => "Meniu",

        "hero.title" => "Detailing auto premium în Odorheiu Secuiesc",
        "hero.subtitle" => "P-Line Car Detail readuce mașina ta la cea mai bună formă, pe interior și pe exterior. Lucrăm cu produse de calitate, cu răbdare și atenție la detalii, de la o spălare rapidă până la o recondiționare completă a interiorului.",

        "service.title1" => "Spălare exterioară manuală",
        "service.serv1" => "Prespălare cu spumă activă, spălare manuală cu două găleți, curățarea jantelor și a anvelopelor, uscare cu lavete din microfibră.",
        "service.title2" => "Curățare interioară",
        "service.serv2" => "Aspirare, curățarea bordului și a ornamentelor, geamuri pe interior, odorizare.",
        "service.title3" => "Curățare tapițerie",
        "service.serv3" => "Curățare în profunzime a scaunelor și a covorașelor prin extracție, îndepărtarea petelor.",
        "service.title4" => "Polish",
        "service.serv4" => "Polish mecanic într-o etapă împotriva zgârieturilor fine și a pierderii luciului, cu protecție cu ceară.",
        "service.title5" => "Polish faruri",
        "service.serv5" => "Recondiționarea farurilor mate sau îngălbenite și protecție UV.",
        "service.title6" => "Dezinfecție cu ozon",
        "service.serv6" => "Eliminarea mirosurilor și dezinfecție cu generator de ozon, inclusiv sistemul de climatizare.",
        "service.gift1" => "Cadou la curățarea interioară",
        "service.gift2" => "Cadou la pachetul complet",

        "questions.faq1.q1" => "Cât durează un detailing complet?",
        "questions.faq1.a1" => "În funcție de dimensiunea și starea mașinii, de obicei între 3 și 6 ore.",
        "questions.faq2.q2" => "Este nevoie de programare?",
        "questions.faq2.a2" => "Da, vă recomandăm să ne contactați telefonic sau prin e-mail cu câteva zile înainte.",
        "questions.faq3.q3" => "Ce produse folosiți?",
        "questions.faq3.a3" => "Folosim exclusiv produse profesionale, cu pH neutru, sigure pentru vopsea.",
        "questions.faq4.q4" => "Trebuie să aștept mașina?",
        "questions.faq4.a4" => "Nu este necesar, vă anunțăm când mașina este gata.",
        "questions.faq5.q5" => "Cum se poate plăti?",
        "questions.faq5.a5" => "Puteți plăti numerar sau cu cardul, la fața locului.",
        "questions.faq6.q6" => "Cât de des este recomandat polish-ul?",
        "questions.faq6.a6" => "La o utilizare obișnuită, o dată pe an, împreună cu spălări manuale regulate.",
        "questions.faq7.q7" => "Se pot îndepărta toate petele din tapițerie?",
        "questions.faq7.a7" => "Majoritatea da, dar la petele vechi și pătrunse adânc nu putem garanta îndepărtarea completă.",
        "questions.faq8.q8" => "Se pot cumpăra vouchere cadou?",
        "questions.faq8.a8" => "Da, puteți cere un voucher pentru orice serviciu sau pentru o sumă la alegere.",

        "reference.ref1" => "Curățare completă exterioară și interioară, cu polish.",
        "reference.ref2" => "Spălare exterioară manuală și polish faruri.",
        "reference.ref3" => "Curățare tapițerie și dezinfecție cu ozon.",
        "reference.open" => "Deschide galeria",

        "contact.location" => "Pictogramă locație",
        "contact.phone" => "Pictogramă telefon",
        "contact.email" => "Pictogramă e-mail",

        "ui.show_more" => "Afișează mai mult",
        "ui.show_less" => "Afișează mai puțin",
        "ui.more" => "Mai mult",
        "ui.less" => "Mai puțin",
        "ui.back_to_top" => "Înapoi sus",
        "ui.theme_toggle" => "Comută modul întunecat",
        "ui.close" => "Închide",
        "ui.next" => "Imaginea următoare",
        "ui.prev" => "Imaginea anterioară",

        "about.text" => "P-Line Car Detail. Toate drepturile rezervate.",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    Some(match key {
        "nav.intro" => "About us",
        "nav.services" => "Services",
        "nav.faq" => "FAQ",
        "nav.references" => "References",
        "nav.contact" => "Contact",
        "nav.booking" => "Book now",
        "nav.menu" => "Menu",

        "hero.title" => "Premium car detailing in Odorheiu Secuiesc",
        "hero.subtitle" => "P-Line Car Detail brings your car back to its best, inside and out. We work with quality products, patience and attention to detail, whether it is a quick exterior wash or a full interior restoration.",

        "service.title1" => "Exterior hand wash",
        "service.serv1" => "Snow foam pre-wash, two-bucket hand wash, wheel and tyre cleaning, microfibre drying.",
        "service.title2" => "Interior cleaning",
        "service.serv2" => "Vacuuming, dashboard and trim cleaning, inside windows, fragrance.",
        "service.title3" => "Upholstery cleaning",
        "service.serv3" => "Deep cleaning of seats and carpets with an extraction machine, stain removal.",
        "service.title4" => "Machine polishing",
        "service.serv4" => "Single-stage machine polish against fine scratches and dull paint, finished with wax.",
        "service.title5" => "Headlight restoration",
        "service.serv5" => "Polishing of hazy or yellowed headlights with UV protection.",
        "service.title6" => "Ozone treatment",
        "service.serv6" => "Odour removal and disinfection with an ozone generator, including the air conditioning.",
        "service.gift1" => "Free with interior cleaning",
        "service.gift2" => "Free with the full package",

        "questions.faq1.q1" => "How long does a full detail take?",
        "questions.faq1.a1" => "Usually 3 to 6 hours, depending on the size and condition of the car.",
        "questions.faq2.q2" => "Do I need to book in advance?",
        "questions.faq2.a2" => "Yes, please get in touch by phone or e-mail a few days ahead.",
        "questions.faq3.q3" => "What products do you use?",
        "questions.faq3.a3" => "Only professional, pH-neutral, paint-safe car care products.",
        "questions.faq4.q4" => "Do I have to wait for my car?",
        "questions.faq4.a4" => "No, we will let you know as soon as it is ready.",
        "questions.faq5.q5" => "How can I pay?",
        "questions.faq5.a5" => "Cash and card are both accepted on site.",
        "questions.faq6.q6" => "How often should a car be polished?",
        "questions.faq6.a6" => "With normal use once a year, together with regular hand washes.",
        "questions.faq7.q7" => "Can every stain be removed from the upholstery?",
        "questions.faq7.a7" => "Most of them, but old stains that have soaked in cannot always be removed completely.",
        "questions.faq8.q8" => "Can I buy a gift voucher?",
        "questions.faq8.a8" => "Yes, vouchers are available for any service or for an amount of your choice.",

        "reference.ref1" => "Full exterior and interior clean with polishing.",
        "reference.ref2" => "Exterior hand wash and headlight restoration.",
        "reference.ref3" => "Upholstery cleaning and ozone treatment.",
        "reference.open" => "Open gallery",

        "contact.location" => "Location icon",
        "contact.phone" => "Phone icon",
        "contact.email" => "E-mail icon",

        "ui.show_more" => "Show more",
        "ui.show_less" => "Show less",
        "ui.more" => "More",
        "ui.less" => "Less",
        "ui.back_to_top" => "Back to top",
        "ui.theme_toggle" => "Toggle dark mode",
        "ui.close" => "Close",
        "ui.next" => "Next image",
        "ui.prev" => "Previous image",

        "about.text" => "P-Line Car Detail. All rights reserved.",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: &[&str] = &[
        "nav.intro",
        "nav.services",
        "nav.faq",
        "nav.references",
        "nav.contact",
        "nav.booking",
        "hero.title",
        "hero.subtitle",
        "service.gift1",
        "service.gift2",
        "questions.faq8.q8",
        "reference.ref3",
        "ui.show_more",
        "ui.show_less",
        "about.text",
    ];

    #[test]
    fn every_language_covers_the_common_keys() {
        for lang in Language::ALL {
            for key in KEYS {
                assert!(lang.lookup(key).is_some(), "{} missing {}", lang.code(), key);
            }
        }
    }

    #[test]
    fn translate_picks_active_language() {
        assert_eq!(translate(Language::En, "nav.faq"), "FAQ");
        assert_eq!(translate(Language::Hu, "nav.faq"), "Gyakori kérdések");
        assert_eq!(translate(Language::Ro, "nav.contact"), "Contact");
    }

    #[test]
    fn unknown_key_is_returned_verbatim() {
        assert_eq!(translate(Language::Ro, "does.not.exist"), "does.not.exist");
    }

    #[test]
    fn language_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("EN"), Some(Language::En));
        assert_eq!(Language::from_code("de"), None);
    }

    #[test]
    fn default_language_is_hungarian() {
        assert_eq!(Language::default(), Language::Hu);
    }
}
