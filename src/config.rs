use crate::i18n::Language;
use crate::theme::Theme;

/// localStorage key holding the dark mode flag as a JSON boolean.
pub const THEME_STORAGE_KEY: &str = "darkMode";

pub const DEFAULT_THEME: Theme = Theme::Dark;
pub const DEFAULT_LANGUAGE: Language = Language::Hu;

/// Distance in px from the viewport top of the line a section has to
/// straddle to count as the active one.
pub const ACTIVE_REGION_LINE: f64 = 150.0;

/// Observer threshold for the fade-in. Sections too tall to ever reach it
/// count as seen as soon as they start intersecting.
pub const SEEN_THRESHOLD: f64 = 0.2;

pub const SCROLL_THROTTLE_MS: u32 = 50;
pub const SCROLL_TO_TOP_THRESHOLD: f64 = 200.0;

pub const SERVICES_PREVIEW: usize = 3;
pub const FAQ_PREVIEW: usize = 3;
pub const REFERENCES_PREVIEW: usize = 2;

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}

pub mod assets {
    pub const HERO_LIGHT: &str = "/ben-duke-2KT5xGoFf3I-unsplash.jpg";
    pub const HERO_DARK: &str = "/tai-s-captures-MU85YmmGzOg-unsplash.jpg";
    pub const LOGO_LIGHT: &str = "/p_linecardetail_whiteemblem.png";
    pub const LOGO_DARK: &str = "/p_linecardetail_blackemblem.png";

    pub const LEXUS_EXTERIOR: &str = "/LexusIS300h-finish-exterior1.jpeg";
    pub const LEXUS_INTERIOR: &str = "/LexusIS300h-finish-interior1.jpeg";
    pub const MERCEDES_EXTERIOR: &str = "/MercedesBenzGLA200-finish-exterior1.jpeg";
    pub const MERCEDES_INTERIOR: &str = "/MercedesBenzGLA200-finish-interior1.jpeg";
    pub const PASSAT_INTERIOR: &str = "/VolkswagenPASSAT2.0TDI-interior1.jpeg";
    pub const PASSAT_EXTERIOR: &str = "/VolkswagenPASSAT2.0TDI-exterior1.jpeg";
    pub const OCTAVIA_EXTERIOR: &str = "/SkodaOCTAVIAexterior1.jpeg";

    pub const TIKTOK: &str = "/tik-tok.png";
    pub const INSTAGRAM: &str = "/instagram.png";
    pub const FACEBOOK: &str = "/facebook.png";
    pub const HOME: &str = "/up-arrow.png";
    pub const SUN: &str = "/light.png";
    pub const MOON: &str = "/moon.png";
    pub const PLUS: &str = "/plus.png";
    pub const MINUS: &str = "/minus.png";
    pub const LOCATION: &str = "/map.png";
    pub const MOBILE: &str = "/phone.png";
    pub const EMAIL: &str = "/mail.png";
    pub const HUNGARY: &str = "/hungary.png";
    pub const ROMANIA: &str = "/romania.png";
    pub const ENGLAND: &str = "/united-kingdom.png";
}

pub mod contact {
    pub const LOCATION: &str = "Székelyudvarhely, RO";
    pub const PHONE: &str = "+40 772 079 191";
    pub const EMAIL: &str = "info@plinecardetail.com";
    pub const TIKTOK_URL: &str = "https://www.tiktok.com/@p_linecardetail";
    pub const INSTAGRAM_URL: &str = "https://www.instagram.com/p_linecardetail/";
    pub const FACEBOOK_URL: &str = "https://facebook.com";
}
