pub mod expandable_section;
pub mod faq_item;
pub mod lightbox;
pub mod reference_card;
pub mod scroll_to_top;
pub mod service_card;

pub use expandable_section::ExpandableSection;
pub use faq_item::{FaqEntry, FaqItem};
pub use lightbox::Lightbox;
pub use reference_card::{Reference, ReferenceCard};
pub use scroll_to_top::ScrollToTop;
pub use service_card::{PriceLabel, Service, ServiceCard};

/// Every component stylesheet, rendered once by the page.
pub fn styles() -> String {
    [
        expandable_section::STYLE,
        faq_item::STYLE,
        lightbox::STYLE,
        reference_card::STYLE,
        scroll_to_top::STYLE,
        service_card::STYLE,
    ]
    .concat()
}
