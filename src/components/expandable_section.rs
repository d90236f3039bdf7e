use std::ops::Range;

use yew::prelude::*;

use crate::config;
use crate::i18n::use_i18n;
use crate::regions::{ActiveRegion, RegionId};

/// Show-more/show-less state of one list section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Expansion {
    preview: usize,
    expanded: bool,
}

impl Expansion {
    pub fn new(preview: usize) -> Self {
        Self {
            preview,
            expanded: false,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Always a prefix of the list.
    pub fn visible_range(&self, len: usize) -> Range<usize> {
        if self.expanded {
            0..len
        } else {
            0..self.preview.min(len)
        }
    }

    /// Expanding would change nothing unless the list is longer than the preview.
    pub fn has_toggle(&self, len: usize) -> bool {
        len > self.preview
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Collapses when focus moved to another region. Returns whether the state
    /// changed.
    pub fn on_active_region_changed(&mut self, own: RegionId, active: Option<RegionId>) -> bool {
        match active {
            Some(active) if active != own && self.expanded => {
                self.expanded = false;
                true
            }
            _ => false,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ExpandableSectionProps<T: PartialEq + 'static> {
    pub items: Vec<T>,
    pub render_item: Callback<(T, usize), Html>,
    #[prop_or(config::SERVICES_PREVIEW)]
    pub initial_count: usize,
    pub section_id: RegionId,
    #[prop_or(3)]
    pub columns: usize,
}

#[function_component(ExpandableSection)]
pub fn expandable_section<T>(props: &ExpandableSectionProps<T>) -> Html
where
    T: PartialEq + Clone + 'static,
{
    let i18n = use_i18n();
    let expansion = use_state(|| Expansion::new(props.initial_count));
    let active = use_context::<ActiveRegion>().unwrap_or_default();

    // Runs only when the published region changes, never on a plain re-render.
    {
        let expansion = expansion.clone();
        let own = props.section_id;
        use_effect_with_deps(
            move |active: &ActiveRegion| {
                let mut next = *expansion;
                if next.on_active_region_changed(own, active.0) {
                    log::debug!("Collapsing #{} after scrolling away", own.anchor());
                    expansion.set(next);
                }
                || ()
            },
            active,
        );
    }

    let toggle = {
        let expansion = expansion.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let mut next = *expansion;
            next.toggle();
            expansion.set(next);
        })
    };

    let len = props.items.len();
    let range = expansion.visible_range(len);
    let expanded = expansion.is_expanded();

    html! {
        <div class="expandable-section">
            <div class="expandable-grid" style={format!("--columns: {}", props.columns.max(1))}>
                {
                    for props.items[range].iter().enumerate().map(|(index, item)| html! {
                        <div key={index.to_string()} class="expandable-item">
                            { props.render_item.emit((item.clone(), index)) }
                        </div>
                    })
                }
            </div>
            {
                if expansion.has_toggle(len) {
                    let (label, alt, icon) = if expanded {
                        (i18n.t("ui.show_less"), i18n.t("ui.less"), config::assets::MINUS)
                    } else {
                        (i18n.t("ui.show_more"), i18n.t("ui.more"), config::assets::PLUS)
                    };
                    html! {
                        <button
                            class={classes!("expand-toggle", expanded.then(|| "expanded"))}
                            onclick={toggle}
                            aria-label={label.to_string()}
                            aria-expanded={expanded.to_string()}
                        >
                            <img src={icon} alt={alt.to_string()} />
                        </button>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

pub const STYLE: &str = r#"
.expandable-section {
    display: flex;
    flex-direction: column;
    align-items: center;
}
.expandable-grid {
    display: grid;
    grid-template-columns: repeat(var(--columns), minmax(0, 1fr));
    gap: 1.5rem;
    width: 100%;
}
@media (max-width: 768px) {
    .expandable-grid {
        grid-template-columns: 1fr;
    }
}
.expandable-item {
    animation: expandable-enter 0.4s ease-out both;
}
@keyframes expandable-enter {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: translateY(0); }
}
.expand-toggle {
    margin-top: 2rem;
    background: none;
    border: none;
    cursor: pointer;
    transition: transform 0.3s;
}
.expand-toggle:hover {
    transform: scale(1.1);
}
.expand-toggle:active {
    transform: scale(0.9);
}
.expand-toggle img {
    width: 2rem;
    height: 2rem;
    opacity: 0.8;
    transition: transform 0.4s ease-in-out, opacity 0.3s;
}
.expand-toggle.expanded img {
    transform: rotate(180deg);
}
.expand-toggle img:hover {
    opacity: 1;
}
html.dark .expand-toggle img {
    filter: invert(1);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn visible<'a>(items: &'a [char], expansion: &Expansion) -> &'a [char] {
        &items[expansion.visible_range(items.len())]
    }

    #[test]
    fn faq_scenario() {
        let items = ['a', 'b', 'c', 'd', 'e'];
        let mut expansion = Expansion::new(3);

        assert_eq!(visible(&items, &expansion), &['a', 'b', 'c']);
        assert!(expansion.has_toggle(items.len()));

        expansion.toggle();
        assert!(expansion.is_expanded());
        assert_eq!(visible(&items, &expansion), &items);

        assert!(expansion.on_active_region_changed(RegionId::Faq, Some(RegionId::References)));
        assert!(!expansion.is_expanded());
        assert_eq!(visible(&items, &expansion), &['a', 'b', 'c']);
    }

    #[test]
    fn empty_list_has_nothing_to_show() {
        let items: [char; 0] = [];
        let mut expansion = Expansion::new(3);
        assert!(visible(&items, &expansion).is_empty());
        assert!(!expansion.has_toggle(0));

        for active in RegionId::ALL {
            expansion.on_active_region_changed(RegionId::Faq, Some(active));
            assert!(visible(&items, &expansion).is_empty());
            assert!(!expansion.has_toggle(0));
        }
    }

    #[test]
    fn own_region_never_collapses() {
        let mut expansion = Expansion::new(3);
        expansion.toggle();
        assert!(!expansion.on_active_region_changed(RegionId::Faq, Some(RegionId::Faq)));
        assert!(expansion.is_expanded());
    }

    #[test]
    fn unknown_region_keeps_state() {
        let mut expansion = Expansion::new(3);
        expansion.toggle();
        assert!(!expansion.on_active_region_changed(RegionId::Faq, None));
        assert!(expansion.is_expanded());
    }

    #[test]
    fn collapsing_is_idempotent() {
        let mut expansion = Expansion::new(3);
        assert!(!expansion.on_active_region_changed(RegionId::Faq, Some(RegionId::Hero)));
        assert_eq!(expansion, Expansion::new(3));
    }

    #[test]
    fn zero_preview_shows_nothing_until_expanded() {
        let items = ['a', 'b'];
        let mut expansion = Expansion::new(0);
        assert!(visible(&items, &expansion).is_empty());
        assert!(expansion.has_toggle(items.len()));
        expansion.toggle();
        assert_eq!(visible(&items, &expansion), &items);
    }

    #[test]
    fn preview_larger_than_list_is_clamped() {
        let items = ['a', 'b'];
        let expansion = Expansion::new(10);
        assert_eq!(visible(&items, &expansion), &items);
        assert!(!expansion.has_toggle(items.len()));
    }

    proptest! {
        #[test]
        fn visible_items_are_a_prefix(len in 0usize..40, preview in 0usize..50, expanded: bool) {
            let items: Vec<usize> = (0..len).collect();
            let mut expansion = Expansion::new(preview);
            if expanded {
                expansion.toggle();
            }
            let range = expansion.visible_range(len);
            prop_assert_eq!(range.start, 0);
            if expanded {
                prop_assert_eq!(&items[range], &items[..]);
            } else {
                prop_assert_eq!(&items[range], &items[..preview.min(len)]);
            }
        }

        #[test]
        fn double_toggle_is_identity(preview in 0usize..10, expanded: bool) {
            let mut expansion = Expansion::new(preview);
            if expanded {
                expansion.toggle();
            }
            let before = expansion;
            expansion.toggle();
            expansion.toggle();
            prop_assert_eq!(expansion, before);
        }

        #[test]
        fn no_toggle_when_list_fits(preview in 0usize..20, len in 0usize..20, expanded: bool) {
            prop_assume!(len <= preview);
            let mut expansion = Expansion::new(preview);
            if expanded {
                expansion.toggle();
            }
            prop_assert!(!expansion.has_toggle(len));
        }

        #[test]
        fn leaving_region_always_collapses(own in 0usize..6, other in 0usize..6, expanded: bool) {
            prop_assume!(own != other);
            let own = RegionId::ALL[own];
            let other = RegionId::ALL[other];
            let mut expansion = Expansion::new(3);
            if expanded {
                expansion.toggle();
            }
            expansion.on_active_region_changed(own, Some(other));
            prop_assert!(!expansion.is_expanded());
        }
    }
}
