//! Which page section is in focus, and which sections have been seen.
//!
//! The geometry part is pure so it can be tested without a browser; the
//! hooks at the bottom feed it from `getBoundingClientRect` and an
//! `IntersectionObserver`.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegionId {
    Hero,
    Intro,
    Services,
    Faq,
    References,
    Contact,
}

impl RegionId {
    /// Document order.
    pub const ALL: [RegionId; 6] = [
        RegionId::Hero,
        RegionId::Intro,
        RegionId::Services,
        RegionId::Faq,
        RegionId::References,
        RegionId::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            RegionId::Hero => "hero",
            RegionId::Intro => "bemutatkozas",
            RegionId::Services => "szolgaltatasok",
            RegionId::Faq => "faq",
            RegionId::References => "referenciak",
            RegionId::Contact => "elerhetoseg",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        RegionId::ALL.into_iter().find(|id| id.anchor() == anchor)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportMetrics {
    /// Offset of the reference line from the viewport top.
    pub reference_line: f64,
}

impl Default for ViewportMetrics {
    fn default() -> Self {
        Self {
            reference_line: config::ACTIVE_REGION_LINE,
        }
    }
}

/// Vertical extent of a region relative to the viewport top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionGeometry {
    pub id: RegionId,
    pub top: f64,
    pub bottom: f64,
}

impl RegionGeometry {
    fn straddles(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// The region crossing the reference line. If two regions touch exactly at
/// the line the later one wins.
pub fn active_region(viewport: ViewportMetrics, regions: &[RegionGeometry]) -> Option<RegionId> {
    regions
        .iter()
        .filter(|region| region.straddles(viewport.reference_line))
        .last()
        .map(|region| region.id)
}

/// Keeps the last known active region. Gaps between sections do not clear it.
#[derive(Debug, Default)]
pub struct ActiveRegionTracker {
    current: Option<RegionId>,
}

impl ActiveRegionTracker {
    /// Returns the new active region only when it changed.
    pub fn observe(&mut self, candidate: Option<RegionId>) -> Option<RegionId> {
        match candidate {
            Some(id) if self.current != Some(id) => {
                self.current = Some(id);
                Some(id)
            }
            _ => None,
        }
    }
}

/// Regions that have been at least partly visible once. Never shrinks.
///
/// The visible share is gated by the observer's threshold, not here: a
/// section taller than the viewport divided by the threshold never reaches
/// it, but still reports when it starts intersecting.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeenRegions {
    seen: HashSet<RegionId>,
}

impl SeenRegions {
    /// Returns true if this call newly marked the region.
    pub fn mark(&mut self, id: RegionId, is_intersecting: bool) -> bool {
        is_intersecting && self.seen.insert(id)
    }

    pub fn is_seen(&self, id: RegionId) -> bool {
        self.seen.contains(&id)
    }
}

pub fn fade_class(seen: bool) -> &'static str {
    if seen {
        "fade-section visible"
    } else {
        "fade-section"
    }
}

/// What the root publishes to every section. Read-only for consumers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ActiveRegion(pub Option<RegionId>);

/// Scrolls the region into view. A region that is not on the page is ignored.
pub fn navigate_to(region: RegionId) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(region.anchor()));

    match element {
        Some(element) => {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => debug!("No element for region #{}, skipping navigation", region.anchor()),
    }
}

fn section_elements(document: &web_sys::Document) -> Vec<web_sys::Element> {
    let Ok(sections) = document.query_selector_all("section[id]") else {
        return Vec::new();
    };
    (0..sections.length())
        .filter_map(|i| sections.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

fn measure_regions(document: &web_sys::Document) -> Vec<RegionGeometry> {
    section_elements(document)
        .into_iter()
        .filter_map(|element| {
            let id = RegionId::from_anchor(&element.id())?;
            let rect = element.get_bounding_client_rect();
            Some(RegionGeometry {
                id,
                top: rect.top(),
                bottom: rect.bottom(),
            })
        })
        .collect()
}

/// Tracks the active region while the window scrolls. Recomputation is
/// throttled with a trailing timeout so the final position is always seen.
#[hook]
pub fn use_active_region() -> Option<RegionId> {
    let active = use_state(|| None::<RegionId>);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().expect("no window");
                let document = window.document().expect("no document");
                let tracker = RefCell::new(ActiveRegionTracker::default());

                let recompute = Rc::new(move || {
                    let geometries = measure_regions(&document);
                    let candidate = active_region(ViewportMetrics::default(), &geometries);
                    if let Some(id) = tracker.borrow_mut().observe(candidate) {
                        debug!("Active region: {}", id.anchor());
                        active.set(Some(id));
                    }
                });

                let scheduled = Rc::new(Cell::new(false));
                let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

                let scroll_callback = {
                    let recompute = recompute.clone();
                    let scheduled = scheduled.clone();
                    let pending = pending.clone();
                    Closure::wrap(Box::new(move || {
                        if scheduled.replace(true) {
                            return;
                        }
                        let recompute = recompute.clone();
                        let scheduled = scheduled.clone();
                        let timeout = Timeout::new(config::SCROLL_THROTTLE_MS, move || {
                            scheduled.set(false);
                            recompute();
                        });
                        // The previous timeout has already fired.
                        *pending.borrow_mut() = Some(timeout);
                    }) as Box<dyn FnMut()>)
                };

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .expect("failed to attach scroll listener");

                // Initial measurement
                recompute();

                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                    // Dropping an unfired timeout cancels it.
                    pending.borrow_mut().take();
                }
            },
            (),
        );
    }

    *active
}

/// Marks sections as seen once enough of them has scrolled into view.
#[hook]
pub fn use_seen_regions() -> SeenRegions {
    let seen = use_state(SeenRegions::default);

    {
        let seen = seen.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window()
                    .and_then(|w| w.document())
                    .expect("no document");
                let marked = Rc::new(RefCell::new(SeenRegions::default()));

                let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
                    let mut changed = false;
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>()
                        else {
                            continue;
                        };
                        if let Some(id) = RegionId::from_anchor(&entry.target().id()) {
                            changed |= marked.borrow_mut().mark(id, entry.is_intersecting());
                        }
                    }
                    if changed {
                        seen.set(marked.borrow().clone());
                    }
                }) as Box<dyn FnMut(js_sys::Array)>);

                let options = web_sys::IntersectionObserverInit::new();
                options.set_threshold(&config::SEEN_THRESHOLD.into());
                let observer = web_sys::IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                )
                .ok();

                if let Some(observer) = observer.as_ref() {
                    for element in section_elements(&document) {
                        observer.observe(&element);
                    }
                }

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(callback);
                }
            },
            (),
        );
    }

    (*seen).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(line_offset: f64) -> Vec<RegionGeometry> {
        // Six stacked 500px sections, shifted up by the scroll offset.
        RegionId::ALL
            .iter()
            .enumerate()
            .map(|(i, id)| RegionGeometry {
                id: *id,
                top: i as f64 * 500.0 - line_offset,
                bottom: (i + 1) as f64 * 500.0 - line_offset,
            })
            .collect()
    }

    #[test]
    fn region_straddling_line_is_active() {
        let viewport = ViewportMetrics::default();
        assert_eq!(active_region(viewport, &layout(0.0)), Some(RegionId::Hero));
        assert_eq!(active_region(viewport, &layout(400.0)), Some(RegionId::Intro));
        assert_eq!(active_region(viewport, &layout(1400.0)), Some(RegionId::Faq));
    }

    #[test]
    fn touching_edges_pick_later_region() {
        let viewport = ViewportMetrics { reference_line: 500.0 };
        assert_eq!(active_region(viewport, &layout(0.0)), Some(RegionId::Intro));
    }

    #[test]
    fn gap_between_regions_yields_none() {
        let regions = [
            RegionGeometry {
                id: RegionId::Services,
                top: -300.0,
                bottom: 100.0,
            },
            RegionGeometry {
                id: RegionId::Faq,
                top: 200.0,
                bottom: 900.0,
            },
        ];
        assert_eq!(active_region(ViewportMetrics::default(), &regions), None);
        assert_eq!(active_region(ViewportMetrics::default(), &[]), None);
    }

    #[test]
    fn tracker_reports_only_changes() {
        let mut tracker = ActiveRegionTracker::default();
        assert_eq!(tracker.observe(Some(RegionId::Hero)), Some(RegionId::Hero));
        assert_eq!(tracker.observe(Some(RegionId::Hero)), None);
        assert_eq!(tracker.observe(Some(RegionId::Faq)), Some(RegionId::Faq));
        assert_eq!(tracker.observe(Some(RegionId::Hero)), Some(RegionId::Hero));
    }

    #[test]
    fn tracker_keeps_last_value_in_gaps() {
        let mut tracker = ActiveRegionTracker::default();
        tracker.observe(Some(RegionId::Services));
        assert_eq!(tracker.observe(None), None);
        // Still on services after the gap, so no change is reported.
        assert_eq!(tracker.observe(Some(RegionId::Services)), None);
    }

    #[test]
    fn seen_regions_never_revert() {
        let mut seen = SeenRegions::default();
        assert!(!seen.mark(RegionId::Faq, false));
        assert!(!seen.is_seen(RegionId::Faq));

        assert!(seen.mark(RegionId::Faq, true));
        assert!(!seen.mark(RegionId::Faq, true));
        assert!(!seen.mark(RegionId::Faq, false));
        assert!(seen.is_seen(RegionId::Faq));
        assert!(!seen.is_seen(RegionId::Intro));
    }

    #[test]
    fn tall_section_is_seen_once_it_intersects() {
        // Six viewports tall: at most a sixth of it is ever on screen, below
        // the observer threshold, yet the entering entry still marks it.
        let visible_share = 1.0 / 6.0;
        assert!(visible_share < config::SEEN_THRESHOLD);

        let mut seen = SeenRegions::default();
        assert!(seen.mark(RegionId::Faq, true));
        assert!(seen.is_seen(RegionId::Faq));
        assert_eq!(fade_class(seen.is_seen(RegionId::Faq)), "fade-section visible");
    }

    #[test]
    fn anchors_round_trip() {
        for id in RegionId::ALL {
            assert_eq!(RegionId::from_anchor(id.anchor()), Some(id));
        }
        assert_eq!(RegionId::from_anchor("nowhere"), None);
    }

    #[test]
    fn fade_class_marks_visible() {
        assert_eq!(fade_class(false), "fade-section");
        assert_eq!(fade_class(true), "fade-section visible");
    }
}
