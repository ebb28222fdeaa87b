use crate::constants::{
    ACTIVE_CLASS, REVEAL_CHILD_SELECTOR, REVEAL_ROOT_MARGIN, SECTION_BACKGROUND_SELECTOR,
    SECTION_SELECTOR, VISIBLE_CLASS,
};
use crate::core::constants::REVEAL_THRESHOLD;
use crate::core::reveal::{
    stagger_delay_ms, RevealTracker, HIDDEN_OPACITY, HIDDEN_TRANSFORM, REVEAL_TRANSITION,
    SHOWN_OPACITY, SHOWN_TRANSFORM,
};
use crate::dom;
use std::cell::RefCell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Hide section children, then reveal each section the first time it scrolls
/// into view.
pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let sections = dom::query_all(document, SECTION_SELECTOR);
    if sections.is_empty() {
        return Ok(());
    }

    // children must be hidden before the observer can fire
    for section in &sections {
        for child in dom::query_all_in(section, REVEAL_CHILD_SELECTOR) {
            dom::set_style(&child, "opacity", HIDDEN_OPACITY);
            dom::set_style(&child, "transform", HIDDEN_TRANSFORM);
            dom::set_style(&child, "transition", REVEAL_TRANSITION);
        }
    }

    let tracker = RefCell::new(RevealTracker::new(sections.len()));
    let observed = sections.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let section = entry.target();
                let Some(index) = observed.iter().position(|s| *s == section) else {
                    continue;
                };
                let mut tracker = tracker.borrow_mut();
                if tracker.observe(index, entry.is_intersecting()) {
                    reveal_section(&section);
                    log::info!(
                        "[reveal] section {} shown ({}/{})",
                        index,
                        tracker.revealed_count(),
                        observed.len()
                    );
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let opts = web::IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    opts.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    callback.forget();

    for section in &sections {
        observer.observe(section);
    }
    log::info!("[reveal] observing {} sections", sections.len());
    Ok(())
}

fn reveal_section(section: &web::Element) {
    _ = section.class_list().add_1(VISIBLE_CLASS);
    if let Ok(Some(bg)) = section.query_selector(SECTION_BACKGROUND_SELECTOR) {
        _ = bg.class_list().add_1(ACTIVE_CLASS);
    }
    for (i, child) in dom::query_all_in(section, REVEAL_CHILD_SELECTOR)
        .into_iter()
        .enumerate()
    {
        dom::set_timeout(stagger_delay_ms(i), move || {
            dom::set_style(&child, "opacity", SHOWN_OPACITY);
            dom::set_style(&child, "transform", SHOWN_TRANSFORM);
        });
    }
}

/// Mark every section background active up front.
pub fn activate_backgrounds(document: &web::Document) {
    let backgrounds = dom::query_all(document, SECTION_BACKGROUND_SELECTOR);
    for bg in &backgrounds {
        _ = bg.class_list().add_1(ACTIVE_CLASS);
    }
    log::info!("[reveal] activated {} section backgrounds", backgrounds.len());
}
