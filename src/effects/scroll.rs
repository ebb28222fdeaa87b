use crate::constants::{
    ANCHOR_SELECTOR, HERO_BACKGROUND_SELECTOR, NAV_SELECTOR, PROGRESS_FILL_ID,
    SCROLLED_CLASS, SCROLL_INDICATOR_SELECTOR, SECTION_BACKGROUND_SELECTOR,
};
use crate::core::scroll::{
    hero_transform, layer_transform, nav_scrolled, progress_percent, FrameCoalescer,
    IndicatorLatch,
};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// In-page anchors scroll smoothly to their target instead of jumping.
pub fn wire_smooth_scroll(document: &web::Document) {
    for anchor in dom::query_all(document, ANCHOR_SELECTOR) {
        let doc = document.clone();
        let link = anchor.clone();
        dom::add_listener(&anchor, "click", move |ev: web::Event| {
            ev.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            if let Some(target) = dom::query(&doc, &href) {
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                opts.set_block(web::ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        });
    }
}

/// Nav `scrolled` styling and the reading progress bar.
pub fn wire_nav_progress(document: &web::Document) {
    let nav = dom::query(document, NAV_SELECTOR);
    let fill = document.get_element_by_id(PROGRESS_FILL_ID);
    if nav.is_none() && fill.is_none() {
        return;
    }
    let Some(window) = web::window() else {
        return;
    };
    let doc = document.clone();
    dom::add_listener(&window, "scroll", move |_: web::Event| {
        let y = dom::scroll_y();
        if let Some(nav) = &nav {
            let cl = nav.class_list();
            if nav_scrolled(y) {
                _ = cl.add_1(SCROLLED_CLASS);
            } else {
                _ = cl.remove_1(SCROLLED_CLASS);
            }
        }
        if let Some(fill) = &fill {
            let (_, viewport_h) = dom::viewport_size();
            let pct = progress_percent(y, dom::document_scroll_height(&doc), viewport_h);
            dom::set_style(fill, "width", &format!("{}%", pct));
        }
    });
}

/// Layered background drift. Scroll bursts collapse into one write per frame.
pub fn wire_parallax(document: &web::Document) {
    let layers = Rc::new(dom::query_all(document, SECTION_BACKGROUND_SELECTOR));
    let hero = Rc::new(dom::query(document, HERO_BACKGROUND_SELECTOR));
    if layers.is_empty() && hero.is_none() {
        return;
    }
    let Some(window) = web::window() else {
        return;
    };
    let coalescer = Rc::new(RefCell::new(FrameCoalescer::default()));
    dom::add_listener(&window, "scroll", move |_: web::Event| {
        if !coalescer.borrow_mut().request() {
            return;
        }
        let coalescer = coalescer.clone();
        let layers = layers.clone();
        let hero = hero.clone();
        dom::request_frame(move || {
            coalescer.borrow_mut().complete();
            let y = dom::scroll_y();
            for (i, layer) in layers.iter().enumerate() {
                dom::set_style(layer, "transform", &layer_transform(y, i));
            }
            if let Some(hero) = &*hero {
                dom::set_style(hero, "transform", &hero_transform(y));
            }
        });
    });
}

/// Fade the scroll hint out for good once the reader starts scrolling.
pub fn wire_scroll_indicator(document: &web::Document) {
    let Some(indicator) = dom::query(document, SCROLL_INDICATOR_SELECTOR) else {
        return;
    };
    let Some(window) = web::window() else {
        return;
    };
    let latch = RefCell::new(IndicatorLatch::default());
    dom::add_listener(&window, "scroll", move |_: web::Event| {
        if latch.borrow_mut().on_scroll(dom::scroll_y()) {
            dom::set_style(&indicator, "opacity", "0");
            dom::set_style(&indicator, "pointer-events", "none");
        }
    });
}
