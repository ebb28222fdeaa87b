use crate::constants::STAT_SELECTOR;
use crate::core::constants::STAT_THRESHOLD;
use crate::core::counter::{CounterAnimation, CounterText};
use crate::dom;
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Count each stat up from zero the first time it is half visible.
pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let stats = dom::query_all(document, STAT_SELECTOR);
    if stats.is_empty() {
        return Ok(());
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                let text = target.text_content().unwrap_or_default();
                if let Some(parsed) = CounterText::parse(&text) {
                    count_up(target, CounterAnimation::new(parsed));
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let opts = web::IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(STAT_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    callback.forget();

    for stat in &stats {
        observer.observe(stat);
    }
    log::info!("[stats] observing {} counters", stats.len());
    Ok(())
}

fn count_up(el: web::Element, anim: CounterAnimation) {
    let started = Instant::now();
    dom::animate_while(move || {
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        let frame = anim.frame_at(elapsed_ms);
        el.set_text_content(Some(&frame.text));
        !frame.finished
    });
}
