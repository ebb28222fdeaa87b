use crate::constants::FADE_IN_TRANSITION;
use crate::core::constants::FADE_IN_DELAY_MS;
use crate::dom;
use web_sys as web;

/// Start the body transparent and fade it in shortly after window `load`.
pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    _ = body.style().set_property("opacity", "0");

    // the module may boot after `load` has already fired
    if dom::ready_state(document) == "complete" {
        schedule_fade_in(body);
        return Ok(());
    }
    dom::add_listener(&window, "load", move |_: web::Event| {
        schedule_fade_in(body.clone());
    });
    Ok(())
}

fn schedule_fade_in(body: web::HtmlElement) {
    dom::set_timeout(FADE_IN_DELAY_MS, move || {
        let style = body.style();
        _ = style.set_property("transition", FADE_IN_TRANSITION);
        _ = style.set_property("opacity", "1");
    });
}
