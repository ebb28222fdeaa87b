use crate::constants::{CURSOR_DOT_CLASS, CURSOR_GLOW_CLASS, HOVER_TARGET_SELECTOR};
use crate::core::cursor::CursorTrail;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Glow and dot overlays that trail the mouse pointer.
pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    let glow = dom::create_div(document, CURSOR_GLOW_CLASS)?;
    let dot = dom::create_div(document, CURSOR_DOT_CLASS)?;
    body.append_child(&glow)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    body.append_child(&dot)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let trail = Rc::new(RefCell::new(CursorTrail::default()));

    let trail_move = trail.clone();
    dom::add_listener(document, "mousemove", move |ev: web::MouseEvent| {
        trail_move
            .borrow_mut()
            .set_pointer(ev.client_x() as f32, ev.client_y() as f32);
    });

    let targets = dom::query_all(document, HOVER_TARGET_SELECTOR);
    for el in &targets {
        let trail_enter = trail.clone();
        dom::add_listener(el, "mouseenter", move |_: web::Event| {
            trail_enter.borrow_mut().enter_hover();
        });
        let trail_leave = trail.clone();
        dom::add_listener(el, "mouseleave", move |_: web::Event| {
            trail_leave.borrow_mut().leave_hover();
        });
    }

    dom::animate_while(move || {
        let mut t = trail.borrow_mut();
        t.step();
        dom::set_style(&glow, "transform", &t.glow_transform());
        dom::set_style(&dot, "transform", &t.dot_transform());
        true
    });
    log::info!("[cursor] tracking with {} hover targets", targets.len());
    Ok(())
}
