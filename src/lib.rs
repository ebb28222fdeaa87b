#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod effects;
mod frame;
mod globe;

use constants::{EARTH_CONTAINER_ID, EARTH_TEXTURE_URL};
use crate::core::startup::{Initializer, BOOT_ORDER};
use globe::GlobeRenderer;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, globe: Rc<RefCell<GlobeRenderer>>) {
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::sync_canvas_to_viewport(&canvas_resize);
        globe.borrow_mut().resize(w, h);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Build the globe canvas and renderer, start the render loop, then fetch the
/// earth texture in the background.
async fn init_globe(document: web::Document) -> anyhow::Result<()> {
    let container = document
        .get_element_by_id(EARTH_CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", EARTH_CONTAINER_ID))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let (width, height) = dom::sync_canvas_to_viewport(&canvas);

    let globe = Rc::new(RefCell::new(
        GlobeRenderer::new(canvas.clone(), width, height).await?,
    ));
    wire_canvas_resize(&canvas, globe.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        globe: globe.clone(),
        document: document.clone(),
    }));
    let frame_loop = frame::FrameLoop::new(frame_ctx);
    frame_loop.resume();
    frame::wire_visibility_pause(&document, frame_loop);

    // rendering is already running on the fallback material
    match globe::texture::fetch_bitmap(EARTH_TEXTURE_URL).await {
        Ok(bitmap) => {
            let mut g = globe.borrow_mut();
            match g.apply_texture(&bitmap) {
                Ok(()) => log::info!(
                    "[globe] earth texture applied {}x{} (textured={})",
                    bitmap.width(),
                    bitmap.height(),
                    g.has_texture()
                ),
                Err(e) => log::warn!("[globe] texture upload failed, keeping fallback: {:?}", e),
            }
        }
        Err(e) => log::warn!("[globe] using fallback earth material: {:?}", e),
    }
    Ok(())
}

fn run_initializer(name: &str, result: anyhow::Result<()>) {
    if let Err(e) = result {
        log::error!("[startup] {} init error: {:?}", name, e);
    }
}

fn spawn_globe(document: &web::Document) -> anyhow::Result<()> {
    let globe_doc = document.clone();
    spawn_local(async move {
        if let Err(e) = init_globe(globe_doc).await {
            log::error!("[globe] init error: {:?}", e);
        }
    });
    Ok(())
}

/// Wire every page effect. Each initializer is independent; one failing does
/// not stop the rest.
fn boot(document: web::Document) {
    log::info!("[startup] presentation loading");
    for step in BOOT_ORDER {
        let result = match step {
            Initializer::Starfield => effects::starfield::init(&document),
            Initializer::Globe => spawn_globe(&document),
            Initializer::Reveal => effects::reveal::init(&document),
            Initializer::Images => effects::images::init(&document),
            Initializer::SmoothScroll => {
                effects::wire_smooth_scroll(&document);
                Ok(())
            }
            Initializer::NavProgress => {
                effects::wire_nav_progress(&document);
                Ok(())
            }
            Initializer::Parallax => {
                effects::wire_parallax(&document);
                Ok(())
            }
            Initializer::Stats => effects::stats::init(&document),
            Initializer::ScrollIndicator => {
                effects::wire_scroll_indicator(&document);
                Ok(())
            }
            Initializer::Loading => effects::loading::init(&document),
            Initializer::Cursor => effects::cursor::init(&document),
            Initializer::SectionBackgrounds => {
                effects::reveal::activate_backgrounds(&document);
                Ok(())
            }
        };
        run_initializer(step.name(), result);
    }
    log::info!("[startup] presentation ready");
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sat-presentation starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if dom::ready_state(&document) == "loading" {
        let doc = document.clone();
        let once = Closure::once_into_js(move || boot(doc));
        document.add_event_listener_with_callback("DOMContentLoaded", once.unchecked_ref())?;
    } else {
        boot(document);
    }
    Ok(())
}
