use crate::core::frame_gate::FrameGate;
use crate::dom;
use crate::globe::GlobeRenderer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-frame state for the globe render loop.
pub struct FrameContext {
    pub globe: Rc<RefCell<GlobeRenderer>>,
    pub document: web::Document,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let scroll_y = dom::scroll_y();
        let (_, viewport_h) = dom::viewport_size();
        let scroll_height = dom::body_scroll_height(&self.document);
        let mut globe = self.globe.borrow_mut();
        globe.advance(scroll_y, scroll_height, viewport_h);
        match globe.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => globe.reconfigure(),
            Err(e) => log::error!("[globe] render error: {:?}", e),
        }
    }
}

/// Handle to a gated requestAnimationFrame loop.
#[derive(Clone)]
pub struct FrameLoop {
    gate: Rc<RefCell<FrameGate>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    pub fn new(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        let gate = Rc::new(RefCell::new(FrameGate::default()));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let gate_tick = gate.clone();
        let tick_clone = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !gate_tick.borrow_mut().begin_frame() {
                return;
            }
            frame_ctx.borrow_mut().frame();
            if let Some(cb) = tick_clone.borrow().as_ref() {
                request(cb);
            }
        }) as Box<dyn FnMut()>));
        Self { gate, tick }
    }

    pub fn resume(&self) {
        if self.gate.borrow_mut().resume() {
            if let Some(cb) = self.tick.borrow().as_ref() {
                request(cb);
            }
        }
    }

    pub fn pause(&self) {
        self.gate.borrow_mut().pause();
    }
}

fn request(cb: &Closure<dyn FnMut()>) {
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Halt the loop while the tab is hidden and resume it when shown again.
pub fn wire_visibility_pause(document: &web::Document, frame_loop: FrameLoop) {
    let doc = document.clone();
    dom::add_listener(document, "visibilitychange", move |_: web::Event| {
        if doc.hidden() {
            log::info!("[globe] tab hidden, pausing render loop");
            frame_loop.pause();
        } else {
            log::info!("[globe] tab visible, resuming render loop");
            frame_loop.resume();
        }
    });
}
