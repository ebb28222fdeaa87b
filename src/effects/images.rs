use crate::constants::{IMAGE_KEY_ATTR, IMAGE_PLACEHOLDER_SELECTOR, LOADED_CLASS};
use crate::core::assets::{image_path, PLACEHOLDER_FALLBACK_BG};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Resolve every `.image-placeholder[data-image]` to a local image.
pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let mut resolved = 0usize;
    for placeholder in dom::query_all(document, IMAGE_PLACEHOLDER_SELECTOR) {
        let Some(key) = placeholder.get_attribute(IMAGE_KEY_ATTR) else {
            continue;
        };
        let Some(path) = image_path(&key) else {
            continue;
        };
        attach_image(&placeholder, key, path)?;
        resolved += 1;
    }
    log::info!("[images] resolved {} placeholders", resolved);
    Ok(())
}

fn attach_image(placeholder: &web::Element, key: String, path: &'static str) -> anyhow::Result<()> {
    let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    img.set_alt(&key);

    let img_loaded = img.clone();
    let onload = Closure::once_into_js(move || {
        _ = img_loaded.class_list().add_1(LOADED_CLASS);
    });
    img.set_onload(Some(onload.unchecked_ref()));

    let placeholder_err = placeholder.clone();
    let onerror = Closure::once_into_js(move || {
        log::warn!("[images] {} not found at {}", key, path);
        dom::set_style(&placeholder_err, "background", PLACEHOLDER_FALLBACK_BG);
    });
    img.set_onerror(Some(onerror.unchecked_ref()));

    img.set_src(path);
    placeholder
        .append_child(&img)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}
