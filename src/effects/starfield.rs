use crate::constants::{STARFIELD_ID, STAR_CLASS};
use crate::core::constants::STARFIELD_COUNT;
use crate::core::stars;
use crate::dom;
use web_sys as web;

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let Some(field) = document.get_element_by_id(STARFIELD_ID) else {
        return Ok(());
    };
    let mut rng = rand::thread_rng();
    for spec in stars::generate(STARFIELD_COUNT, &mut rng) {
        let star = dom::create_div(document, STAR_CLASS)?;
        for (property, value) in spec.style_pairs() {
            dom::set_style(&star, property, &value);
        }
        field
            .append_child(&star)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }
    Ok(())
}
