use super::constants::{
    STAR_DELAY_SPAN_S, STAR_OPACITY_MIN, STAR_OPACITY_SPAN, STAR_SIZE_MIN_PX, STAR_SIZE_SPAN_PX,
};
use rand::Rng;

/// Placement and look of one decorative DOM star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarSpec {
    pub left_pct: f64,
    pub top_pct: f64,
    pub size_px: f64,
    pub delay_s: f64,
    pub opacity: f64,
}

impl StarSpec {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            left_pct: rng.gen::<f64>() * 100.0,
            top_pct: rng.gen::<f64>() * 100.0,
            size_px: rng.gen::<f64>() * STAR_SIZE_SPAN_PX + STAR_SIZE_MIN_PX,
            delay_s: rng.gen::<f64>() * STAR_DELAY_SPAN_S,
            opacity: rng.gen::<f64>() * STAR_OPACITY_SPAN + STAR_OPACITY_MIN,
        }
    }

    /// `(property, value)` pairs for the star's inline style.
    pub fn style_pairs(&self) -> [(&'static str, String); 6] {
        [
            ("left", format!("{}%", self.left_pct)),
            ("top", format!("{}%", self.top_pct)),
            ("width", format!("{}px", self.size_px)),
            ("height", format!("{}px", self.size_px)),
            ("animation-delay", format!("{}s", self.delay_s)),
            ("opacity", format!("{}", self.opacity)),
        ]
    }
}

pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<StarSpec> {
    (0..count).map(|_| StarSpec::random(rng)).collect()
}
