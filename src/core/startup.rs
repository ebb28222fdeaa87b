/// Page initializers, in the order `boot` runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Initializer {
    Starfield,
    Globe,
    Reveal,
    Images,
    SmoothScroll,
    NavProgress,
    Parallax,
    Stats,
    ScrollIndicator,
    Loading,
    Cursor,
    SectionBackgrounds,
}

impl Initializer {
    pub fn name(self) -> &'static str {
        match self {
            Initializer::Starfield => "starfield",
            Initializer::Globe => "globe",
            Initializer::Reveal => "reveal",
            Initializer::Images => "images",
            Initializer::SmoothScroll => "smooth-scroll",
            Initializer::NavProgress => "nav-progress",
            Initializer::Parallax => "parallax",
            Initializer::Stats => "stats",
            Initializer::ScrollIndicator => "scroll-indicator",
            Initializer::Loading => "loading",
            Initializer::Cursor => "cursor",
            Initializer::SectionBackgrounds => "section-backgrounds",
        }
    }
}

/// Section backgrounds are activated last, once every observer is wired.
pub const BOOT_ORDER: [Initializer; 12] = [
    Initializer::Starfield,
    Initializer::Globe,
    Initializer::Reveal,
    Initializer::Images,
    Initializer::SmoothScroll,
    Initializer::NavProgress,
    Initializer::Parallax,
    Initializer::Stats,
    Initializer::ScrollIndicator,
    Initializer::Loading,
    Initializer::Cursor,
    Initializer::SectionBackgrounds,
];
