// DOM contract: ids, selectors and class names the page markup provides.

// Globe
pub const EARTH_CONTAINER_ID: &str = "earth-container";
pub const EARTH_TEXTURE_URL: &str =
    "https://raw.githubusercontent.com/turban/webgl-earth/master/images/2_no_clouds_4k.jpg";

// Scroll reveal
pub const SECTION_SELECTOR: &str = ".section";
pub const REVEAL_CHILD_SELECTOR: &str = ".crisis-card, .phase-card, .financial-year, .market-card";
pub const SECTION_BACKGROUND_SELECTOR: &str = ".section-background";
pub const VISIBLE_CLASS: &str = "is-visible";
pub const ACTIVE_CLASS: &str = "active";
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -10% 0px";

// Images
pub const IMAGE_PLACEHOLDER_SELECTOR: &str = ".image-placeholder";
pub const IMAGE_KEY_ATTR: &str = "data-image";
pub const LOADED_CLASS: &str = "loaded";

// Scroll-linked controllers
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const NAV_SELECTOR: &str = ".nav";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const PROGRESS_FILL_ID: &str = "progressBarFill";
pub const HERO_BACKGROUND_SELECTOR: &str = ".hero-background";
pub const SCROLL_INDICATOR_SELECTOR: &str = ".scroll-indicator";

// Stat counters
pub const STAT_SELECTOR: &str = ".stat-number, .stat-large, .stat-value";

// Cursor
pub const CURSOR_GLOW_CLASS: &str = "cursor-glow";
pub const CURSOR_DOT_CLASS: &str = "cursor-dot";
pub const HOVER_TARGET_SELECTOR: &str = "a, button, .card, .stat-item";

// Starfield
pub const STARFIELD_ID: &str = "starfield";
pub const STAR_CLASS: &str = "star";

// Loading fade-in
pub const FADE_IN_TRANSITION: &str = "opacity 1s ease";
