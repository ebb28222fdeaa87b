// Numeric tuning constants shared by the page effects.

// Globe motion
pub const GLOBE_ROTATION_STEP: f32 = 0.001; // radians per frame
pub const CLOUD_ROTATION_FACTOR: f32 = 1.2;
pub const STAR_ROTATION_FACTOR: f32 = 0.1;

// Camera drift driven by page scroll
pub const CAMERA_REST_Z: f32 = 3.0;
pub const CAMERA_SWAY_X: f32 = 0.5;
pub const CAMERA_SWAY_Y: f32 = 0.3;
pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Scene layout
pub const GLOBE_RADIUS: f32 = 1.0;
pub const GLOBE_SEGMENTS: u32 = 64;
pub const WIREFRAME_RADIUS: f32 = 1.005;
pub const CLOUD_RADIUS: f32 = 1.01;
pub const LAYER_SEGMENTS: u32 = 32;
pub const SPACE_STAR_COUNT: usize = 1000;
pub const SPACE_STAR_SPREAD: f32 = 50.0;

// Lighting
pub const AMBIENT_INTENSITY: f32 = 0.4;
pub const SUN_INTENSITY: f32 = 0.8;
pub const SUN_POSITION: [f32; 3] = [5.0, 3.0, 5.0];

// Material colors (linear-ish sRGB triples) and opacities
pub const OCEAN_COLOR: [f32; 3] = [0x1a as f32 / 255.0, 0x3a as f32 / 255.0, 0x52 as f32 / 255.0];
pub const OCEAN_EMISSIVE: [f32; 3] = [0x0a as f32 / 255.0, 0x15 as f32 / 255.0, 0x20 as f32 / 255.0];
pub const WIREFRAME_COLOR: [f32; 3] = [0x44 as f32 / 255.0, 0x44 as f32 / 255.0, 0x44 as f32 / 255.0];
pub const WIREFRAME_OPACITY: f32 = 0.03;
pub const CLOUD_OPACITY: f32 = 0.04;
pub const SPACE_STAR_OPACITY: f32 = 0.8;

// Scroll-linked controllers (CSS pixels)
pub const NAV_SCROLLED_THRESHOLD: f64 = 100.0;
pub const INDICATOR_HIDE_THRESHOLD: f64 = 100.0;
pub const PARALLAX_BASE_SPEED: f64 = 0.3;
pub const PARALLAX_LAYER_STEP: f64 = 0.1;
pub const HERO_PARALLAX_SPEED: f64 = 0.5;

// Scroll reveal
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_STAGGER_MS: i32 = 150;

// Stat counters
pub const STAT_THRESHOLD: f64 = 0.5;
pub const STAT_DURATION_MS: f64 = 2000.0;

// Cursor smoothing: fraction of remaining distance covered per frame
pub const CURSOR_GLOW_SMOOTHING: f32 = 0.15;
pub const CURSOR_DOT_SMOOTHING: f32 = 0.25;
pub const CURSOR_GLOW_OFFSET: f32 = 10.0;
pub const CURSOR_DOT_OFFSET: f32 = 2.0;
pub const CURSOR_HOVER_SCALE: f32 = 1.5;

// Decorative DOM starfield
pub const STARFIELD_COUNT: usize = 150;
pub const STAR_SIZE_MIN_PX: f64 = 1.0;
pub const STAR_SIZE_SPAN_PX: f64 = 2.0;
pub const STAR_DELAY_SPAN_S: f64 = 3.0;
pub const STAR_OPACITY_MIN: f64 = 0.3;
pub const STAR_OPACITY_SPAN: f64 = 0.5;

// Body fade-in after window load
pub const FADE_IN_DELAY_MS: i32 = 100;
