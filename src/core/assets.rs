/// Background applied to a placeholder whose image failed to load.
pub const PLACEHOLDER_FALLBACK_BG: &str =
    "linear-gradient(135deg, rgba(255,255,255,0.05), rgba(255,255,255,0.02))";

/// `data-image` key to local image path.
pub const IMAGE_MAP: [(&str, &str); 9] = [
    ("satellite-1", "images/space/satellite_1.jpg"),
    ("satellite-2", "images/space/satellite_2.jpg"),
    ("earth-2", "images/space/earth_2.jpg"),
    ("earth-3", "images/space/earth_3.jpg"),
    ("iss", "images/space/iss.jpg"),
    ("starlink", "images/space/starlink.jpg"),
    ("phase1", "images/phases/phase1-licensing.jpg"),
    ("phase2", "images/phases/phase2-platform.jpg"),
    ("phase3", "images/phases/phase3-data.jpg"),
];

/// Local image for a placeholder's `data-image` key.
pub fn image_path(key: &str) -> Option<&'static str> {
    IMAGE_MAP
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, path)| *path)
}
