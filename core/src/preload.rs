include!(concat!(env!("OUT_DIR"), "/preload_manifest.rs"));

pub const TOUCH_DEVICE_CLASS: &str = "touch-device";
pub const TOUCH_TUNED_SELECTOR: &str = ".menu-option, .cv-card";

pub fn preload_images() -> impl Iterator<Item = &'static str> {
    PRELOAD_IMAGES.iter().copied()
}
