use gloo::console;
use web_sys::Document;

use vitrine_core::PresentationConfig;

pub(crate) const CONFIG_ELEMENT_ID: &str = "vitrine-config";

pub(crate) fn load_presentation_config(document: &Document) -> PresentationConfig {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return PresentationConfig::default();
    };
    let raw = element.text_content().unwrap_or_default();
    if raw.trim().is_empty() {
        return PresentationConfig::default();
    }
    match PresentationConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            console::warn!("presentation config ignored:", err.to_string());
            PresentationConfig::default()
        }
    }
}
