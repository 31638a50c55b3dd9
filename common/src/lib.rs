pub mod config;
pub mod overlay;

// prefix for ids that the overlay components put into the document
//
// the dioxus components derive the root and close-button ids for each overlay from
// this, so that DomFocusScope can find them again without holding on to node refs
pub const OVERLAY_ID_PREFIX: &str = "overlay";

pub fn overlay_root_id(name: &str) -> String {
    format!("{OVERLAY_ID_PREFIX}-{name}")
}

pub fn overlay_close_id(name: &str) -> String {
    format!("{OVERLAY_ID_PREFIX}-{name}-close")
}

pub fn overlay_title_id(name: &str) -> String {
    format!("{OVERLAY_ID_PREFIX}-{name}-title")
}
