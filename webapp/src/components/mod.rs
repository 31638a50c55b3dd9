pub mod footer;
pub mod mobile_menu;
pub mod modal;
pub mod navigation;
pub mod theme_toggle;
