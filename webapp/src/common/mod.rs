pub mod dom;
pub mod style;
pub mod theme;

use chrono::{Datelike, Local};

pub fn current_year() -> i32 {
    Local::now().year()
}
