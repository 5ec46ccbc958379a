//! Helper functions for URLs, dates, and escaping

mod date;
mod html;
mod url;

pub use self::date::*;
pub use self::html::*;
pub use self::url::*;
