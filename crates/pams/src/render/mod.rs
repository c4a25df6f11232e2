//! Terminal and HTML presentations of the questionnaire and its results.

pub mod html;
pub mod text;

pub use html::{render_page, PageOptions};
pub use text::{display_date, render_questionnaire, render_report};
