//! View logic for the homepage sections
//!
//! Loading of the JSON data files plus the pure state the page derives from
//! them: tool search and filtering, learning-log ordering and expansion,
//! theme resolution and share links.

pub mod data;
pub mod logs;
pub mod search;
pub mod share;
pub mod theme;

pub use data::{DataError, Section, SiteData, load_profile};
pub use logs::{LogAccordion, LogView, sort_logs};
pub use search::{ToolCount, ToolQuery, category_chips, featured, highlight, split_keywords};
pub use share::ShareLink;
pub use theme::{Theme, ThemePreference};
