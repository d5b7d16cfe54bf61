pub mod matrix;
pub mod qr_code;
pub mod site;

pub use matrix::{Module, ModuleGrid};
pub use qr_code::{ECLevel, Version};
pub use site::{Contact, LogEntry, LogsFile, Profile, Social, Tool, ToolsFile};
