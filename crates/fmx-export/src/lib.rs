pub mod comments;
pub mod format;
pub mod sanitize;
pub mod walker;

pub use comments::strip_script_comments;
pub use format::format_script;
pub use sanitize::sanitize_filename;
pub use walker::export_group;
