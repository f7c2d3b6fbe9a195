pub mod markdown;
pub mod text;

pub use markdown::MarkdownReport;
pub use text::TextReport;
