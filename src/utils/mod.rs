pub mod progress;

pub use progress::MultiProgressNew;
pub use progress::ProgressStyleTemplate;
