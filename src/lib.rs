pub mod azure;
pub mod model;
pub mod notes;
pub mod report;
pub mod utils;
