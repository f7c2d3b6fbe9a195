pub mod builder;
pub mod model;

pub use builder::ReleaseNotesBuilder;
pub use builder::ResolveProgress;
pub use model::ReleaseNotes;
pub use model::ReportEntry;
