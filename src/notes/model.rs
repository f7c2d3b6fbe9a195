use crate::model::WorkItemKind;

/// One classified (pull request, work item) pair. Titles and link URLs
/// travel as separate fields; markup is generated only at render time.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct ReportEntry {
    pub work_item_id: i64,
    pub work_item_title: String,
    pub work_item_url: String,
    pub pull_request_id: i64,
    pub pull_request_title: String,
    pub pull_request_url: String,
}

#[derive(Debug, Clone)]
pub struct ReleaseNotes {
    pub branch: String,
    pub user_stories: Vec<ReportEntry>,
    pub bugs: Vec<ReportEntry>,
}

impl ReleaseNotes {
    pub fn new(branch: impl ToString) -> Self {
        Self {
            branch: branch.to_string(),
            user_stories: Vec::new(),
            bugs: Vec::new(),
        }
    }

    /// Appends an entry to the category matching `kind`, preserving
    /// discovery order. Unclassified items are dropped without a trace.
    pub fn push(&mut self, kind: WorkItemKind, entry: ReportEntry) {
        match kind {
            WorkItemKind::UserStory => self.user_stories.push(entry),
            WorkItemKind::Bug => self.bugs.push(entry),
            WorkItemKind::Unclassified => {}
        }
    }

    pub fn is_empty(&self) -> bool {
        self.user_stories.is_empty() && self.bugs.is_empty()
    }
}
