use crate::notes::{ReleaseNotes, ReportEntry};

pub trait TextReport {
    fn text_report(&self) -> String;
}

impl TextReport for ReleaseNotes {
    fn text_report(&self) -> String {
        let mut block = format!("Release Notes for {}\n\n", self.branch);

        block += &format!("Number of User Stories: {}\n", self.user_stories.len());
        block += &format!("Number of Bugs: {}\n\n", self.bugs.len());

        block += "User Stories:\n\n";
        for story in &self.user_stories {
            block += &story.text_entry("User story");
        }

        block += "Bugs:\n\n";
        for bug in &self.bugs {
            block += &bug.text_entry("Bug");
        }

        block
    }
}

trait TextEntryExt {
    fn text_entry(&self, label: &str) -> String;
}

impl TextEntryExt for ReportEntry {
    fn text_entry(&self, label: &str) -> String {
        format!(
            "{label} {}: {}\nPR {}: {}\n\n",
            self.work_item_id, self.work_item_title, self.pull_request_id, self.pull_request_title,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WorkItemKind;

    fn entry(work_item_id: i64, title: &str, pull_request_id: i64, pr_title: &str) -> ReportEntry {
        ReportEntry {
            work_item_id,
            work_item_title: title.to_string(),
            work_item_url: format!("https://example/_workitems/edit/{work_item_id}"),
            pull_request_id,
            pull_request_title: pr_title.to_string(),
            pull_request_url: format!("https://example/pullrequest/{pull_request_id}"),
        }
    }

    #[test]
    fn report_layout_matches_the_expected_block() {
        let mut notes = ReleaseNotes::new("release/1.0");
        notes.push(
            WorkItemKind::UserStory,
            entry(100, "Customer can reset password", 1, "Add reset flow"),
        );
        notes.push(WorkItemKind::Bug, entry(200, "Login loops forever", 2, "Fix login"));

        assert_eq!(
            notes.text_report(),
            "Release Notes for release/1.0\n\n\
             Number of User Stories: 1\n\
             Number of Bugs: 1\n\n\
             User Stories:\n\n\
             User story 100: Customer can reset password\n\
             PR 1: Add reset flow\n\n\
             Bugs:\n\n\
             Bug 200: Login loops forever\n\
             PR 2: Fix login\n\n"
        );
    }

    #[test]
    fn counts_match_collection_sizes() {
        let mut notes = ReleaseNotes::new("main");
        for id in 0..3 {
            notes.push(WorkItemKind::UserStory, entry(100 + id, "Story", 1, "PR"));
        }
        notes.push(WorkItemKind::Bug, entry(200, "Bug", 2, "PR"));

        let report = notes.text_report();
        assert!(report.contains("Number of User Stories: 3\n"));
        assert!(report.contains("Number of Bugs: 1\n"));
    }

    #[test]
    fn empty_notes_render_zero_counts_and_empty_sections() {
        let notes = ReleaseNotes::new("release/2.0");
        let report = notes.text_report();
        assert!(report.starts_with("Release Notes for release/2.0\n\n"));
        assert!(report.contains("Number of User Stories: 0\n"));
        assert!(report.contains("Number of Bugs: 0\n"));
        assert!(report.contains("User Stories:\n\n"));
        assert!(report.ends_with("Bugs:\n\n"));
    }
}
