use crate::azure::{AzureClient, PullRequestFetcher, WorkItemResolver};
use crate::model::{PullRequest, Result, WorkItem};
use crate::notes::model::{ReleaseNotes, ReportEntry};

pub type ResolveProgress<'a> = Box<dyn FnMut(usize, usize) + 'a>;

pub trait ReleaseNotesBuilder {
    /// Runs the whole fetch → resolve → classify pass for one branch.
    /// `cb` is called once per pull request with (current, total). Any HTTP
    /// failure aborts the build and the partial notes are discarded.
    async fn build_release_notes<'a>(
        &self,
        branch: &str,
        cb: ResolveProgress<'a>,
    ) -> Result<ReleaseNotes>;
}

impl ReleaseNotesBuilder for AzureClient {
    async fn build_release_notes<'a>(
        &self,
        branch: &str,
        mut cb: ResolveProgress<'a>,
    ) -> Result<ReleaseNotes> {
        let pull_requests = self.fetch_pull_requests(branch).await?;

        let mut notes = ReleaseNotes::new(branch);
        for (index, pull_request) in pull_requests.iter().enumerate() {
            cb(index + 1, pull_requests.len());
            for work_item_id in self.fetch_work_item_refs(pull_request.id).await? {
                let work_item = self.fetch_work_item(work_item_id).await?;
                notes.push(work_item.kind, self.report_entry(&work_item, pull_request));
            }
        }
        Ok(notes)
    }
}

trait ReportEntryExt {
    fn report_entry(&self, work_item: &WorkItem, pull_request: &PullRequest) -> ReportEntry;
}

impl ReportEntryExt for AzureClient {
    fn report_entry(&self, work_item: &WorkItem, pull_request: &PullRequest) -> ReportEntry {
        ReportEntry {
            work_item_id: work_item.id,
            work_item_title: work_item.title.clone(),
            work_item_url: self.work_item_link(work_item.id),
            pull_request_id: pull_request.id,
            pull_request_title: pull_request.title.clone(),
            pull_request_url: self.pull_request_link(pull_request.id),
        }
    }
}
