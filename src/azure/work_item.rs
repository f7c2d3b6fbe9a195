use reqwest::StatusCode;
use serde_json::Value;

use crate::azure::client::{AzureClient, API_VERSION};
use crate::model::{Result, WorkItem};

pub trait WorkItemResolver {
    /// Lists the ids of work items linked to a pull request. A 404 means the
    /// pull request has no linkage and yields an empty list, not an error.
    async fn fetch_work_item_refs(&self, pull_request_id: i64) -> Result<Vec<i64>>;

    /// Fetches one work item's type and title.
    async fn fetch_work_item(&self, work_item_id: i64) -> Result<WorkItem>;
}

impl WorkItemResolver for AzureClient {
    async fn fetch_work_item_refs(&self, pull_request_id: i64) -> Result<Vec<i64>> {
        let url = self.api_url(&format!(
            "git/repositories/{}/pullRequests/{}/workItems?api-version={}",
            self.repository(),
            pull_request_id,
            API_VERSION,
        ));
        let response = self.get(&url).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(vec![]);
        }
        let details: Value = response.error_for_status()?.json().await?;
        WorkItem::parse_refs(&details)
    }

    async fn fetch_work_item(&self, work_item_id: i64) -> Result<WorkItem> {
        let url = self.api_url(&format!(
            "wit/workitems/{}?api-version={}",
            work_item_id, API_VERSION,
        ));
        let response = self.get(&url).await?.error_for_status()?;
        let details: Value = response.json().await?;
        WorkItem::parse(&details)
    }
}
