use serde_json::Value;

use crate::azure::client::{AzureClient, API_VERSION};
use crate::model::{PullRequest, Result};

pub trait PullRequestFetcher {
    /// Lists completed pull requests merged into `refs/heads/{branch}`.
    /// Any non-2xx response is an error; an empty list is not.
    async fn fetch_pull_requests(&self, branch: &str) -> Result<Vec<PullRequest>>;
}

impl PullRequestFetcher for AzureClient {
    async fn fetch_pull_requests(&self, branch: &str) -> Result<Vec<PullRequest>> {
        let url = self.api_url(&format!(
            "git/repositories/{}/pullrequests\
             ?searchCriteria.targetRefName=refs/heads/{}\
             &searchCriteria.status=completed\
             &api-version={}",
            self.repository(),
            branch,
            API_VERSION,
        ));
        let response = self.get(&url).await?.error_for_status()?;
        let details: Value = response.json().await?;
        PullRequest::parse_list(&details)
    }
}
