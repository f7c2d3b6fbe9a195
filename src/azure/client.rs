use reqwest::header::ACCEPT;
use reqwest::{Client, Response};

use crate::model::AzureConfig;

pub const API_VERSION: &str = "6.0";

/// Authenticated handle on the Azure DevOps REST API for one
/// organization/project/repository. Auth is HTTP basic with an empty
/// username and the PAT as password.
#[derive(Debug, Clone)]
pub struct AzureClient {
    http: Client,
    config: AzureConfig,
    pat: String,
}

impl AzureClient {
    pub fn new(config: AzureConfig, pat: impl ToString) -> Self {
        Self {
            http: Client::new(),
            config,
            pat: pat.to_string(),
        }
    }

    pub(crate) async fn get(&self, url: &str) -> reqwest::Result<Response> {
        self.http
            .get(url)
            .basic_auth("", Some(&self.pat))
            .header(ACCEPT, "application/json")
            .send()
            .await
    }

    pub(crate) fn api_url(&self, tail: &str) -> String {
        format!(
            "{}/{}/{}/_apis/{}",
            self.config.base_url, self.config.organization, self.config.project, tail
        )
    }
}

// Web links for the hyperlinked report variant.
impl AzureClient {
    pub fn work_item_link(&self, work_item_id: i64) -> String {
        format!(
            "{}/{}/{}/_workitems/edit/{}",
            self.config.base_url, self.config.organization, self.config.project, work_item_id
        )
    }

    pub fn pull_request_link(&self, pull_request_id: i64) -> String {
        format!(
            "{}/{}/{}/_git/{}/pullrequest/{}",
            self.config.base_url,
            self.config.organization,
            self.config.project,
            self.config.repository,
            pull_request_id
        )
    }

    pub(crate) fn repository(&self) -> &str {
        &self.config.repository
    }
}
