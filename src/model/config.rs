use serde_json::{from_str, Value};
use std::fs;

use crate::model::Result;

const DEFAULT_BASE_URL: &str = "https://dev.azure.com";

#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct AzureConfig {
    pub organization: String,
    pub project: String,
    pub repository: String,
    pub base_url: String,
}

// Create
impl AzureConfig {
    pub fn from_config(path: &str) -> Result<Self> {
        let json_str = fs::read_to_string(path)?;
        Self::parse(&json_str)
    }

    pub fn new(
        organization: impl ToString,
        project: impl ToString,
        repository: impl ToString,
        base_url: impl ToString,
    ) -> Self {
        Self {
            organization: organization.to_string(),
            project: project.to_string(),
            repository: repository.to_string(),
            base_url: base_url.to_string(),
        }
    }
}

// Parser
impl AzureConfig {
    fn parse(json_str: &str) -> Result<Self> {
        let details: Value = from_str(json_str)?;
        let Some(organization) = details["organization"].as_str() else {
            return Err("Not found 'organization' field".into());
        };
        let Some(project) = details["project"].as_str() else {
            return Err("Not found 'project' field".into());
        };
        let Some(repository) = details["repository"].as_str() else {
            return Err("Not found 'repository' field".into());
        };
        let base_url = details["baseUrl"].as_str().unwrap_or(DEFAULT_BASE_URL);
        Ok(Self::new(organization, project, repository, base_url))
    }
}
