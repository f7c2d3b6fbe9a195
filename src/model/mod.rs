mod config;
mod pull_request;
mod result;
mod work_item;

pub use config::AzureConfig;
pub use pull_request::PullRequest;
pub use result::Result;
pub use work_item::WorkItem;
pub use work_item::WorkItemKind;
