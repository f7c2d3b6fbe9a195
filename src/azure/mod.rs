pub mod client;
pub mod pull_request;
pub mod work_item;

pub use client::AzureClient;
pub use pull_request::PullRequestFetcher;
pub use work_item::WorkItemResolver;
