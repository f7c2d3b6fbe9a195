use azure_release_notes::azure::AzureClient;
use azure_release_notes::model::{AzureConfig, Result};
use azure_release_notes::notes::{ReleaseNotes, ReleaseNotesBuilder};
use azure_release_notes::report::{MarkdownReport, TextReport};
use azure_release_notes::utils::{MultiProgressNew, ProgressStyleTemplate};
use clap::{Parser, ValueEnum};
use indicatif::{MultiProgress, ProgressBar};
use std::fs;
use std::io::Write;

const PAT_ENV: &str = "AZURE_DEVOPS_PAT";

#[derive(Parser, Debug, Clone)]
struct Args {
    #[arg(long = "config", default_value = "azure.json")]
    config_path: String,
    #[arg(long = "branch")]
    branch: Option<String>,
    #[arg(long = "format", value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,
    #[arg(long = "output", default_value = "release-notes.md")]
    output_path: String,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum ReportFormat {
    Text,
    Markdown,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // The credential check runs before any network call.
    let Ok(pat) = std::env::var(PAT_ENV) else {
        eprintln!("PAT token not found. Please set {PAT_ENV} in the environment or an .env file.");
        std::process::exit(1);
    };

    if let Err(err) = run(&args, &pat).await {
        eprintln!("Failed to fetch data: {err}");
        std::process::exit(1);
    }
}

async fn run(args: &Args, pat: &str) -> Result<()> {
    let config = AzureConfig::from_config(&args.config_path)?;
    let branch = match &args.branch {
        Some(branch) => branch.clone(),
        None => prompt_branch()?,
    };

    let client = AzureClient::new(config, pat);
    let notes = fetch_notes(&client, &branch).await?;

    match args.format {
        ReportFormat::Text => println!("{}", notes.text_report()),
        ReportFormat::Markdown => {
            fs::write(&args.output_path, notes.export_report()?)?;
            println!("{}", notes.preview_report()?);
            println!("Saved release notes to `{}`", args.output_path);
        }
    }
    Ok(())
}

async fn fetch_notes(client: &AzureClient, branch: &str) -> Result<ReleaseNotes> {
    let multi_progress = MultiProgress::default();
    let fetch_pb = multi_progress.add_with_style(
        ProgressBar::new_spinner(),
        ProgressStyleTemplate::only_message(),
    );
    fetch_pb.set_message(format!("Fetching pull requests for `{branch}` ..."));
    let resolve_pb = multi_progress.add_with_style(
        ProgressBar::no_length(),
        ProgressStyleTemplate::number_bar(),
    );
    resolve_pb.set_message("Resolving work items");

    let progress_pb = resolve_pb.clone();
    let progress = move |current: usize, total: usize| {
        progress_pb.set_length(total as u64);
        progress_pb.set_position(current as u64);
    };
    let notes = client.build_release_notes(branch, Box::new(progress)).await?;

    fetch_pb.finish_with_message(format!("✅ Completed fetch pull requests for `{branch}`"));
    resolve_pb.reset();
    resolve_pb.set_style(ProgressStyleTemplate::only_message());
    resolve_pb.finish_with_message(format!(
        "✅ Completed resolve work items (find {} user stories, {} bugs)",
        notes.user_stories.len(),
        notes.bugs.len()
    ));
    Ok(notes)
}

fn prompt_branch() -> Result<String> {
    print!("Enter the branch name: ");
    std::io::stdout().flush()?;
    let mut branch = String::new();
    std::io::stdin().read_line(&mut branch)?;
    Ok(branch.trim().to_string())
}
