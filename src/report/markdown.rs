use markdown_builder::Markdown;
use markdown_table::{Heading, HeadingAlignment, MarkdownTable};

use crate::model::Result;
use crate::notes::{ReleaseNotes, ReportEntry};

const NO_STORIES_PLACEHOLDER: &str = "No user stories found.";
const NO_BUGS_PLACEHOLDER: &str = "No bugs found.";

pub trait MarkdownReport {
    /// Inline rendering: numbered rows, titles hyperlinked to their pages.
    fn preview_report(&self) -> Result<String>;

    /// Exportable document: two-column grid per section, plain titles.
    fn export_report(&self) -> Result<String>;
}

impl MarkdownReport for ReleaseNotes {
    fn preview_report(&self) -> Result<String> {
        let mut doc = Markdown::new();
        doc.header1(format!("Release Notes for {}", self.branch));

        if self.is_empty() {
            doc.paragraph(format!("No release notes found for {}.", self.branch));
            return Ok(doc.render());
        }

        doc.add_section("User Stories", &self.user_stories, NO_STORIES_PLACEHOLDER, true)?;
        doc.add_section("Bugs", &self.bugs, NO_BUGS_PLACEHOLDER, true)?;
        Ok(doc.render())
    }

    fn export_report(&self) -> Result<String> {
        let mut doc = Markdown::new();
        doc.header1(format!("Release Notes for {}", self.branch));
        doc.add_section("User Stories", &self.user_stories, NO_STORIES_PLACEHOLDER, false)?;
        doc.add_section("Bugs", &self.bugs, NO_BUGS_PLACEHOLDER, false)?;
        Ok(doc.render())
    }
}

trait MarkdownExt {
    fn add_section(
        &mut self,
        heading: &str,
        entries: &[ReportEntry],
        placeholder: &str,
        linked: bool,
    ) -> Result<()>;
}

impl MarkdownExt for Markdown {
    fn add_section(
        &mut self,
        heading: &str,
        entries: &[ReportEntry],
        placeholder: &str,
        linked: bool,
    ) -> Result<()> {
        self.header2(heading);
        if entries.is_empty() {
            self.paragraph(placeholder);
            return Ok(());
        }

        let mut table = vec![];
        for (index, entry) in entries.iter().enumerate() {
            if linked {
                table.push(vec![
                    format!("{}", index + 1),
                    format!("[{}]({})", entry.work_item_title, entry.work_item_url),
                    format!("[{}]({})", entry.pull_request_title, entry.pull_request_url),
                ]);
            } else {
                table.push(vec![
                    entry.work_item_title.clone(),
                    entry.pull_request_title.clone(),
                ]);
            }
        }

        let mut header = vec![];
        if linked {
            header.push(Heading::new("#".to_string(), Some(HeadingAlignment::Center)));
        }
        header.push(Heading::new("Work Item".to_string(), None));
        header.push(Heading::new("Pull Request".to_string(), None));

        let mut md_table = MarkdownTable::new(table);
        md_table.with_headings(header);
        let rendered = md_table
            .as_markdown()
            .map_err(|err| format!("Failed to render '{heading}' table: {err:?}"))?;
        self.paragraph(rendered);
        Ok(())
    }
}
