//! Problem registration, listing and review commands.

use clap::Args;
use rewind_core::{CoreError, Level, NewProblem, SortKey};

use super::{open_session, print_problems, report_warning};

#[derive(Args)]
pub struct AddArgs {
    /// Problem name
    pub name: String,
    /// Problem URL
    #[arg(long)]
    pub url: Option<String>,
    /// Comma-separated tags
    #[arg(long)]
    pub tags: Option<String>,
    /// Free-form memo (markdown)
    #[arg(long, default_value = "")]
    pub memo: String,
    /// Initial level: again, hard, good or easy
    #[arg(long, default_value = "good")]
    pub level: String,
}

#[derive(Args)]
pub struct DueArgs {
    /// Reference date (YYYY-MM-DD, default today)
    #[arg(long)]
    pub date: Option<String>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ListArgs {
    /// Free-text search over names and tags
    #[arg(long)]
    pub search: Option<String>,
    /// Sort key: next_review, created_at or name
    #[arg(long)]
    pub sort: Option<String>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ReviewArgs {
    /// Problem ID
    pub id: i64,
    /// Review outcome: again, hard, good or easy
    pub outcome: String,
}

pub fn add(args: AddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let level: Level = args
        .level
        .parse()
        .map_err(|e: rewind_core::problem::UnknownLevel| CoreError::InvalidLevel { value: e.0 })?;
    let tags = args
        .tags
        .map(|t| t.split(',').map(str::to_string).collect())
        .unwrap_or_default();

    let mut controller = open_session()?;
    let update = controller.register(NewProblem {
        name: args.name,
        url: args.url,
        tags,
        memo: args.memo,
        level,
    })?;
    report_warning(&update);

    let added = update.all.last().expect("register appends a problem");
    println!(
        "Registered: {} (id {}, next review {})",
        added.name, added.id, added.next_review_at
    );
    Ok(())
}

pub fn due(args: DueArgs) -> Result<(), Box<dyn std::error::Error>> {
    let controller = open_session()?;
    let due = match args.date {
        Some(date) => {
            let reference: chrono::NaiveDate = date.parse()?;
            controller.due_on(reference)
        }
        None => controller.due_today(),
    };
    print_problems(&due, args.json)
}

pub fn list(args: ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let controller = open_session()?;
    let config = rewind_core::Config::load()?;

    let problems = match &args.search {
        Some(term) => controller.search(term),
        None => {
            let key: SortKey = match &args.sort {
                Some(raw) => raw.parse()?,
                None => config.default_sort,
            };
            controller.sorted(key)
        }
    };
    print_problems(&problems, args.json)
}

pub fn review(args: ReviewArgs) -> Result<(), Box<dyn std::error::Error>> {
    let outcome: Level = args
        .outcome
        .parse()
        .map_err(|e: rewind_core::problem::UnknownLevel| CoreError::InvalidOutcome { value: e.0 })?;

    let mut controller = open_session()?;
    let update = controller.complete_review(args.id, outcome)?;
    report_warning(&update);

    let reviewed = update
        .all
        .iter()
        .find(|p| p.id == args.id)
        .expect("reviewed problem stays in the store");
    println!(
        "Review complete: {} -> {} (next review {})",
        reviewed.name, reviewed.level, reviewed.next_review_at
    );
    Ok(())
}
