//! CLI command implementations.

pub mod data;
pub mod problem;

use rewind_core::{JsonFileStore, Problem, SessionController, ViewUpdate};

/// Controller over the default data directory, loaded and ready.
pub fn open_session() -> Result<SessionController, Box<dyn std::error::Error>> {
    let store = JsonFileStore::open()?;
    let mut controller = SessionController::with_defaults(Box::new(store));
    controller.start();
    Ok(controller)
}

/// Surface a non-fatal warning from a view update.
pub fn report_warning(update: &ViewUpdate) {
    if let Some(warning) = &update.warning {
        eprintln!("warning: {warning}");
    }
}

/// One-line human rendering of a problem.
pub fn print_problem(problem: &Problem) {
    let tags = if problem.tags.is_empty() {
        String::new()
    } else {
        format!("  [{}]", problem.tags.join(", "))
    };
    let url = problem
        .url
        .as_deref()
        .map(|u| format!("  {u}"))
        .unwrap_or_default();
    println!(
        "{}  {}  next: {}  level: {}{}{}",
        problem.id, problem.name, problem.next_review_at, problem.level, tags, url
    );
}

/// Render a problem list as text or pretty JSON.
pub fn print_problems(problems: &[Problem], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(problems)?);
        return Ok(());
    }
    if problems.is_empty() {
        println!("(no problems)");
        return Ok(());
    }
    for problem in problems {
        print_problem(problem);
    }
    Ok(())
}
