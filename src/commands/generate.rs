//! Generate command handler

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;

use apigen::application::{BuildContext, GenerateOptions};
use apigen::presentation::create_generate_use_case;
use apigen::presentation::output::render_generate;

/// Execute the generate command
pub fn cmd_generate(
    context: &BuildContext,
    tasks: Vec<String>,
    jobs: Option<usize>,
    force: bool,
    skip_compile: bool,
) -> Result<()> {
    // Phase one completes before anything runs
    let graph = context.task_graph()?;
    let use_case = create_generate_use_case(context.config(), context.project_root())?;

    let interrupt = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&interrupt);
    if let Err(e) = ctrlc::set_handler(move || handler_flag.store(true, Ordering::SeqCst)) {
        tracing::debug!("Ctrl-C handler not installed: {e}");
    }

    let options = GenerateOptions::new()
        .with_tasks(tasks)
        .with_jobs(jobs.unwrap_or_else(|| context.config().jobs()))
        .with_force(force)
        .with_skip_compile(skip_compile)
        .with_interrupt(interrupt);

    let result = use_case.execute(&graph, &options)?;
    println!("{}", render_generate(&result));
    Ok(())
}
