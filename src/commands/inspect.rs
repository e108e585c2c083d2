//! Read-only commands: list, plan, roots
//!
//! None of these run the generator.

use anyhow::Result;

use apigen::application::BuildContext;
use apigen::presentation::output::{render_documents, render_plan, render_roots, OutputFormat};

/// Execute the list command
pub fn cmd_list(context: &BuildContext) -> Result<()> {
    println!(
        "{}",
        render_documents(context.documents(), context.project_root())
    );
    Ok(())
}

/// Execute the plan command
pub fn cmd_plan(context: &BuildContext, json: bool) -> Result<()> {
    let graph = context.task_graph()?;
    let rendered = render_plan(
        &graph,
        context.project_root(),
        OutputFormat::from_json_flag(json),
    )?;
    println!("{rendered}");
    Ok(())
}

/// Execute the roots command
pub fn cmd_roots(context: &BuildContext) -> Result<()> {
    let graph = context.task_graph()?;
    if !graph.source_roots().is_empty() {
        println!("{}", render_roots(&graph));
    }
    Ok(())
}
