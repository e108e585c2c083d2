//! Output Rendering
//!
//! Renders documents, plans and generate results as text or JSON. Renderers
//! return strings; printing is left to the caller.

use std::path::Path;

use crate::application::GenerateResult;
use crate::domain::entities::SpecificationDocument;
use crate::domain::services::TaskGraph;
use crate::error::ApigenResult;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

fn relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}

/// One discovered document per line, relative to the project root
pub fn render_documents(documents: &[SpecificationDocument], project_root: &Path) -> String {
    if documents.is_empty() {
        return "No specifications found".to_string();
    }
    documents
        .iter()
        .map(|d| relative(d.path(), project_root))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The task graph in the requested format
pub fn render_plan(
    graph: &TaskGraph,
    project_root: &Path,
    format: OutputFormat,
) -> ApigenResult<String> {
    match format {
        OutputFormat::Text => Ok(render_plan_text(graph, project_root)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(graph)?),
    }
}

fn render_plan_text(graph: &TaskGraph, project_root: &Path) -> String {
    let mut lines: Vec<String> = Vec::new();

    for unit in graph.units() {
        let identity = unit.identity();
        lines.push(unit.task_name().to_string());
        lines.push(format!("  input:  {}", relative(unit.input_path(), project_root)));
        lines.push(format!("  output: {}", relative(unit.output_dir(), project_root)));
        lines.push(format!("  api:    {}", identity.api_package()));
        lines.push(format!("  model:  {}", identity.model_package()));
    }

    let aggregate = graph.aggregate();
    let dependencies = if aggregate.is_noop() {
        "(nothing)".to_string()
    } else {
        aggregate.dependencies().join(", ")
    };
    lines.push(format!("{} -> {}", aggregate.name(), dependencies));

    let compile = graph.compile();
    lines.push(format!("{} -> {}", compile.name(), compile.depends_on().join(", ")));

    lines.join("\n")
}

/// Absolute source roots, one per line
pub fn render_roots(graph: &TaskGraph) -> String {
    graph
        .source_roots()
        .iter()
        .map(|root| root.display().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Per-task outcome lines followed by a one-line summary
pub fn render_generate(result: &GenerateResult) -> String {
    let mut lines: Vec<String> = result
        .generated
        .iter()
        .map(|task| format!("{task}: generated"))
        .chain(result.up_to_date.iter().map(|task| format!("{task}: up-to-date")))
        .collect();
    lines.sort();

    if let Some(aggregate) = &result.aggregate {
        lines.push(format!("{aggregate}: done"));
    }
    if let Some(compiled) = &result.compiled {
        lines.push(format!("{compiled}: done"));
    }

    lines.push(format!(
        "{} generated, {} up-to-date",
        result.generated.len(),
        result.up_to_date.len()
    ));
    lines.join("\n")
}
