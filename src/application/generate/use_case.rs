//! Generate Use Case
//!
//! Runs the units of a task graph on scoped worker threads, then the
//! aggregate, then the compile command.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::thread;

use crate::domain::entities::GenerationUnit;
use crate::domain::ports::CodeGenerator;
use crate::domain::services::TaskGraph;
use crate::error::{ApigenError, ApigenResult};
use crate::infrastructure::{CompileCommand, StampStore};

use super::options::GenerateOptions;
use super::result::{GenerateResult, UnitOutcome};

/// How far a run goes past the units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Goal {
    /// Only the named units
    Units,
    /// Every unit and the aggregate
    Aggregate,
    /// Every unit, the aggregate and the compile step
    Compile,
}

/// Generate use case - executes a task graph
pub struct GenerateUseCase<G>
where
    G: CodeGenerator,
{
    generator: G,
    stamps: StampStore,
    compile: Option<CompileCommand>,
}

impl<G> GenerateUseCase<G>
where
    G: CodeGenerator,
{
    /// Create a new generate use case
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            stamps: StampStore::new(),
            compile: None,
        }
    }

    /// Run `command` after the aggregate on full builds
    pub fn with_compile_command(mut self, command: Option<CompileCommand>) -> Self {
        self.compile = command;
        self
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Execute the graph.
    ///
    /// The first unit failure stops further units from starting; the
    /// aggregate and compile step only run when every selected unit succeeded.
    pub fn execute(
        &self,
        graph: &TaskGraph,
        options: &GenerateOptions,
    ) -> ApigenResult<GenerateResult> {
        let goal = Self::goal(graph, &options.tasks);
        let units = graph.select(&options.tasks)?;

        let mut result = self.run_units(&units, options)?;

        if goal == Goal::Units {
            return Ok(result);
        }

        let aggregate = graph.aggregate();
        if aggregate.is_noop() {
            tracing::debug!("{}: no specifications, nothing to do", aggregate.name());
        }
        tracing::info!("{}", aggregate.completion_message());
        result.aggregate = Some(aggregate.name().to_string());

        if goal == Goal::Compile && !options.skip_compile {
            if let Some(compile) = &self.compile {
                compile.run(graph.source_roots())?;
                result.compiled = Some(graph.compile().name().to_string());
            }
        }

        Ok(result)
    }

    fn goal(graph: &TaskGraph, tasks: &[String]) -> Goal {
        if tasks.is_empty() || tasks.iter().any(|t| t == graph.compile().name()) {
            Goal::Compile
        } else if tasks.iter().any(|t| t == graph.aggregate().name()) {
            Goal::Aggregate
        } else {
            Goal::Units
        }
    }

    fn run_units(
        &self,
        units: &[&GenerationUnit],
        options: &GenerateOptions,
    ) -> ApigenResult<GenerateResult> {
        let workers = options.jobs.clamp(1, units.len().max(1));
        let next = AtomicUsize::new(0);
        let abort = AtomicBool::new(false);
        let result = Mutex::new(GenerateResult::new());
        let failure: Mutex<Option<ApigenError>> = Mutex::new(None);

        let interrupted = || {
            options
                .interrupt
                .as_ref()
                .is_some_and(|flag| flag.load(Ordering::SeqCst))
        };

        thread::scope(|scope| {
            for _ in 0..workers {
                scope.spawn(|| loop {
                    if abort.load(Ordering::SeqCst) || interrupted() {
                        break;
                    }
                    let index = next.fetch_add(1, Ordering::SeqCst);
                    let Some(unit) = units.get(index) else {
                        break;
                    };

                    match self.run_unit(unit, options.force) {
                        Ok(outcome) => result
                            .lock()
                            .unwrap_or_else(PoisonError::into_inner)
                            .add(unit.task_name().to_string(), outcome),
                        Err(e) => {
                            abort.store(true, Ordering::SeqCst);
                            let mut slot = failure.lock().unwrap_or_else(PoisonError::into_inner);
                            if slot.is_none() {
                                *slot = Some(e);
                            }
                        }
                    }
                });
            }
        });

        let failure = failure.into_inner().unwrap_or_else(PoisonError::into_inner);
        let mut result = result.into_inner().unwrap_or_else(PoisonError::into_inner);

        // Ctrl-C also reaches the generator processes, so their failures
        // count as the interrupt.
        if interrupted() && (failure.is_some() || result.unit_count() < units.len()) {
            return Err(ApigenError::Interrupted);
        }
        if let Some(e) = failure {
            return Err(e);
        }
        result.sort();
        Ok(result)
    }

    fn run_unit(&self, unit: &GenerationUnit, force: bool) -> ApigenResult<UnitOutcome> {
        let failed = |message: String| ApigenError::Generation {
            task: unit.task_name().to_string(),
            spec: unit.input_path().to_path_buf(),
            message,
        };

        let fingerprint = self
            .stamps
            .fingerprint(unit)
            .map_err(|e| failed(e.to_string()))?;

        if !force && self.stamps.is_up_to_date(unit, &fingerprint) {
            tracing::debug!("{}: up to date", unit.task_name());
            return Ok(UnitOutcome::UpToDate);
        }

        tracing::info!(
            "{}: starting generation from {}",
            unit.task_name(),
            unit.document().file_name()
        );
        self.generator
            .generate(&unit.invocation())
            .map_err(|e| failed(e.message))?;

        self.stamps
            .record(unit, &fingerprint)
            .map_err(|e| failed(format!("cannot record stamp: {e}")))?;

        Ok(UnitOutcome::Generated)
    }
}
