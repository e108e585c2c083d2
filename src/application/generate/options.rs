//! Generate options

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Options for the generate command
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Tasks to run (empty = full build up to the compile step)
    pub tasks: Vec<String>,
    /// Worker threads (0 = one)
    pub jobs: usize,
    /// Regenerate units even when their stamp is current
    pub force: bool,
    /// Stop after the aggregate even if a compile command is configured
    pub skip_compile: bool,
    /// Set from outside (Ctrl-C) to stop picking up new units
    pub interrupt: Option<Arc<AtomicBool>>,
}

impl GenerateOptions {
    /// Create new generate options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set tasks to run
    pub fn with_tasks(mut self, tasks: Vec<String>) -> Self {
        self.tasks = tasks;
        self
    }

    /// Set worker count
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    /// Set force
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Set skip compile
    pub fn with_skip_compile(mut self, skip_compile: bool) -> Self {
        self.skip_compile = skip_compile;
        self
    }

    /// Set the interrupt flag
    pub fn with_interrupt(mut self, interrupt: Arc<AtomicBool>) -> Self {
        self.interrupt = Some(interrupt);
        self
    }
}
