//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod task_graph;
mod task_registry;

pub use task_graph::{GraphSettings, TaskGraph};
pub use task_registry::TaskRegistry;
