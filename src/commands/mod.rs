//! Command handlers for the apigen binary

mod generate;
mod inspect;
mod project_root;

pub use generate::cmd_generate;
pub use inspect::{cmd_list, cmd_plan, cmd_roots};
pub use project_root::resolve_project_root;
