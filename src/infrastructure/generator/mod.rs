//! External generator adapters

mod process;

pub use process::ProcessGenerator;
