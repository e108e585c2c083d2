//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod fingerprint;
mod generator_options;
mod identity;
mod source_roots;

pub use fingerprint::Fingerprint;
pub use generator_options::{
    AccessorStyle, CollectionInitialization, FeignClientUrl, GeneratorOptions,
};
pub use identity::{
    package_fragment, task_name_with_prefix, DerivedIdentity, NamingError, GENERATE_TASK_PREFIX,
};
pub use source_roots::SourceRoots;
