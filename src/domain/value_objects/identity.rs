//! Derived identity of a specification document
//!
//! Task and package names are pure functions of the document's base filename.

use serde::Serialize;

/// Prefix of every generation task name
pub const GENERATE_TASK_PREFIX: &str = "generate";

const API_SUFFIX: &str = "api";
const MODEL_SUFFIX: &str = "dto";
const CONFIG_SUFFIX: &str = "config";

/// Why a base filename could not be turned into an identity
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum NamingError {
    #[error("'{name}' has no alphanumeric characters to build a task name from")]
    EmptyTaskName { name: String },

    #[error("'{name}' has nothing before its first '-' to build a package name from")]
    EmptyPackage { name: String },
}

/// Names derived from one specification document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DerivedIdentity {
    task_name: String,
    package_fragment: String,
    base_package: String,
    api_package: String,
    model_package: String,
    config_package: String,
}

impl DerivedIdentity {
    /// Derive task and package names from `base_name` (extension already stripped).
    pub fn derive(base_name: &str, package_root: &str) -> Result<Self, NamingError> {
        let task_name = task_name_with_prefix(GENERATE_TASK_PREFIX, base_name)?;
        let package_fragment = package_fragment(base_name);
        if package_fragment.is_empty() {
            return Err(NamingError::EmptyPackage {
                name: base_name.to_string(),
            });
        }

        let base_package = join_package(package_root, &package_fragment);
        Ok(Self {
            api_package: join_package(&base_package, API_SUFFIX),
            model_package: join_package(&base_package, MODEL_SUFFIX),
            config_package: join_package(&base_package, CONFIG_SUFFIX),
            task_name,
            package_fragment,
            base_package,
        })
    }

    pub fn task_name(&self) -> &str {
        &self.task_name
    }

    pub fn package_fragment(&self) -> &str {
        &self.package_fragment
    }

    pub fn base_package(&self) -> &str {
        &self.base_package
    }

    pub fn api_package(&self) -> &str {
        &self.api_package
    }

    pub fn model_package(&self) -> &str {
        &self.model_package
    }

    pub fn config_package(&self) -> &str {
        &self.config_package
    }

    /// Whether the package fragment is usable as a Java package segment.
    ///
    /// The fragment rule keeps whatever precedes the first dash when it does
    /// not start with a lowercase run, so `2024-orders` yields `2024`.
    pub fn has_valid_package_fragment(&self) -> bool {
        is_java_identifier(&self.package_fragment)
    }
}

/// Build a task name: `prefix` followed by every alphanumeric fragment of
/// `name`, each with its first character upper-cased.
///
/// `payments-v2` with prefix `generate` becomes `generatePaymentsV2`.
pub fn task_name_with_prefix(prefix: &str, name: &str) -> Result<String, NamingError> {
    let suffix: String = name
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|fragment| !fragment.is_empty())
        .map(capitalize_first)
        .collect();

    if suffix.is_empty() {
        return Err(NamingError::EmptyTaskName {
            name: name.to_string(),
        });
    }

    Ok(format!("{prefix}{suffix}"))
}

/// Package fragment: the text before the first `-`, narrowed to its leading
/// lowercase run, or lower-cased whole when there is no such run.
pub fn package_fragment(name: &str) -> String {
    let before_dash = name.split('-').next().unwrap_or_default();
    let lowercase_run: String = before_dash
        .chars()
        .take_while(|c| c.is_ascii_lowercase())
        .collect();

    if lowercase_run.is_empty() {
        before_dash.to_lowercase()
    } else {
        lowercase_run
    }
}

fn capitalize_first(fragment: &str) -> String {
    let mut chars = fragment.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

fn join_package(parent: &str, child: &str) -> String {
    if parent.is_empty() {
        child.to_string()
    } else {
        format!("{parent}.{child}")
    }
}

fn is_java_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}
