//! GenerationUnit entity - one contract turned into one generation task
//!
//! Units are created by the task registry from a [`UnitTemplate`] and handed
//! to the external generator as a [`GeneratorInvocation`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::SpecificationDocument;
use crate::domain::value_objects::{DerivedIdentity, GeneratorOptions, NamingError};

/// Shared settings every unit of one build is stamped from
#[derive(Debug, Clone, PartialEq)]
pub struct UnitTemplate {
    /// Generator identifier (`spring`)
    pub generator_name: String,
    /// Root under which each unit gets `<base_name>/`
    pub output_root: PathBuf,
    /// Language directory under `src/main/`
    pub source_language: String,
    /// Package every derived package hangs off
    pub package_root: String,
    pub options: GeneratorOptions,
}

impl UnitTemplate {
    /// Derive the identity of `document` and build its unit.
    pub fn instantiate(
        &self,
        document: &SpecificationDocument,
    ) -> Result<GenerationUnit, NamingError> {
        let identity = DerivedIdentity::derive(document.base_name(), &self.package_root)?;
        let output_dir = self.output_root.join(document.base_name());
        let source_root = output_dir
            .join("src")
            .join("main")
            .join(&self.source_language);

        let mut config_options = self.options.config_options();
        config_options.insert("apiPackage".to_string(), identity.api_package().to_string());
        config_options.insert(
            "modelPackage".to_string(),
            identity.model_package().to_string(),
        );
        config_options.insert(
            "configPackage".to_string(),
            identity.config_package().to_string(),
        );

        Ok(GenerationUnit {
            identity,
            document: document.clone(),
            output_dir,
            source_root,
            generator_name: self.generator_name.clone(),
            config_options,
            additional_properties: self.options.additional_properties(),
        })
    }
}

/// One unit of generation work
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationUnit {
    identity: DerivedIdentity,
    document: SpecificationDocument,
    output_dir: PathBuf,
    source_root: PathBuf,
    generator_name: String,
    config_options: BTreeMap<String, String>,
    additional_properties: BTreeMap<String, String>,
}

impl GenerationUnit {
    pub fn task_name(&self) -> &str {
        self.identity.task_name()
    }

    pub fn identity(&self) -> &DerivedIdentity {
        &self.identity
    }

    pub fn document(&self) -> &SpecificationDocument {
        &self.document
    }

    pub fn input_path(&self) -> &Path {
        self.document.path()
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// `<output_dir>/src/main/<language>`, the directory wired into compilation
    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    pub fn config_options(&self) -> &BTreeMap<String, String> {
        &self.config_options
    }

    pub fn additional_properties(&self) -> &BTreeMap<String, String> {
        &self.additional_properties
    }

    /// The request handed to the external generator
    pub fn invocation(&self) -> GeneratorInvocation<'_> {
        GeneratorInvocation {
            generator_name: &self.generator_name,
            input_path: self.document.path(),
            output_dir: &self.output_dir,
            api_package: self.identity.api_package(),
            model_package: self.identity.model_package(),
            config_package: self.identity.config_package(),
            config_options: &self.config_options,
            additional_properties: &self.additional_properties,
        }
    }
}

/// Everything the external generator needs for one unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GeneratorInvocation<'a> {
    pub generator_name: &'a str,
    pub input_path: &'a Path,
    pub output_dir: &'a Path,
    pub api_package: &'a str,
    pub model_package: &'a str,
    pub config_package: &'a str,
    pub config_options: &'a BTreeMap<String, String>,
    pub additional_properties: &'a BTreeMap<String, String>,
}
