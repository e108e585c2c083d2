//! Generator directives
//!
//! The fixed set of options every generation unit hands to the external
//! generator, rendered into the string maps the generator understands.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// How generated DTOs initialize their collection fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CollectionInitialization {
    /// Collections start as empty containers
    Eager,
    /// Collections start as null
    #[default]
    Lazy,
}

/// Accessor and constructor generation for model classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccessorStyle {
    /// Lombok annotations (builder, constructors, builder defaults)
    #[default]
    Lombok,
    /// Plain getters and setters emitted by the generator
    Plain,
}

/// How generated Feign clients resolve their base URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FeignClientUrl {
    /// Client carries a `url` attribute bound to a property
    #[default]
    Property,
    /// Generator default, no url directive
    None,
}

/// Recognized generator directives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorOptions {
    #[serde(default = "default_library")]
    pub library: String,

    #[serde(default = "default_true")]
    pub use_bean_validation: bool,

    #[serde(default)]
    pub open_api_nullable: bool,

    #[serde(default = "default_true")]
    pub skip_default_interface: bool,

    #[serde(default = "default_true")]
    pub use_tags: bool,

    #[serde(default = "default_true")]
    pub use_jakarta_ee: bool,

    #[serde(default)]
    pub collection_initialization: CollectionInitialization,

    #[serde(default)]
    pub accessor_style: AccessorStyle,

    #[serde(default)]
    pub feign_client_url: FeignClientUrl,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            library: default_library(),
            use_bean_validation: true,
            open_api_nullable: false,
            skip_default_interface: true,
            use_tags: true,
            use_jakarta_ee: true,
            collection_initialization: CollectionInitialization::default(),
            accessor_style: AccessorStyle::default(),
            feign_client_url: FeignClientUrl::default(),
        }
    }
}

fn default_library() -> String {
    "spring-cloud".to_string()
}

fn default_true() -> bool {
    true
}

const LOMBOK_PROPERTIES: &[&str] = &[
    "lombok",
    "lombokBuilder",
    "lombokNoArgsConstructor",
    "lombokAllArgsConstructor",
    "lombokBuilderDefault",
];

impl GeneratorOptions {
    /// Render the generator's `configOptions` map (packages excluded).
    pub fn config_options(&self) -> BTreeMap<String, String> {
        let mut options = BTreeMap::new();
        options.insert("library".to_string(), self.library.clone());
        options.insert(
            "skipDefaultInterface".to_string(),
            self.skip_default_interface.to_string(),
        );
        options.insert(
            "useBeanValidation".to_string(),
            self.use_bean_validation.to_string(),
        );
        options.insert(
            "openApiNullable".to_string(),
            self.open_api_nullable.to_string(),
        );
        options.insert("useTags".to_string(), self.use_tags.to_string());
        options.insert("useJakartaEe".to_string(), self.use_jakarta_ee.to_string());
        options.insert(
            "initializeCollections".to_string(),
            (self.collection_initialization == CollectionInitialization::Eager).to_string(),
        );
        if self.feign_client_url == FeignClientUrl::Property {
            options.insert("useFeignClientUrl".to_string(), "true".to_string());
        }
        options
    }

    /// Render the generator's `additionalProperties` map.
    pub fn additional_properties(&self) -> BTreeMap<String, String> {
        match self.accessor_style {
            AccessorStyle::Lombok => LOMBOK_PROPERTIES
                .iter()
                .map(|key| (key.to_string(), "true".to_string()))
                .collect(),
            AccessorStyle::Plain => BTreeMap::new(),
        }
    }
}
