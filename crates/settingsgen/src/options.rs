/*
 * options.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Generator configuration.

use crate::output::DEFAULT_BLOCK_SIZE;

/// Names of the groups that drive generation instead of being rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedGroups {
    /// Group whose items are the templates, keyed by data group name.
    pub templates: String,
    /// Fallback values for template variables.
    pub defaults: String,
    /// Optional second template per data group, rendered after all bodies.
    pub validation: String,
    /// Lines copied verbatim before the rendered groups.
    pub pre_amble: String,
    /// Lines copied verbatim after the rendered groups.
    pub post_amble: String,
}

impl Default for ReservedGroups {
    fn default() -> Self {
        Self {
            templates: "templates".to_string(),
            defaults: "defaults".to_string(),
            validation: "validation".to_string(),
            pre_amble: "pre-amble".to_string(),
            post_amble: "post-amble".to_string(),
        }
    }
}

impl ReservedGroups {
    /// Whether `name` is one of the reserved group names.
    pub fn is_reserved(&self, name: &str) -> bool {
        [
            &self.pre_amble,
            &self.post_amble,
            &self.defaults,
            &self.templates,
            &self.validation,
        ]
        .iter()
        .any(|reserved| reserved.as_str() == name)
    }

    /// Groups that must be loaded as raw line sequences.
    pub fn sequence_groups(&self) -> [&str; 2] {
        [self.pre_amble.as_str(), self.post_amble.as_str()]
    }
}

/// Options for a [`Generator`](crate::Generator) run.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    pub groups: ReservedGroups,
    /// Capacity in bytes of each output block.
    pub block_size: usize,
    /// Log a warning for every template variable that resolves to nothing.
    pub warn_unresolved: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            groups: ReservedGroups::default(),
            block_size: DEFAULT_BLOCK_SIZE,
            warn_unresolved: false,
        }
    }
}
