/*
 * generator.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! One generation run over any number of INI files.

use std::path::Path;

use settingsgen_ini::{IniFile, IniLoader};

use crate::emit::{EmitOptions, EmitOutcome, emit};
use crate::error::Result;
use crate::options::GeneratorOptions;
use crate::output::OutputStore;
use crate::render::RenderOptions;
use crate::sections::{dump_group, dump_sections};

/// Collects generated output from INI files, then emits it in one go.
///
/// For each processed file the pre-amble lines, the rendered groups and the
/// post-amble lines are appended to the body, in that order. Validation
/// lines of all files are kept apart and written after every body.
#[derive(Debug)]
pub struct Generator {
    options: GeneratorOptions,
    body: OutputStore,
    validation: OutputStore,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(GeneratorOptions::default())
    }
}

impl Generator {
    pub fn new(options: GeneratorOptions) -> Self {
        let body = OutputStore::with_block_size(options.block_size);
        let validation = OutputStore::with_block_size(options.block_size);
        Self {
            options,
            body,
            validation,
        }
    }

    /// Loader configured with the sequence groups this generator needs.
    pub fn loader(&self) -> IniLoader {
        IniLoader::new().sequence_groups(self.options.groups.sequence_groups())
    }

    /// Load an INI file and process it.
    pub fn process_path(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let ini = self.loader().load_path(path)?;
        tracing::debug!(path = %path.display(), groups = ini.groups.len(), "Processing ini file");
        self.process(&ini)
    }

    /// Process an already loaded document.
    pub fn process(&mut self, ini: &IniFile) -> Result<()> {
        let groups = &self.options.groups;
        let render_options = RenderOptions {
            warn_unresolved: self.options.warn_unresolved,
        };

        dump_group(ini, &groups.pre_amble, &mut self.body);
        dump_sections(
            ini,
            groups,
            &mut self.body,
            &mut self.validation,
            render_options,
        )?;
        dump_group(ini, &groups.post_amble, &mut self.body);
        Ok(())
    }

    /// Generated body so far.
    pub fn body(&self) -> &OutputStore {
        &self.body
    }

    /// Validation lines so far.
    pub fn validation(&self) -> &OutputStore {
        &self.validation
    }

    /// Write everything collected so far to the configured destination.
    pub fn finish(&self, emit_options: &EmitOptions) -> Result<EmitOutcome> {
        emit(emit_options, &self.body, &self.validation)
    }
}
