/*
 * sections.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Walking the loaded groups and rendering each one.

use settingsgen_ini::IniFile;

use crate::error::{GenError, Result};
use crate::options::ReservedGroups;
use crate::output::OutputStore;
use crate::render::{RenderOptions, render_line};

/// Copy the item names of a sequence group verbatim, one per line.
///
/// Nothing happens when the group is missing or is not a sequence group.
/// Empty lines of the group are dropped.
pub fn dump_group(ini: &IniFile, group_name: &str, out: &mut OutputStore) {
    let Some(group) = ini.group(group_name).filter(|g| g.is_sequence()) else {
        return;
    };
    for item in group.items.iter().filter(|item| !item.name.is_empty()) {
        out.add(&item.name);
        out.add("\n");
    }
}

/// Render every non-reserved group through the template named after it.
///
/// Rendered lines go to `body`. When the validation group has a template for
/// the group as well, that one is rendered into `validation`. A document
/// without a template group produces nothing.
pub fn dump_sections(
    ini: &IniFile,
    groups: &ReservedGroups,
    body: &mut OutputStore,
    validation: &mut OutputStore,
    options: RenderOptions,
) -> Result<()> {
    let Some(templates) = ini.group(&groups.templates) else {
        tracing::debug!("No '{}' group, nothing to render", groups.templates);
        return Ok(());
    };
    let defaults = ini.group(&groups.defaults);
    let validations = ini.group(&groups.validation);

    for group in ini.groups.iter().filter(|g| !groups.is_reserved(&g.name)) {
        let Some(template) = templates.item_value(&group.name) else {
            return Err(GenError::MissingTemplate {
                group: group.name.clone(),
            });
        };
        tracing::debug!(group = %group.name, "Rendering group");
        render_line(template, group, defaults, body, options);

        if let Some(check) = validations.and_then(|v| v.item_value(&group.name)) {
            render_line(check, group, defaults, validation, options);
        }
    }

    Ok(())
}
