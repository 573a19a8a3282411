/*
 * resolver.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Template variable lookup.

use settingsgen_ini::IniGroup;

/// Find the value of a template variable.
///
/// The group being rendered is searched first, then `defaults` when given.
/// An item that exists without a value does not fall through to the defaults:
/// the first item found decides. `None` is not an error; callers decide what
/// a missing value means.
pub fn find_item_value<'a>(
    name: &str,
    group: &'a IniGroup,
    defaults: Option<&'a IniGroup>,
) -> Option<&'a str> {
    group
        .item(name)
        .or_else(|| defaults.and_then(|d| d.item(name)))
        .and_then(|item| item.value.as_deref())
}
