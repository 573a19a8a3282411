/*
 * render.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Expansion of a single template line.
//!
//! A template is plain text with variable references:
//!
//! - `$name` is replaced by the value of `name`, where a name is one or more
//!   of `_`, `a`-`z` and `0`-`9` (longest run wins)
//! - `$$` is a literal `$`
//! - a `$` not followed by a name character is a literal `$`
//!
//! Values are inserted verbatim and never expanded again. A variable without
//! a value expands to nothing.
//!
//! The rendered line is wrapped in `#if`, `#ifdef` and `#ifndef` guards when
//! the group (or the defaults) define items with those names.

use settingsgen_ini::IniGroup;

use crate::output::OutputStore;
use crate::resolver::find_item_value;

/// Guard keywords, in the order their lines are written.
pub const GUARD_KEYWORDS: [&str; 3] = ["if", "ifdef", "ifndef"];

/// Switches that affect diagnostics, never the rendered text.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Log unresolved variables at warning level instead of debug level.
    pub warn_unresolved: bool,
}

/// Render `template` for `group` into `out`, followed by a newline.
pub fn render_line(
    template: &str,
    group: &IniGroup,
    defaults: Option<&IniGroup>,
    out: &mut OutputStore,
    options: RenderOptions,
) {
    let mut guards = 0;
    for keyword in GUARD_KEYWORDS {
        if let Some(condition) = find_item_value(keyword, group, defaults) {
            out.add("#");
            out.add(keyword);
            out.add(" ");
            out.add(condition);
            out.add("\n");
            guards += 1;
        }
    }

    expand(template, group, defaults, out, options);
    out.add("\n");

    for _ in 0..guards {
        out.add("#endif\n");
    }
}

fn is_name_byte(b: u8) -> bool {
    b == b'_' || b.is_ascii_lowercase() || b.is_ascii_digit()
}

/// Write the template text with all variable references replaced.
fn expand(
    template: &str,
    group: &IniGroup,
    defaults: Option<&IniGroup>,
    out: &mut OutputStore,
    options: RenderOptions,
) {
    let bytes = template.as_bytes();
    let mut literal_start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes[pos] != b'$' {
            pos += 1;
            continue;
        }
        out.add(&template[literal_start..pos]);

        if bytes.get(pos + 1) == Some(&b'$') {
            out.add("$");
            pos += 2;
            literal_start = pos;
            continue;
        }

        let name_start = pos + 1;
        let name_len = bytes[name_start..]
            .iter()
            .take_while(|b| is_name_byte(**b))
            .count();
        let name_end = name_start + name_len;

        if name_len == 0 {
            out.add("$");
        } else {
            let name = &template[name_start..name_end];
            match find_item_value(name, group, defaults) {
                Some(value) => out.add(value),
                None if options.warn_unresolved => {
                    tracing::warn!(group = %group.name, variable = name, "Template variable has no value");
                }
                None => {
                    tracing::debug!(group = %group.name, variable = name, "Template variable has no value");
                }
            }
        }

        pos = name_end;
        literal_start = pos;
    }

    out.add(&template[literal_start..]);
}
