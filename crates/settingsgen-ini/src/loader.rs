/*
 * loader.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Line-oriented INI loader.
//!
//! The format is deliberately small:
//!
//! ```ini
//! ; comment
//! [group]
//! name = value
//! "quoted name" = "quoted value"
//! flag
//! ```
//!
//! Leading and trailing blanks are ignored. Inside a sequence group nothing
//! is interpreted except a new `[group]` header: every other line, blank and
//! comment lines included, becomes an item name.

use std::fs;
use std::path::Path;

use crate::error::{IniError, Result};
use crate::model::{GroupKind, IniFile, IniGroup};

/// Loads INI text into an [`IniFile`].
///
/// The loader decides the [`GroupKind`] of each group by its name. Groups not
/// named in [`IniLoader::list_groups`] or [`IniLoader::sequence_groups`] hold
/// plain variables.
#[derive(Debug, Clone, Default)]
pub struct IniLoader {
    list_groups: Vec<String>,
    sequence_groups: Vec<String>,
}

impl IniLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of groups to load as [`GroupKind::List`].
    pub fn list_groups<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.list_groups.extend(names.into_iter().map(Into::into));
        self
    }

    /// Names of groups to load as [`GroupKind::Sequence`].
    pub fn sequence_groups<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sequence_groups.extend(names.into_iter().map(Into::into));
        self
    }

    fn kind_for(&self, name: &str) -> GroupKind {
        if self.list_groups.iter().any(|n| n == name) {
            GroupKind::List
        } else if self.sequence_groups.iter().any(|n| n == name) {
            GroupKind::Sequence
        } else {
            GroupKind::Variables
        }
    }

    /// Load an INI file from disk.
    ///
    /// The file is read as raw bytes, so line endings are never translated.
    /// Content that is not valid UTF-8 is rejected, naming the first bad line.
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<IniFile> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| IniError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "Loading ini file");

        let text = std::str::from_utf8(&bytes).map_err(|e| IniError::InvalidUtf8 {
            path: path.to_path_buf(),
            line: line_of_offset(&bytes, e.valid_up_to()),
        })?;
        self.load_str(text)
    }

    /// Load INI data from a string.
    pub fn load_str(&self, text: &str) -> Result<IniFile> {
        let mut ini = IniFile::new();
        let mut current: Option<usize> = None;

        for (index, raw) in text.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim_end_matches(['\r', '\n', ' ', '\t']);
            let s = line.trim_start_matches([' ', '\t']);

            let in_sequence = current.is_some_and(|i| ini.groups[i].is_sequence());
            if !in_sequence && (s.is_empty() || s.starts_with('#') || s.starts_with(';')) {
                continue;
            }

            if let Some(header) = s.strip_prefix('[') {
                let Some(name) = header.strip_suffix(']') else {
                    return Err(IniError::InvalidGroupName {
                        line: line_no,
                        text: raw.to_string(),
                    });
                };
                ini.push_group(IniGroup::new(name, self.kind_for(name)));
                current = Some(ini.groups.len() - 1);
                continue;
            }

            let Some(group_index) = current else {
                return Err(IniError::OutsideGroup {
                    line: line_no,
                    text: raw.to_string(),
                });
            };
            let group = &mut ini.groups[group_index];

            if group.is_sequence() {
                // Keep leading blanks: sequence lines are copied verbatim.
                group.push_item(line, None);
                continue;
            }

            let (name, value) = split_item(s);
            group.push_item(name, value);
        }

        Ok(ini)
    }
}

/// 1-based line number of the byte at `offset`.
fn line_of_offset(bytes: &[u8], offset: usize) -> usize {
    bytes[..offset].iter().filter(|&&b| b == b'\n').count() + 1
}

/// Split a trimmed `name = value` line.
///
/// A name starting with `"` runs up to the next `"`; otherwise it ends at the
/// first `=`, space or tab. One pair of surrounding quotes is removed from the
/// value. An unquoted empty value means "no value".
fn split_item(s: &str) -> (&str, Option<String>) {
    let (name, rest) = match s.strip_prefix('"') {
        Some(quoted) => match quoted.find('"') {
            Some(end) => (&quoted[..end], &quoted[end + 1..]),
            None => (quoted, ""),
        },
        None => {
            let end = s.find(['=', ' ', '\t']).unwrap_or(s.len());
            (&s[..end], &s[end..])
        }
    };

    let rest = rest.trim_start_matches(['=', ' ', '\t']);
    let quoted = rest.starts_with('"');
    let mut value = if quoted { &rest[1..] } else { rest };
    if let Some(stripped) = value.strip_suffix('"') {
        value = stripped;
    }

    if !quoted && value.is_empty() {
        (name, None)
    } else {
        (name, Some(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::IniItem;
    use pretty_assertions::assert_eq;

    fn load(text: &str) -> IniFile {
        IniLoader::new()
            .sequence_groups(["pre-amble", "post-amble"])
            .load_str(text)
            .expect("ini should load")
    }

    #[test]
    fn test_simple_group() {
        let ini = load("[max_speed]\nname = MaxSpeed\nvalue=255\n");
        let group = ini.group("max_speed").unwrap();

        assert_eq!(group.kind, GroupKind::Variables);
        assert_eq!(
            group.items,
            vec![
                IniItem::new("name", Some("MaxSpeed".to_string())),
                IniItem::new("value", Some("255".to_string())),
            ]
        );
    }

    #[test]
    fn test_comments_and_blank_lines_are_skipped() {
        let ini = load("; leading comment\n\n[a]\n# hash comment\n   \nx = 1\n");
        assert_eq!(ini.groups.len(), 1);
        assert_eq!(ini.groups[0].items.len(), 1);
    }

    #[test]
    fn test_value_without_equals_is_absent() {
        let ini = load("[a]\nflag\nempty =\nquoted_empty = \"\"\n");
        let group = ini.group("a").unwrap();

        assert!(group.item("flag").is_some());
        assert_eq!(group.item("flag").unwrap().value, None);
        assert_eq!(group.item("empty").unwrap().value, None);
        assert_eq!(group.item("quoted_empty").unwrap().value, Some(String::new()));
    }

    #[test]
    fn test_quoted_name_and_value() {
        let ini = load("[a]\n\"spaced name\" = \"  padded  \"\n");
        assert_eq!(ini.group("a").unwrap().item_value("spaced name"), Some("  padded  "));
    }

    #[test]
    fn test_value_keeps_inner_equals_and_dollars() {
        let ini = load("[templates]\nspeed = int $name = $value;\n");
        assert_eq!(
            ini.group("templates").unwrap().item_value("speed"),
            Some("int $name = $value;")
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let ini = load("[a]\r\nx = 1\r\n");
        assert_eq!(ini.group("a").unwrap().item_value("x"), Some("1"));
    }

    #[test]
    fn test_sequence_group_keeps_raw_lines() {
        let ini = load("[pre-amble]\n  indented\n\n; not a comment here\n[next]\n");
        let group = ini.group("pre-amble").unwrap();

        assert_eq!(group.kind, GroupKind::Sequence);
        let names: Vec<&str> = group.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["  indented", "", "; not a comment here"]);
        assert!(group.items.iter().all(|i| i.value.is_none()));
        assert!(ini.group("next").is_some());
    }

    #[test]
    fn test_list_groups() {
        let ini = IniLoader::new()
            .list_groups(["names"])
            .load_str("[names]\nfirst\nsecond\n")
            .unwrap();
        assert_eq!(ini.group("names").unwrap().kind, GroupKind::List);
    }

    #[test]
    fn test_invalid_group_name() {
        let err = IniLoader::new().load_str("[a]\n[broken\n").unwrap_err();
        assert!(matches!(err, IniError::InvalidGroupName { line: 2, .. }));
        assert_eq!(err.to_string(), "ini: invalid group name '[broken' (line 2)");
    }

    #[test]
    fn test_item_outside_group() {
        let err = IniLoader::new().load_str("x = 1\n").unwrap_err();
        assert!(matches!(err, IniError::OutsideGroup { line: 1, .. }));
    }

    #[test]
    fn test_line_of_offset() {
        let bytes = b"[a]\nx = 1\ny = caf\xe9\n";
        assert_eq!(line_of_offset(bytes, 0), 1);
        assert_eq!(line_of_offset(bytes, 4), 2);
        assert_eq!(line_of_offset(bytes, 17), 3);
    }

    #[test]
    fn test_group_order_is_document_order() {
        let ini = load("[b]\n[a]\n[c]\n");
        let names: Vec<&str> = ini.groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }
}
