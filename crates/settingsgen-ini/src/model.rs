/*
 * model.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Groups, items and the loaded document.
//!
//! Lookups by name always return the *first* match. Duplicate names are
//! allowed and kept in document order; later duplicates are only visible
//! when iterating.

/// How the items of a group are to be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupKind {
    /// Plain `name = value` variables.
    #[default]
    Variables,

    /// `name = value` items that form a list.
    List,

    /// Raw lines stored as item names, without values.
    Sequence,
}

/// A single `name = value` entry of a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniItem {
    /// Name of the item. Empty for blank lines of a sequence group.
    pub name: String,

    /// Value of the item. `None` means the key is present without a value.
    pub value: Option<String>,
}

impl IniItem {
    /// Create an item.
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A named, ordered collection of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniGroup {
    pub name: String,
    pub kind: GroupKind,
    pub items: Vec<IniItem>,
}

impl IniGroup {
    /// Create an empty group.
    pub fn new(name: impl Into<String>, kind: GroupKind) -> Self {
        Self {
            name: name.into(),
            kind,
            items: Vec::new(),
        }
    }

    /// Append an item and return a reference to it.
    pub fn push_item(&mut self, name: impl Into<String>, value: Option<String>) -> &mut IniItem {
        self.items.push(IniItem::new(name, value));
        let last = self.items.len() - 1;
        &mut self.items[last]
    }

    /// Builder-style variant of [`IniGroup::push_item`] for a valued item.
    pub fn with_item(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_item(name, Some(value.into()));
        self
    }

    /// Find the first item with the given name.
    pub fn item(&self, name: &str) -> Option<&IniItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Value of the first item with the given name, if that item has one.
    pub fn item_value(&self, name: &str) -> Option<&str> {
        self.item(name).and_then(|item| item.value.as_deref())
    }

    /// Whether this group was loaded as a sequence of raw lines.
    pub fn is_sequence(&self) -> bool {
        self.kind == GroupKind::Sequence
    }
}

/// A loaded INI document: groups in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniFile {
    pub groups: Vec<IniGroup>,
}

impl IniFile {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the first group with the given name.
    pub fn group(&self, name: &str) -> Option<&IniGroup> {
        self.groups.iter().find(|group| group.name == name)
    }

    /// Append a group and return a mutable reference to it.
    pub fn push_group(&mut self, group: IniGroup) -> &mut IniGroup {
        self.groups.push(group);
        let last = self.groups.len() - 1;
        &mut self.groups[last]
    }

    /// Builder-style variant of [`IniFile::push_group`].
    pub fn with_group(mut self, group: IniGroup) -> Self {
        self.groups.push(group);
        self
    }
}
