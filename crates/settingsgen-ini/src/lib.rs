/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Ordered INI configuration model for the settings table generator.
//!
//! An INI document is loaded into an [`IniFile`]: an ordered list of
//! [`IniGroup`]s, each holding an ordered list of [`IniItem`]s. Order is
//! significant everywhere, since it decides the order of generated output.
//!
//! Groups come in three flavours (see [`GroupKind`]):
//!
//! - `Variables`: plain `key = value` items
//! - `List`: loaded like variables, but the consumer treats the items as a list
//! - `Sequence`: every raw line is an item name, nothing is interpreted
//!
//! Which flavour a group gets is decided by its name, through the
//! [`IniLoader`] builder.
//!
//! # Example
//!
//! ```rust
//! use settingsgen_ini::{GroupKind, IniLoader};
//!
//! let ini = IniLoader::new()
//!     .sequence_groups(["pre-amble"])
//!     .load_str("[pre-amble]\n#include <cstdint>\n[speed]\nvalue = 255\n")
//!     .unwrap();
//!
//! assert_eq!(ini.group("pre-amble").unwrap().kind, GroupKind::Sequence);
//! assert_eq!(ini.group("speed").unwrap().item_value("value"), Some("255"));
//! ```

pub mod error;
pub mod loader;
pub mod model;

pub use error::{IniError, Result};
pub use loader::IniLoader;
pub use model::{GroupKind, IniFile, IniGroup, IniItem};
