/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Template expansion engine for generated settings tables.
//!
//! The input is an INI document (see [`settingsgen_ini`]). One group,
//! `[templates]`, maps names to one-line templates; every other non-reserved
//! group is rendered through the template with the same name, using its own
//! items as template variables:
//!
//! ```ini
//! [templates]
//! speed = int $name = $value;
//!
//! [speed]
//! name  = MaxSpeed
//! value = 255
//! ifdef = FEATURE_X
//! ```
//!
//! renders as
//!
//! ```c
//! #ifdef FEATURE_X
//! int MaxSpeed = 255;
//! #endif
//! ```
//!
//! Reserved groups:
//!
//! - `templates`: the templates
//! - `defaults`: fallback values for variables a group does not define
//! - `validation`: optional second template per group, rendered after all bodies
//! - `pre-amble` / `post-amble`: lines copied verbatim around the rendered groups
//!
//! # Architecture
//!
//! A [`Generator`] owns two [`OutputStore`]s (body and validation lines).
//! Nothing is written until all input files are processed; then
//! [`Generator::finish`] hands both stores to [`emit`], which only touches
//! the destination file when its content would change.
//!
//! # Example
//!
//! ```rust
//! use settingsgen::Generator;
//!
//! let mut generator = Generator::default();
//! let ini = generator
//!     .loader()
//!     .load_str("[templates]\nspeed = int $name = $value;\n[speed]\nname = MaxSpeed\nvalue = 255\n")
//!     .unwrap();
//! generator.process(&ini).unwrap();
//!
//! assert_eq!(generator.body().to_string_lossy(), "int MaxSpeed = 255;\n");
//! ```

pub mod emit;
pub mod error;
pub mod generator;
pub mod options;
pub mod output;
pub mod render;
pub mod resolver;
pub mod sections;

// Re-export main types at crate root
pub use emit::{EmitOptions, EmitOutcome, emit};
pub use error::{ErrorKind, GenError, Result};
pub use generator::Generator;
pub use options::{GeneratorOptions, ReservedGroups};
pub use output::{DEFAULT_BLOCK_SIZE, OutputStore};
pub use render::{GUARD_KEYWORDS, RenderOptions, render_line};
pub use resolver::find_item_value;
pub use sections::{dump_group, dump_sections};
