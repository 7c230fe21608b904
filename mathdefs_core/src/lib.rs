//! `mathdefs_core` is the core library for the `mathdefs` quiz preprocessor.
//! It turns `[defs]` blocks of variable definitions into HTML tables with
//! inline LaTeX math, so that long definitions reflow nicely on mobile.
//!
//! ```text
//! [defs]
//!   A = "the sum of the three dice rolls is 12",
//!   B = "the sum of the three dice rolls is odd".
//! [/defs]
//! ```
//!
//! ## Processing Pipeline
//!
//! ```text
//! Input document
//!   → Line reader (one shared, forward-only cursor)
//!   → Scanner (passes lines through, spots `[defs]`)
//!   → Definitions parser (collects `name = definition` until `[/defs]`)
//!   → Formatter (quotes, trailing punctuation, empty math blocks)
//!   → Table renderer (indented HTML table)
//! ```
//!
//! ## Key Types
//!
//! - [`LineReader`] — The cursor shared by the scanner and the parser.
//! - [`VarDef`] — One variable and its raw definition.
//! - [`DefsBlock`] — The parsed contents of a block with its indentation.
//! - [`MathdefsError`] — Syntax and I/O errors, with `miette` diagnostics.
//!
//! ## Quick Start
//!
//! ```rust
//! use mathdefs_core::preprocess_str;
//!
//! let output = preprocess_str("[defs]\nA = \"a die shows 6\".\n[/defs]\n").unwrap();
//! assert!(output.contains("<td style=\"vertical-align: top;\">$A = $</td>"));
//! ```

pub use error::*;
pub use format::*;
pub use lines::*;
pub use parser::*;
pub use render::*;
pub use scanner::*;

#[allow(unused_assignments)]
mod error;
mod format;
mod lines;
mod parser;
pub(crate) mod patterns;
mod render;
mod scanner;
