//! phast_ast: Syntax tree nodes as produced by the external parser.
//!
//! A [`Node`] carries a [`Kind`] tag, a raw [`NodeFlags`] integer whose
//! meaning depends on the kind, and an ordered map of named children. This
//! crate only models and decodes that tree; it never interprets it.

pub mod error;
pub mod flags;
pub mod kind;
pub mod node;

// Re-export key types
pub use error::AstError;
pub use flags::{ArraySyntax, NameQualification, NodeFlags};
pub use kind::Kind;
pub use node::{Children, Node, Value};
