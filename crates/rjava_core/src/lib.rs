//! rjava_core: Core utilities shared by the rjava crates.
//!
//! Provides string interning and source text ranges used by the Java
//! syntax tree and the display printer.

pub mod intern;
pub mod text;

// Re-export commonly used types
pub use intern::{InternedString, StringInterner};
pub use text::{TextPos, TextRange};
