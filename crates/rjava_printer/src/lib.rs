//! rjava_printer: Display text for Java syntax tree nodes.
//!
//! Renders types, method and constructor signatures, declaration kinds,
//! node names and imports into the stable strings used by rule violation
//! messages and report keys. The printer only reads the tree.
//!
//! The free functions ([`pretty_print_type`], [`display_signature`],
//! [`node_name`], ...) cover the common case. [`Printer`] is the same
//! machinery with explicit [`PrinterOptions`].

pub mod classify;
pub mod error;
pub mod import;
pub mod options;
pub mod signature;
pub mod types;

pub use classify::{node_name, printable_node_kind, resource_stable_name, type_declaration_kind};
pub use error::{PrettyPrintError, Result};
pub use import::pretty_import;
pub use options::{parse_printer_options, parse_printer_options_file, PrinterOptions, TypeArgumentSeparator};
pub use signature::{display_signature, display_signature_of};
pub use types::{pretty_print_type, pretty_print_type_with_targs};

use rjava_core::intern::{InternedString, StringInterner};

/// Accumulates display text for one node at a time.
///
/// Each public `print_*` method starts from an empty buffer and returns
/// the finished string; the buffer is reused between calls.
pub struct Printer<'i> {
    output: String,
    options: PrinterOptions,
    interner: &'i StringInterner,
}

impl<'i> Printer<'i> {
    pub fn new(interner: &'i StringInterner) -> Self {
        Self::with_options(interner, PrinterOptions::default())
    }

    pub fn with_options(interner: &'i StringInterner, options: PrinterOptions) -> Self {
        Self {
            output: String::with_capacity(64),
            options,
            interner,
        }
    }

    pub fn options(&self) -> &PrinterOptions {
        &self.options
    }

    fn resolve(&self, s: InternedString) -> &'i str {
        self.interner.resolve(s)
    }

    fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    // ========================================================================
    // Core write helpers
    // ========================================================================

    fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    fn write_name(&mut self, name: InternedString) {
        let text = self.resolve(name);
        self.output.push_str(text);
    }

    fn write_brackets(&mut self, count: u32) {
        for _ in 0..count {
            self.output.push_str("[]");
        }
    }
}
