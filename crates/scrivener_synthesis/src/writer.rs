//! Indentation-tracking writer for generated artifact text.
//!
//! Every artifact starts with the same banner comment, uses 4-space
//! indentation, and ends each line with a newline, so re-running a synthesis
//! engine on an unchanged request yields byte-identical text.

use scrivener_model::TypeRef;

/// The fixed banner emitted at the top of every artifact.
pub const BANNER: &str = "// Generated by scrivener. Do not edit by hand.";

/// Configuration for the code writer.
#[derive(Clone, Debug)]
pub struct WriterConfig {
    /// Number of spaces per indentation level.
    pub indent_width: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self { indent_width: 4 }
    }
}

/// Writer state: an output buffer plus the current indentation level.
#[derive(Clone, Debug, Default)]
pub struct CodeWriter {
    config: WriterConfig,
    output: String,
    indent_level: usize,
}

impl CodeWriter {
    /// Creates an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a writer with the banner and a trailing blank line written.
    #[must_use]
    pub fn with_banner() -> Self {
        let mut writer = Self::new();
        writer.line(BANNER);
        writer.blank();
        writer
    }

    /// Creates an empty writer with the given configuration.
    #[must_use]
    pub fn with_config(config: WriterConfig) -> Self {
        Self {
            config,
            output: String::new(),
            indent_level: 0,
        }
    }

    /// Writes one line at the current indentation.
    pub fn line(&mut self, text: &str) {
        if text.is_empty() {
            self.output.push('\n');
            return;
        }
        for _ in 0..self.indent_level * self.config.indent_width {
            self.output.push(' ');
        }
        self.output.push_str(text);
        self.output.push('\n');
    }

    /// Writes an empty line.
    pub fn blank(&mut self) {
        self.output.push('\n');
    }

    /// Writes `header {` and indents.
    pub fn open(&mut self, header: &str) {
        self.line(&format!("{header} {{"));
        self.indent_level += 1;
    }

    /// Dedents and writes the closing brace.
    pub fn close(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
        self.line("}");
    }

    /// Consumes the writer and returns the accumulated text.
    #[must_use]
    pub fn finish(self) -> String {
        self.output
    }
}

/// Renders a [`TypeRef`] as Rust type text.
///
/// Generic arguments render as `Name<A, B>`; an optional type wraps the whole
/// rendering in `Option<...>`.
#[must_use]
pub fn rust_type(ty: &TypeRef) -> String {
    let mut base = ty.name.clone();
    if !ty.args.is_empty() {
        base.push('<');
        for (i, arg) in ty.args.iter().enumerate() {
            if i > 0 {
                base.push_str(", ");
            }
            base.push_str(&rust_type(arg));
        }
        base.push('>');
    }
    if ty.optional {
        format!("Option<{base}>")
    } else {
        base
    }
}

/// Derives a property identifier from a field name.
///
/// Strips leading underscores (`_created_at` becomes `created_at`). A name
/// made entirely of underscores is returned unchanged.
#[must_use]
pub fn snake_ident(name: &str) -> String {
    let stripped = name.trim_start_matches('_');
    if stripped.is_empty() {
        name.to_string()
    } else {
        stripped.to_string()
    }
}

/// Deterministic disambiguation for overload sets.
///
/// The first occurrence of a name keeps it; later occurrences get `_2`, `_3`,
/// ... suffixes in declaration order.
#[derive(Debug, Default)]
pub struct OverloadNames {
    counts: std::collections::HashMap<String, usize>,
}

impl OverloadNames {
    /// Creates an empty name tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the emitted name for the next occurrence of `name`.
    pub fn emitted(&mut self, name: &str) -> String {
        let seen = self.counts.entry(name.to_string()).or_insert(0);
        *seen += 1;
        if *seen == 1 {
            name.to_string()
        } else {
            format!("{name}_{}", *seen)
        }
    }
}
