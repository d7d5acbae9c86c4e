//! Structured diagnostics for skipped and invalid generation requests.
//!
//! The pipeline never aborts a whole run: every per-declaration failure is
//! reported through a [`DiagnosticChannel`] and the rest of the catalog
//! proceeds. [`DiagnosticLog`] is the collecting implementation used by the
//! pipeline itself; callers may supply their own channel at the boundary.

use std::fmt;

/// Severity of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Informational, nothing was lost (e.g. a deduplicated request).
    Info,
    /// Suspicious but generation proceeded.
    Warning,
    /// A request was skipped.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A single diagnostic produced during a generation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity of the diagnostic.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Qualified name of the declaration the diagnostic concerns.
    pub declaration: Option<String>,
}

impl Diagnostic {
    /// Creates an error diagnostic.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            declaration: None,
        }
    }

    /// Creates a warning diagnostic.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            declaration: None,
        }
    }

    /// Creates an informational diagnostic.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
            declaration: None,
        }
    }

    /// Attaches the originating declaration's identity.
    #[must_use]
    pub fn for_declaration(mut self, declaration: impl Into<String>) -> Self {
        self.declaration = Some(declaration.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(declaration) = &self.declaration {
            write!(f, " [{declaration}]")?;
        }
        Ok(())
    }
}

/// Boundary contract for diagnostic consumers.
pub trait DiagnosticChannel {
    /// Reports a single diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Configuration for the collecting diagnostic log.
#[derive(Clone, Debug)]
pub struct DiagnosticConfig {
    /// Echo each reported diagnostic to stderr.
    pub echo_to_stderr: bool,
    /// Minimum severity to retain; lower-severity reports are dropped.
    pub minimum_severity: Severity,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        Self {
            echo_to_stderr: false,
            minimum_severity: Severity::Info,
        }
    }
}

impl DiagnosticConfig {
    /// Creates a configuration that echoes to stderr, for interactive use.
    #[must_use]
    pub fn verbose() -> Self {
        Self {
            echo_to_stderr: true,
            minimum_severity: Severity::Info,
        }
    }

    /// Builder method to set stderr echoing.
    #[must_use]
    pub fn with_echo_to_stderr(mut self, echo: bool) -> Self {
        self.echo_to_stderr = echo;
        self
    }

    /// Builder method to set the minimum retained severity.
    #[must_use]
    pub fn with_minimum_severity(mut self, severity: Severity) -> Self {
        self.minimum_severity = severity;
        self
    }
}

/// Collecting diagnostic channel used by the generation pipeline.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticLog {
    config: DiagnosticConfig,
    entries: Vec<Diagnostic>,
}

impl DiagnosticLog {
    /// Creates an empty log with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty log with the given configuration.
    #[must_use]
    pub fn with_config(config: DiagnosticConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
        }
    }

    /// Returns all retained diagnostics in report order.
    #[must_use]
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Returns the number of retained diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of retained diagnostics at the given severity.
    #[must_use]
    pub fn count_at(&self, severity: Severity) -> usize {
        self.entries
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    /// Returns true if no error-severity diagnostic has been reported.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.count_at(Severity::Error) == 0
    }
}

impl DiagnosticChannel for DiagnosticLog {
    fn report(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity < self.config.minimum_severity {
            return;
        }
        if self.config.echo_to_stderr {
            eprintln!("{diagnostic}");
        }
        self.entries.push(diagnostic);
    }
}
