//! Incremental generation sessions.
//!
//! A session owns a pipeline and a memo keyed by qualified name. Each
//! [`GenerationSession::advance`] re-runs generation over a catalog, reusing
//! cached artifact text for declarations whose fingerprint is unchanged.
//! The fingerprint covers the declaration's own serialized bytes plus the
//! bytes of every declaration its markers reference, so editing a facade
//! invalidates the abstractions that mirror it. Correctness never depends on
//! the memo: a cold session and a warm one produce identical artifacts.

use std::collections::HashMap;

use scrivener_engine::{ArtifactStore, GeneratedArtifact, generate_for};
use scrivener_foundation::{DiagnosticChannel, DiagnosticConfig, DiagnosticLog, Result, Severity};
use scrivener_model::{Declaration, DeclarationCatalog, IntentMarker, QualifiedName};

use crate::serialize;

/// Statistics and output of one session advance.
#[derive(Clone, Debug)]
pub struct SessionRun {
    /// Artifacts produced this run, reused and regenerated alike.
    pub artifacts: ArtifactStore,
    /// Diagnostics reported this run. Reused declarations report nothing;
    /// their previous run was clean by construction.
    pub diagnostics: DiagnosticLog,
    /// Declarations visited.
    pub declarations_scanned: usize,
    /// Artifacts served from the memo without re-synthesis.
    pub artifacts_reused: usize,
    /// Artifacts synthesized fresh this run.
    pub artifacts_regenerated: usize,
}

impl SessionRun {
    /// Whether the run completed without error diagnostics.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_clean()
    }
}

#[derive(Clone, Debug)]
struct MemoEntry {
    fingerprint: Vec<u8>,
    artifacts: Vec<GeneratedArtifact>,
}

/// A memoizing driver for repeated generation over evolving catalogs.
#[derive(Debug, Default)]
pub struct GenerationSession {
    diagnostic_config: DiagnosticConfig,
    memo: HashMap<QualifiedName, MemoEntry>,
}

impl GenerationSession {
    /// Creates a session with an empty memo and default diagnostics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with the given diagnostic configuration.
    #[must_use]
    pub fn with_diagnostic_config(diagnostic_config: DiagnosticConfig) -> Self {
        Self {
            diagnostic_config,
            memo: HashMap::new(),
        }
    }

    /// Number of declarations currently memoized.
    #[must_use]
    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }

    /// Drops all memoized state. The next advance regenerates everything.
    pub fn clear(&mut self) {
        self.memo.clear();
    }

    /// Runs generation over the catalog, reusing unchanged declarations.
    ///
    /// Declarations absent from the catalog fall out of the memo, so stale
    /// artifacts never outlive their declaration.
    ///
    /// # Errors
    ///
    /// Returns an error only if a declaration cannot be fingerprinted;
    /// synthesis failures become diagnostics in the run, not errors.
    pub fn advance(&mut self, catalog: &DeclarationCatalog) -> Result<SessionRun> {
        let mut diagnostics = DiagnosticLog::with_config(self.diagnostic_config.clone());
        let mut artifacts = ArtifactStore::new();
        let mut next_memo = HashMap::new();
        let mut scanned = 0usize;
        let mut reused = 0usize;
        let mut regenerated = 0usize;

        for declaration in catalog.declarations() {
            scanned += 1;
            if declaration.is_unmarked() {
                continue;
            }

            let fingerprint = fingerprint(declaration, catalog)?;
            let cached = self
                .memo
                .get(&declaration.name)
                .filter(|entry| entry.fingerprint == fingerprint);

            let produced = if let Some(entry) = cached {
                reused += entry.artifacts.len();
                entry.artifacts.clone()
            } else {
                let mut local = DiagnosticLog::new();
                let fresh = generate_for(declaration, catalog, &mut local);
                regenerated += fresh.len();
                let memoizable = local.count_at(Severity::Error) == 0;
                for diagnostic in local.entries() {
                    diagnostics.report(diagnostic.clone());
                }
                if !memoizable {
                    // Failed requests re-run (and re-report) next advance.
                    for artifact in &fresh {
                        artifacts = artifacts.insert(artifact.clone());
                    }
                    continue;
                }
                fresh
            };

            for artifact in &produced {
                artifacts = artifacts.insert(artifact.clone());
            }
            next_memo.insert(
                declaration.name.clone(),
                MemoEntry {
                    fingerprint,
                    artifacts: produced,
                },
            );
        }

        self.memo = next_memo;
        Ok(SessionRun {
            artifacts,
            diagnostics,
            declarations_scanned: scanned,
            artifacts_reused: reused,
            artifacts_regenerated: regenerated,
        })
    }
}

/// Serialized bytes of a declaration and everything its markers reference.
fn fingerprint(declaration: &Declaration, catalog: &DeclarationCatalog) -> Result<Vec<u8>> {
    let mut bytes = serialize::to_bytes(declaration)?;
    for name in referenced_names(declaration) {
        if let Some(referenced) = catalog.resolve(name) {
            bytes.extend(serialize::to_bytes(referenced)?);
        }
    }
    Ok(bytes)
}

/// Qualified names a declaration's markers (and parentage) depend on,
/// in declared order.
fn referenced_names(declaration: &Declaration) -> Vec<&str> {
    let mut names = Vec::new();
    if let Some(parent) = &declaration.parent {
        names.push(parent.as_str());
    }
    for marker in &declaration.markers {
        match marker {
            IntentMarker::Abstraction {
                target,
                abstraction,
                implementation,
                ..
            } => {
                names.push(target.as_str());
                names.push(abstraction.as_str());
                names.push(implementation.as_str());
            }
            IntentMarker::Wrapper { class_name } => names.push(class_name.as_str()),
            _ => {}
        }
    }
    names
}
