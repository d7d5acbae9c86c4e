//! The generation pipeline: catalog in, artifacts and diagnostics out.
//!
//! A run walks the catalog in insertion order, matches each declaration's
//! markers into requests, dispatches each request to its family's engine,
//! and collects the resulting artifacts keyed by declaration and family.
//! Bad markers and failed syntheses become error diagnostics; they never
//! abort the run, so one broken declaration cannot suppress artifacts for
//! the rest of the catalog.

use scrivener_foundation::{Diagnostic, DiagnosticChannel, DiagnosticConfig, DiagnosticLog};
use scrivener_model::{ArtifactFamily, Declaration, DeclarationCatalog};
use scrivener_synthesis::request::Request;
use scrivener_synthesis::{abstraction, enum_ext, enumerator_ext, notification, wrapper};

use crate::artifact::{ArtifactKey, ArtifactSink, ArtifactStore, GeneratedArtifact};
use crate::matcher::RuleMatcher;

/// Everything a run produced.
#[derive(Clone, Debug)]
pub struct GenerationOutcome {
    /// Artifacts produced, keyed by declaration and family.
    pub artifacts: ArtifactStore,
    /// Diagnostics reported during the run.
    pub diagnostics: DiagnosticLog,
    /// Declarations visited.
    pub declarations_scanned: usize,
    /// Requests successfully extracted from markers.
    pub requests_matched: usize,
    /// Artifacts synthesized and stored.
    pub artifacts_emitted: usize,
    /// Requests dropped as redundant (e.g. field-level notification
    /// requests already covered by a class-level marker).
    pub requests_skipped: usize,
}

impl GenerationOutcome {
    /// Whether the run completed without error diagnostics.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_clean()
    }
}

/// Drives matching and synthesis over a whole catalog.
#[derive(Clone, Debug, Default)]
pub struct GenerationPipeline {
    diagnostic_config: DiagnosticConfig,
}

impl GenerationPipeline {
    /// Creates a pipeline with default diagnostics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pipeline with the given diagnostic configuration.
    #[must_use]
    pub fn with_diagnostic_config(diagnostic_config: DiagnosticConfig) -> Self {
        Self { diagnostic_config }
    }

    /// Runs the pipeline over every declaration in the catalog.
    ///
    /// Deterministic: the same catalog always yields the same outcome,
    /// artifact for artifact and diagnostic for diagnostic.
    #[must_use]
    pub fn run(&self, catalog: &DeclarationCatalog) -> GenerationOutcome {
        let mut diagnostics = DiagnosticLog::with_config(self.diagnostic_config.clone());
        let mut artifacts = ArtifactStore::new();
        let mut tally = Tally::default();

        for declaration in catalog.declarations() {
            tally.scanned += 1;
            let produced = synthesize(declaration, catalog, &mut diagnostics, &mut tally);
            for artifact in produced {
                artifacts = artifacts.insert(artifact);
            }
        }

        GenerationOutcome {
            artifacts,
            diagnostics,
            declarations_scanned: tally.scanned,
            requests_matched: tally.matched,
            artifacts_emitted: tally.emitted,
            requests_skipped: tally.skipped,
        }
    }

    /// Runs the same pass against caller-supplied boundaries.
    ///
    /// Diagnostics go to the channel as they arise; artifacts reach the
    /// sink in key order (declaration, then family), independent of catalog
    /// insertion order. Returns the store backing the emission.
    #[must_use]
    pub fn emit_into(
        &self,
        catalog: &DeclarationCatalog,
        sink: &mut dyn ArtifactSink,
        channel: &mut dyn DiagnosticChannel,
    ) -> ArtifactStore {
        let mut artifacts = ArtifactStore::new();
        let mut tally = Tally::default();
        for declaration in catalog.declarations() {
            tally.scanned += 1;
            for artifact in synthesize(declaration, catalog, channel, &mut tally) {
                artifacts = artifacts.insert(artifact);
            }
        }
        for artifact in artifacts.iter() {
            sink.emit(artifact);
        }
        artifacts
    }
}

/// Synthesizes every artifact one declaration's markers call for.
///
/// Shared by [`GenerationPipeline::run`] and incremental callers that
/// re-generate single declarations. Diagnostics go to the channel;
/// failures yield no artifact for that request but never panic.
#[must_use]
pub fn generate_for(
    declaration: &Declaration,
    catalog: &DeclarationCatalog,
    channel: &mut dyn DiagnosticChannel,
) -> Vec<GeneratedArtifact> {
    let mut tally = Tally::default();
    synthesize(declaration, catalog, channel, &mut tally)
}

#[derive(Debug, Default)]
struct Tally {
    scanned: usize,
    matched: usize,
    emitted: usize,
    skipped: usize,
}

fn synthesize(
    declaration: &Declaration,
    catalog: &DeclarationCatalog,
    channel: &mut dyn DiagnosticChannel,
    tally: &mut Tally,
) -> Vec<GeneratedArtifact> {
    let mut produced = Vec::new();

    for matched in RuleMatcher::match_declaration(declaration, catalog) {
        let request = match matched {
            Ok(request) => request,
            Err(error) => {
                channel.report(
                    Diagnostic::error(error.to_string())
                        .for_declaration(declaration.name.as_str()),
                );
                continue;
            }
        };
        tally.matched += 1;

        if redundant_notification_property(&request, catalog) {
            tally.skipped += 1;
            channel.report(
                Diagnostic::info(
                    "field-level notification request covered by class-level marker",
                )
                .for_declaration(declaration.name.as_str()),
            );
            continue;
        }

        let text = match dispatch(&request, catalog) {
            Ok(text) => text,
            Err(error) => {
                channel.report(
                    Diagnostic::error(error.to_string())
                        .for_declaration(declaration.name.as_str()),
                );
                continue;
            }
        };

        let key = ArtifactKey::new(request.declaration().clone(), request.family());
        produced.push(GeneratedArtifact::new(key, text));
        tally.emitted += 1;
    }

    produced
}

/// A field-level request is redundant when its owning class already carries
/// the class-level notifications marker; the class engine covers the field.
fn redundant_notification_property(request: &Request, catalog: &DeclarationCatalog) -> bool {
    let Request::NotificationProperty(request) = request else {
        return false;
    };
    catalog
        .resolve(request.parent.as_str())
        .is_some_and(|parent| parent.requests_family(ArtifactFamily::Notifications))
}

fn dispatch(request: &Request, catalog: &DeclarationCatalog) -> scrivener_foundation::Result<String> {
    match request {
        Request::Abstraction(r) => abstraction::generate(r, catalog),
        Request::EnumExtensions(r) => enum_ext::generate(r, catalog),
        Request::EnumeratorExtensions(r) => enumerator_ext::generate(r, catalog),
        Request::Notifications(r) => notification::generate(r, catalog),
        Request::NotificationProperty(r) => notification::generate_property(r, catalog),
        Request::Wrapper(r) => wrapper::generate(r, catalog),
    }
}
