//! Pass driver.
//!
//! One [`PassContext`] per invocation. Candidates are fed in one at a time;
//! each is resolved, validated, and grouped, or rejected with a diagnostic.
//! [`PassContext::finish`] consumes the context: it generates a dispatcher
//! for every group first, hands them to the emitter, and only then drops
//! the group table.
//!
//! A rejected candidate suppresses the dispatcher of the group it was
//! headed for. If its group cannot be determined, no dispatcher is emitted
//! at all.

use forge_diagnostic::{Diagnostic, DiagnosticConfig, DiagnosticQueue, ErrorCode, ErrorGuaranteed};
use forge_ir::{Declaration, QualifiedName, Tag};
use rustc_hash::FxHashSet;

use crate::resolve::resolve_type;
use crate::{
    build_descriptor, generate, validate, CapabilityGroups, DeclarationModel, DispatchArtifact,
    RegistryError, SourceEmitter, TaggedDecl,
};

/// State of one pass.
pub struct PassContext<M> {
    model: M,
    groups: CapabilityGroups,
    /// Groups that lost a candidate to an error.
    poisoned: FxHashSet<QualifiedName>,
    /// Set when a rejected candidate's group is unknown.
    poison_all: bool,
    queue: DiagnosticQueue,
}

/// Result of a finished pass.
#[derive(Debug)]
pub struct PassOutcome {
    /// Artifacts the emitter accepted, in group discovery order.
    pub emitted: Vec<DispatchArtifact>,
    /// Groups whose dispatcher was withheld because of errors.
    pub suppressed: Vec<QualifiedName>,
    /// All diagnostics, sorted by location.
    pub diagnostics: Vec<Diagnostic>,
    /// Present when at least one error was reported.
    pub errors: Option<ErrorGuaranteed>,
}

impl PassOutcome {
    pub fn has_errors(&self) -> bool {
        self.errors.is_some()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }
}

impl<M: DeclarationModel> PassContext<M> {
    pub fn new(model: M, config: DiagnosticConfig) -> Self {
        PassContext {
            model,
            groups: CapabilityGroups::new(),
            poisoned: FxHashSet::default(),
            poison_all: false,
            queue: DiagnosticQueue::with_config(config),
        }
    }

    /// Process one tagged declaration.
    ///
    /// On failure the diagnostic is already queued; the error is only a
    /// proof of that. Later candidates are still processed normally.
    pub fn process(&mut self, decl: &Declaration, tag: &Tag) -> Result<(), ErrorGuaranteed> {
        match self.admit(decl, tag) {
            Ok(()) => {
                tracing::debug!(decl = %decl.name, "accepted candidate");
                Ok(())
            }
            Err(err) => {
                tracing::debug!(decl = %decl.name, code = %err.code(), "rejected candidate");
                Err(self.reject(&err, tag))
            }
        }
    }

    fn admit(&mut self, decl: &Declaration, tag: &Tag) -> Result<(), RegistryError> {
        let descriptor = build_descriptor(&self.model, decl, tag)?;
        let kind = validate(&self.model, decl, &descriptor)?;
        self.groups.add(descriptor, kind)
    }

    fn reject(&mut self, err: &RegistryError, tag: &Tag) -> ErrorGuaranteed {
        let target = err
            .target()
            .cloned()
            .or_else(|| resolve_type(&self.model, &tag.target));
        match target {
            Some(target) => {
                self.poisoned.insert(target);
            }
            None => self.poison_all = true,
        }
        self.queue.emit_error(err.to_diagnostic())
    }

    /// Groups built so far.
    pub fn groups(&self) -> &CapabilityGroups {
        &self.groups
    }

    /// Diagnostics queued so far, in report order.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.queue.peek()
    }

    /// Generate and emit dispatchers, then discard the pass state.
    pub fn finish<E: SourceEmitter + ?Sized>(mut self, emitter: &mut E) -> PassOutcome {
        let mut artifacts = Vec::with_capacity(self.groups.len());
        let mut suppressed = Vec::new();
        for group in self.groups.iter() {
            if self.poison_all || self.poisoned.contains(group.name()) {
                tracing::debug!(group = %group.name(), "dispatcher suppressed");
                suppressed.push(group.name().clone());
            } else {
                artifacts.push(generate(group));
            }
        }

        let mut emitted = Vec::with_capacity(artifacts.len());
        for artifact in artifacts {
            match emitter.emit(&artifact) {
                Ok(()) => emitted.push(artifact),
                Err(err) => {
                    self.queue.add(emit_failed(&artifact, &err));
                }
            }
        }

        tracing::info!(
            emitted = emitted.len(),
            suppressed = suppressed.len(),
            "dispatchers: {}",
            emitted
                .iter()
                .map(|a| a.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        let errors = self.queue.has_errors();
        PassOutcome {
            emitted,
            suppressed,
            diagnostics: self.queue.flush(),
            errors,
        }
    }
}

#[cold]
fn emit_failed(artifact: &DispatchArtifact, err: &dyn std::fmt::Display) -> Diagnostic {
    Diagnostic::error(ErrorCode::F9001)
        .with_message(format!("failed to emit `{}`: {err}", artifact.name))
        .with_note(format!("generated for `{}`", artifact.capability))
}

/// Run a complete pass over `candidates`.
#[tracing::instrument(level = "debug", skip_all, fields(candidates = candidates.len()))]
pub fn run_pass<M, E>(
    model: M,
    candidates: &[TaggedDecl],
    config: DiagnosticConfig,
    emitter: &mut E,
) -> PassOutcome
where
    M: DeclarationModel,
    E: SourceEmitter + ?Sized,
{
    let mut ctx = PassContext::new(model, config);
    for candidate in candidates {
        // Failures are queued; keep going with the siblings.
        let _ = ctx.process(&candidate.decl, &candidate.tag);
    }
    ctx.finish(emitter)
}
