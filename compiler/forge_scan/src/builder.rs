//! Build-script entry point.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use forge_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use forge_diagnostic::{
    Diagnostic, DiagnosticConfig, DiagnosticQueue, ErrorGuaranteed, Severity,
};
use forge_ir::{QualifiedName, TypeKind};
use forge_registry::{run_pass, DispatchArtifact, MemoryEmitter, SourceEmitter};

use crate::collect::collect;
use crate::emit::FileEmitter;
use crate::walk::walk;
use crate::ScanError;

/// Configures and runs one scan of a crate.
///
/// ```text
/// // build.rs
/// fn main() {
///     if let Err(err) = forge_scan::Builder::new().run() {
///         panic!("{err}");
///     }
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Builder {
    root: Option<PathBuf>,
    out_dir: Option<PathBuf>,
    externs: Vec<(String, TypeKind)>,
    rerun_if_changed: bool,
    color: ColorMode,
    error_limit: usize,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

/// What one scan saw and produced.
#[derive(Debug)]
pub struct ScanReport {
    /// Source files read, in walk order.
    pub files: Vec<PathBuf>,
    /// Dispatchers produced, in group discovery order.
    pub artifacts: Vec<DispatchArtifact>,
    /// Files rewritten on disk. Empty for [`Builder::check`].
    pub written: Vec<PathBuf>,
    /// Capability groups whose dispatcher was withheld.
    pub suppressed: Vec<QualifiedName>,
    /// Scan diagnostics first, then registry diagnostics.
    pub diagnostics: Vec<Diagnostic>,
    pub errors: Option<ErrorGuaranteed>,
}

impl ScanReport {
    pub fn has_errors(&self) -> bool {
        self.errors.is_some()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }
}

impl Builder {
    pub fn new() -> Self {
        Builder {
            root: None,
            out_dir: None,
            externs: Vec::new(),
            rerun_if_changed: true,
            color: ColorMode::Auto,
            error_limit: DiagnosticConfig::default().error_limit,
        }
    }

    /// Crate root file. Defaults to `$CARGO_MANIFEST_DIR/src/lib.rs`, or
    /// `src/main.rs` when there is no `lib.rs`.
    #[must_use]
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Directory dispatchers are written to. Defaults to `$OUT_DIR`.
    #[must_use]
    pub fn out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = Some(out_dir.into());
        self
    }

    /// Declare a capability type from another crate, e.g.
    /// `extern_type("menu::Meal", TypeKind::Interface)`.
    #[must_use]
    pub fn extern_type(mut self, path: &str, kind: TypeKind) -> Self {
        self.externs.push((path.to_string(), kind));
        self
    }

    /// Print `cargo:rerun-if-changed` for every scanned file. On by default.
    #[must_use]
    pub fn rerun_if_changed(mut self, enabled: bool) -> Self {
        self.rerun_if_changed = enabled;
        self
    }

    #[must_use]
    pub fn color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    /// Maximum number of errors reported per stage (0 = unlimited).
    #[must_use]
    pub fn error_limit(mut self, limit: usize) -> Self {
        self.error_limit = limit;
        self
    }

    /// Scan and validate without writing anything.
    pub fn check(&self) -> Result<ScanReport, ScanError> {
        let root = self.resolve_root()?;
        let mut emitter = MemoryEmitter::new();
        self.scan(&root, &mut emitter)
    }

    /// Scan, validate, and write dispatchers to the output directory.
    pub fn generate(&self) -> Result<ScanReport, ScanError> {
        let root = self.resolve_root()?;
        let out_dir = self.resolve_out_dir()?;
        fs::create_dir_all(&out_dir).map_err(|source| ScanError::OutDir {
            path: out_dir.clone(),
            source,
        })?;

        let mut emitter = FileEmitter::new(out_dir);
        let mut report = self.scan(&root, &mut emitter)?;
        report.written = emitter.written().to_vec();
        Ok(report)
    }

    /// [`generate`](Self::generate), then report to Cargo: rerun triggers on
    /// stdout, rendered diagnostics on stderr.
    ///
    /// Fails with [`ScanError::Failed`] if any error was reported.
    pub fn run(&self) -> Result<ScanReport, ScanError> {
        let report = self.generate()?;

        if self.rerun_if_changed {
            for file in &report.files {
                println!("cargo:rerun-if-changed={}", file.display());
            }
        }

        if !report.diagnostics.is_empty() {
            let mut emitter = TerminalEmitter::stderr(self.color);
            emitter.emit_all(&report.diagnostics);
            emitter.emit_summary(report.error_count(), report.warning_count());
            emitter.flush();
        }

        if report.has_errors() {
            return Err(ScanError::Failed {
                errors: report.error_count(),
            });
        }
        Ok(report)
    }

    #[tracing::instrument(level = "debug", skip_all, fields(root = %root.display()))]
    fn scan<E>(&self, root: &Path, emitter: &mut E) -> Result<ScanReport, ScanError>
    where
        E: SourceEmitter + ?Sized,
    {
        let externs = self.parse_externs()?;
        let config = DiagnosticConfig {
            error_limit: self.error_limit,
            ..DiagnosticConfig::default()
        };

        let tree = walk(root);
        let collected = collect(&tree.modules, &externs);

        let mut host = DiagnosticQueue::with_config(config.clone());
        for diag in tree.diagnostics.into_iter().chain(collected.diagnostics) {
            host.add(diag);
        }
        let host_errors = host.has_errors();

        // A crate that did not scan cleanly still gets its tags checked, but
        // nothing is written from a partial view of it.
        let outcome = if host_errors.is_some() {
            tracing::debug!("scan failed, dispatchers will not be written");
            let mut outcome = run_pass(
                &collected.model,
                &collected.candidates,
                config,
                &mut MemoryEmitter::new(),
            );
            let withheld = outcome.emitted.drain(..).map(|a| a.capability);
            outcome.suppressed.extend(withheld);
            outcome
        } else {
            run_pass(&collected.model, &collected.candidates, config, emitter)
        };

        let mut diagnostics = host.flush();
        diagnostics.extend(outcome.diagnostics);
        Ok(ScanReport {
            files: tree.files,
            artifacts: outcome.emitted,
            written: Vec::new(),
            suppressed: outcome.suppressed,
            diagnostics,
            errors: host_errors.or(outcome.errors),
        })
    }

    fn parse_externs(&self) -> Result<Vec<(QualifiedName, TypeKind)>, ScanError> {
        self.externs
            .iter()
            .map(|(path, kind)| {
                QualifiedName::parse(path)
                    .map(|name| (name, *kind))
                    .map_err(|source| ScanError::InvalidExtern {
                        path: path.clone(),
                        source,
                    })
            })
            .collect()
    }

    fn resolve_root(&self) -> Result<PathBuf, ScanError> {
        if let Some(root) = &self.root {
            return Ok(root.clone());
        }
        let manifest_dir = env::var_os("CARGO_MANIFEST_DIR")
            .map(PathBuf::from)
            .ok_or(ScanError::MissingEnv("CARGO_MANIFEST_DIR"))?;
        let lib = manifest_dir.join("src").join("lib.rs");
        let main = manifest_dir.join("src").join("main.rs");
        if !lib.exists() && main.exists() {
            return Ok(main);
        }
        Ok(lib)
    }

    fn resolve_out_dir(&self) -> Result<PathBuf, ScanError> {
        match &self.out_dir {
            Some(out_dir) => Ok(out_dir.clone()),
            None => env::var_os("OUT_DIR")
                .map(PathBuf::from)
                .ok_or(ScanError::MissingEnv("OUT_DIR")),
        }
    }
}
