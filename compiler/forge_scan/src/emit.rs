//! Writing dispatchers to disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use forge_registry::{DispatchArtifact, SourceEmitter};
use heck::ToSnakeCase;
use rustc_hash::FxHashSet;

/// Writes each artifact to `<out_dir>/<package path>/<snake_case name>.rs`.
///
/// The package directories keep capability types that share a simple name
/// apart: `crate::food::Meal` lands in `crate/food/meal_factory.rs` and
/// `crate::pet::Meal` in `crate/pet/meal_factory.rs`. Two artifacts that
/// still map to the same file within one emitter are an error rather than
/// a silent overwrite.
///
/// Files whose content is already up to date are left untouched so their
/// modification time does not trigger rebuilds.
#[derive(Debug)]
pub struct FileEmitter {
    out_dir: PathBuf,
    claimed: FxHashSet<PathBuf>,
    written: Vec<PathBuf>,
    unchanged: Vec<PathBuf>,
}

impl FileEmitter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        FileEmitter {
            out_dir: out_dir.into(),
            claimed: FxHashSet::default(),
            written: Vec::new(),
            unchanged: Vec::new(),
        }
    }

    /// File name for an artifact, e.g. `meal_factory.rs` for `MealFactory`.
    pub fn file_name(artifact: &DispatchArtifact) -> String {
        format!("{}.rs", artifact.name.to_snake_case())
    }

    /// Path of an artifact relative to the output directory, e.g.
    /// `crate/store/meal_factory.rs` for the dispatcher of `crate::store::Meal`.
    pub fn relative_path(artifact: &DispatchArtifact) -> PathBuf {
        let mut path: PathBuf = artifact
            .package
            .iter()
            .flat_map(|package| package.segments())
            .collect();
        path.push(Self::file_name(artifact));
        path
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Files rewritten by this emitter.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Files that already had the generated content.
    pub fn unchanged(&self) -> &[PathBuf] {
        &self.unchanged
    }
}

impl SourceEmitter for FileEmitter {
    type Error = io::Error;

    fn emit(&mut self, artifact: &DispatchArtifact) -> Result<(), io::Error> {
        let path = self.out_dir.join(Self::relative_path(artifact));
        if !self.claimed.insert(path.clone()) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("`{}` was already written by another dispatcher", path.display()),
            ));
        }
        if fs::read_to_string(&path).is_ok_and(|existing| existing == artifact.source) {
            tracing::trace!(path = %path.display(), "dispatcher unchanged");
            self.unchanged.push(path);
            return Ok(());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &artifact.source)?;
        tracing::debug!(path = %path.display(), "wrote dispatcher");
        self.written.push(path);
        Ok(())
    }
}
