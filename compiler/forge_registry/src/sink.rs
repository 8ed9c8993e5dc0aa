//! The source emitter seam.

use std::convert::Infallible;
use std::fmt;

use crate::DispatchArtifact;

/// Persists generated dispatchers.
///
/// The registry core never touches storage itself; hosts decide where and
/// how an artifact ends up as compilable source.
pub trait SourceEmitter {
    type Error: fmt::Display;

    fn emit(&mut self, artifact: &DispatchArtifact) -> Result<(), Self::Error>;
}

impl<E: SourceEmitter + ?Sized> SourceEmitter for &mut E {
    type Error = E::Error;

    fn emit(&mut self, artifact: &DispatchArtifact) -> Result<(), Self::Error> {
        (**self).emit(artifact)
    }
}

/// Keeps emitted artifacts in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryEmitter {
    pub artifacts: Vec<DispatchArtifact>,
}

impl MemoryEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find an emitted artifact by dispatcher name.
    pub fn get(&self, name: &str) -> Option<&DispatchArtifact> {
        self.artifacts.iter().find(|a| a.name == name)
    }
}

impl SourceEmitter for MemoryEmitter {
    type Error = Infallible;

    fn emit(&mut self, artifact: &DispatchArtifact) -> Result<(), Infallible> {
        self.artifacts.push(artifact.clone());
        Ok(())
    }
}
