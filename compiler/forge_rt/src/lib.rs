//! Forge Runtime
//!
//! Support code referenced by generated dispatchers. Generated files name
//! this crate by absolute path (`::forge_rt`), so any crate that includes a
//! dispatcher must depend on it.
//!
//! - [`DispatchError`]: why `create` failed
//! - [`Dispatch`]: the interface every generated dispatcher implements

/// Failure of a generated `create` function.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum DispatchError {
    /// `create` was called with `None`. Raised before any id is compared.
    #[error("id is null!")]
    NullArgument,
    /// No type is registered under the id.
    #[error("Unknown id = {0}")]
    UnknownId(String),
}

impl DispatchError {
    #[cold]
    pub fn unknown_id(id: &str) -> Self {
        DispatchError::UnknownId(id.to_string())
    }

    /// The offending id, for `UnknownId`.
    pub fn id(&self) -> Option<&str> {
        match self {
            DispatchError::NullArgument => None,
            DispatchError::UnknownId(id) => Some(id),
        }
    }
}

/// A generated dispatcher: creates capability instances by id.
pub trait Dispatch {
    /// What `create` returns: `Box<dyn Trait>` for trait capabilities, the
    /// capability type itself otherwise.
    type Output;

    /// Registered ids, in the order they are tested.
    fn ids() -> &'static [&'static str];

    /// Create a new instance registered under `id`.
    fn create(id: Option<&str>) -> Result<Self::Output, DispatchError>;

    /// Whether `id` is registered.
    fn contains(id: &str) -> bool {
        Self::ids().contains(&id)
    }

    /// Create one fresh instance per registered id, in registration order.
    fn create_all() -> Result<Vec<Self::Output>, DispatchError> {
        Self::ids().iter().map(|id| Self::create(Some(*id))).collect()
    }
}
