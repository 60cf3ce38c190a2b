use std::any::{type_name, TypeId};
use std::fmt;

/// Describes the type a request body should be read into.
///
/// Readers are asked about a [`TargetType`] before the framework commits to a concrete
/// `T`, so the descriptor only carries identity and a readable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetType {
    id: TypeId,
    name: &'static str,
}

impl TargetType {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self { id: TypeId::of::<T>(), name: type_name::<T>() }
    }

    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    /// Exactly [`String`], nothing that merely derefs to `str`.
    #[inline]
    pub fn is_string(&self) -> bool {
        self.is::<String>()
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
