//! Side-table keys: which type, and which part of it.

use std::borrow::Cow;
use std::fmt;

/// Identity of an annotated type (a controller).
///
/// `Target::of::<T>()` keys by the Rust type name; `Target::named` is used for
/// controllers declared in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Target(Cow<'static, str>);

impl Target {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self(Cow::Borrowed(std::any::type_name::<T>()))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where on a target a record applies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scope {
    /// Default for every method of the target.
    Class,
    /// One method; overrides `Class` entirely.
    Method(String),
}

impl Scope {
    pub fn method(name: impl Into<String>) -> Self {
        Scope::Method(name.into())
    }

    pub fn method_name(&self) -> Option<&str> {
        match self {
            Scope::Class => None,
            Scope::Method(name) => Some(name),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Class => f.write_str("class"),
            Scope::Method(name) => write!(f, "method `{name}`"),
        }
    }
}
