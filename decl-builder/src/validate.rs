//! Opt-in validation helpers.
//!
//! Builders accept any name while being mutated; these checks only run when
//! a caller asks for them through `validate()`.

use std::collections::HashSet;

use crate::{Error, Result};

/// Fail with [`Error::EmptyName`] when `name` is empty or blank.
pub(crate) fn require_name(kind: &'static str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::empty_name(kind));
    }
    Ok(())
}

/// Fail with [`Error::Duplicate`] on the first repeated name.
pub(crate) fn require_unique<'a>(
    kind: &'static str,
    owner: impl FnOnce() -> String,
    names: impl IntoIterator<Item = &'a str>,
) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(Error::duplicate(kind, name, owner()));
        }
    }
    Ok(())
}
