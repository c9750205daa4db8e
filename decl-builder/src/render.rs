//! The rendering contract shared by every declaration builder.

use std::{cell::RefCell, rc::Rc};

use declgen_core::Dialect;

use crate::Result;

/// A builder that is aliased between its creator and the namespaces
/// aggregating it.
///
/// Mutations made through any alias are visible to every holder. `Rc` keeps
/// this single-threaded: aggregated builders cannot be sent to another thread.
pub type Shared<T> = Rc<RefCell<T>>;

/// Wrap a builder for shared aggregation.
pub fn shared<T>(builder: T) -> Shared<T> {
    Rc::new(RefCell::new(builder))
}

/// Where a declaration is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    /// At the top of a declaration file.
    #[default]
    TopLevel,
    /// Inside a namespace body.
    Namespace,
}

impl Scope {
    /// Prefix for a TypeScript ambient declaration in this scope.
    ///
    /// Namespace bodies are already ambient, so members drop `declare`.
    pub fn declare_prefix(&self) -> &'static str {
        match self {
            Scope::TopLevel => "declare ",
            Scope::Namespace => "",
        }
    }
}

/// Trait for declaration builders that can be rendered to a dialect.
///
/// Rendering is a pure function of the builder's current state: calling it
/// twice without an intervening mutation yields identical text.
pub trait Render {
    /// Render this declaration as it appears in the given scope.
    fn render_in(&self, dialect: Dialect, scope: Scope) -> Result<String>;

    /// Render this declaration at the top level of a file.
    fn render(&self, dialect: Dialect) -> Result<String> {
        self.render_in(dialect, Scope::TopLevel)
    }
}

/// Blanket implementation for references.
impl<T: Render + ?Sized> Render for &T {
    fn render_in(&self, dialect: Dialect, scope: Scope) -> Result<String> {
        (*self).render_in(dialect, scope)
    }
}

/// Blanket implementation for Box.
impl<T: Render + ?Sized> Render for Box<T> {
    fn render_in(&self, dialect: Dialect, scope: Scope) -> Result<String> {
        self.as_ref().render_in(dialect, scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl Render for Fixed {
        fn render_in(&self, dialect: Dialect, scope: Scope) -> Result<String> {
            Ok(format!("{}{}", scope.declare_prefix(), dialect))
        }
    }

    #[test]
    fn test_render_defaults_to_top_level() {
        assert_eq!(Fixed.render(Dialect::Lua).unwrap(), "declare lua");
        assert_eq!(
            Fixed.render_in(Dialect::Lua, Scope::Namespace).unwrap(),
            "lua"
        );
    }

    #[test]
    fn test_boxed_and_borrowed() {
        let boxed: Box<dyn Render> = Box::new(Fixed);
        assert_eq!(boxed.render(Dialect::TypeScript).unwrap(), "declare typescript");
        assert_eq!((&Fixed).render(Dialect::Lua).unwrap(), "declare lua");
    }

    #[test]
    fn test_shared_aliasing() {
        let a = shared(1);
        let b = Rc::clone(&a);
        *b.borrow_mut() = 2;
        assert_eq!(*a.borrow(), 2);
    }
}
