//! Lexically-scoped, persistent association chain mapping names to values.
use std::fmt;
use std::rc::Rc;

use smol_str::SmolStr;

use crate::handle::Handle;
use crate::value::Value;

struct Node {
    name: SmolStr,
    slot: Handle<Value>,
    parent: Env,
}

/// An immutable, persistent linked environment.
///
/// Extending never mutates an existing frame, so closures that capture an
/// `Env` are unaffected by bindings added on a sibling branch afterward. The
/// one exception is [`Env::modify`], which mutates a cell already in the
/// chain through shared aliasing -- the only way `letrec` can make a
/// binding's final value visible to closures that captured it early.
///
/// The same type backs both the resolver's name set (see `resolver.rs`) and
/// the evaluator's runtime binding store: the resolver only ever queries
/// [`Env::find`] for presence, never inspects the stored value, so reusing
/// one persistent-chain implementation for both roles costs nothing.
#[derive(Clone)]
pub struct Env(Option<Rc<Node>>);

impl Env {
    pub fn empty() -> Self {
        Env(None)
    }

    /// Prepend a new binding, returning a new environment. `self` is left
    /// untouched, so any other `Env` sharing its tail keeps seeing it.
    pub fn extend(&self, name: impl Into<SmolStr>, value: Value) -> Self {
        Env(Some(Rc::new(Node {
            name: name.into(),
            slot: Handle::new(value),
            parent: self.clone(),
        })))
    }

    /// Look up the most recently bound value for `name`, searching
    /// head-to-tail so shadowing is "most recent wins".
    pub fn find(&self, name: &str) -> Option<Value> {
        let mut cur = self;
        while let Some(node) = &cur.0 {
            if node.name.as_str() == name {
                return Some(node.slot.borrow().clone());
            }
            cur = &node.parent;
        }
        None
    }

    /// Mutate the most recently bound cell for `name` in place, visible
    /// through any alias of the chain sharing that cell.
    ///
    /// Returns `false` if no cell bears `name`; used only by `letrec`.
    pub fn modify(&self, name: &str, value: Value) -> bool {
        let mut cur = self;
        while let Some(node) = &cur.0 {
            if node.name.as_str() == name {
                *node.slot.borrow_mut() = value;
                return true;
            }
            cur = &node.parent;
        }
        false
    }
}

impl Default for Env {
    fn default() -> Self {
        Env::empty()
    }
}

impl fmt::Debug for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = Vec::new();
        let mut cur = self;
        while let Some(node) = &cur.0 {
            names.push(node.name.as_str());
            cur = &node.parent;
        }
        f.debug_tuple("Env").field(&names).finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_extend_and_find() {
        let env = Env::empty().extend("x", Value::Integer(1));
        assert!(matches!(env.find("x"), Some(Value::Integer(1))));
        assert!(env.find("y").is_none());
    }

    #[test]
    fn test_shadowing_most_recent_wins() {
        let env = Env::empty()
            .extend("x", Value::Integer(1))
            .extend("x", Value::Integer(2));
        assert!(matches!(env.find("x"), Some(Value::Integer(2))));
    }

    #[test]
    fn test_sibling_branches_are_unaffected() {
        let base = Env::empty().extend("x", Value::Integer(1));
        let _left = base.extend("y", Value::Integer(2));
        let _right = base.extend("y", Value::Integer(3));
        assert!(matches!(base.find("y"), None));
    }

    #[test]
    fn test_modify_visible_through_alias() {
        let base = Env::empty().extend("x", Value::Null);
        let alias = base.clone();
        assert!(base.modify("x", Value::Integer(42)));
        assert!(matches!(alias.find("x"), Some(Value::Integer(42))));
    }

    #[test]
    fn test_modify_missing_name_returns_false() {
        let env = Env::empty().extend("x", Value::Null);
        assert!(!env.modify("y", Value::Integer(1)));
    }
}
