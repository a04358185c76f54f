//! Lexical environments.
//!
//! A frame maps names to entities and optionally points at its parent.
//! Frames are shared: a closure keeps its defining frame alive, and every
//! call of that closure creates a child of it.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use quill_ir::Name;

use crate::Entity;

/// A single-threaded scope wrapper for reference-counted interior mutability.
///
/// Wraps `Rc<RefCell<T>>` so scope allocation goes through one factory
/// method. Not thread-safe; each interpreter owns its own frame graph.
///
/// `#[repr(transparent)]` keeps the layout identical to `Rc<RefCell<T>>`.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    #[inline]
    pub fn ptr_eq(&self, other: &LocalScope<T>) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A single frame of bindings.
#[derive(Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<Name, Entity>,
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Bind `name` in this frame, replacing any existing local binding.
    #[inline]
    pub fn define(&mut self, name: Name, value: Entity) {
        self.bindings.insert(name, value);
    }

    /// Look `name` up here, then along the parent chain.
    pub fn lookup(&self, name: &str) -> Option<Entity> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        if let Some(parent) = &self.parent {
            return parent.borrow().lookup(name);
        }
        None
    }

    /// Whether `name` is bound in this frame itself.
    pub fn contains_local(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }
}

/// Handle to a frame. Cloning shares the frame.
#[derive(Clone, Debug, Default)]
pub struct Environment(LocalScope<Scope>);

impl Environment {
    /// A root frame with no parent.
    pub fn new() -> Self {
        Environment::default()
    }

    /// A child frame whose lookups fall back to `parent`.
    pub fn new_enclosed(parent: &Environment) -> Self {
        Environment(LocalScope::new(Scope::with_parent(parent.0.clone())))
    }

    /// Bind in this frame only. Outer bindings of the same name are shadowed,
    /// never modified.
    pub fn set(&self, name: impl Into<Name>, value: Entity) {
        self.0.borrow_mut().define(name.into(), value);
    }

    /// `None` means unbound, which is distinct from being bound to `null`.
    pub fn get(&self, name: &str) -> Option<Entity> {
        self.0.borrow().lookup(name)
    }

    /// Whether both handles refer to the same frame.
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        self.0.ptr_eq(&other.0)
    }
}
