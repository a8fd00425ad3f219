//! Getter/setter wrappers for a single attribute of some container type.
//!
//! An [`Attr`] is a reusable pair of accessors for one field of a container
//! type `C`. Binding it to a concrete container yields a [`ConcreteAttr`],
//! which implements [`CAttr`] and can be handed to the get-or-make helpers in
//! [`collections`](crate::collections).
//!
//! ```
//! use wapitia_common::{Attr, CAttr};
//!
//! #[derive(Default)]
//! struct Order {
//!     tags: Option<Vec<String>>,
//! }
//!
//! let tags = Attr::of(|o: &Order| o.tags.clone(), |o: &mut Order, v| o.tags = Some(v));
//! let mut order = Order::default();
//! tags.bind(&mut order).set(vec!["rush".to_owned()]);
//! assert_eq!(order.tags.as_deref(), Some(&["rush".to_owned()][..]));
//! ```

use std::fmt;
use std::sync::Arc;

/// Reads the attribute value out of its container.
pub type Getter<C, A> = Arc<dyn Fn(&C) -> Option<A> + Send + Sync>;

/// Writes the attribute value into its container.
pub type Setter<C, A> = Arc<dyn Fn(&mut C, A) + Send + Sync>;

/// Get/set access to a value of type `A` whose container is already known.
pub trait CAttr<A> {
    /// Current value, or `None` when unset or when there is no getter.
    fn get(&self) -> Option<A>;

    /// Store `value`. Does nothing when there is no setter.
    fn set(&mut self, value: A);
}

/// A bare `Option` slot is the simplest attribute: it owns its value.
impl<A: Clone> CAttr<A> for Option<A> {
    fn get(&self) -> Option<A> {
        self.clone()
    }

    fn set(&mut self, value: A) {
        *self = Some(value);
    }
}

/// Getter and setter functions for an attribute `A` of container `C`.
///
/// Either function may be absent: a missing getter reads as `None`, a missing
/// setter ignores writes.
pub struct Attr<C, A> {
    getter: Option<Getter<C, A>>,
    setter: Option<Setter<C, A>>,
}

impl<C, A> Attr<C, A> {
    #[must_use]
    pub fn of<G, S>(getter: G, setter: S) -> Self
    where
        G: Fn(&C) -> Option<A> + Send + Sync + 'static,
        S: Fn(&mut C, A) + Send + Sync + 'static,
    {
        Self {
            getter: Some(Arc::new(getter)),
            setter: Some(Arc::new(setter)),
        }
    }

    #[must_use]
    pub fn read_only<G>(getter: G) -> Self
    where
        G: Fn(&C) -> Option<A> + Send + Sync + 'static,
    {
        Self {
            getter: Some(Arc::new(getter)),
            setter: None,
        }
    }

    #[must_use]
    pub fn from_parts(getter: Option<Getter<C, A>>, setter: Option<Setter<C, A>>) -> Self {
        Self { getter, setter }
    }

    /// Gets the value from `container` through the getter.
    #[must_use]
    pub fn get(&self, container: &C) -> Option<A> {
        self.getter.as_ref().and_then(|g| g(container))
    }

    /// Sets the value in `container` through the setter, if there is one.
    pub fn set(&self, container: &mut C, value: A) {
        if let Some(s) = &self.setter {
            s(container, value);
        }
    }

    #[must_use]
    pub fn has_getter(&self) -> bool {
        self.getter.is_some()
    }

    #[must_use]
    pub fn has_setter(&self) -> bool {
        self.setter.is_some()
    }

    /// Bind this attribute to a concrete container.
    pub fn bind(self, container: &mut C) -> ConcreteAttr<'_, C, A> {
        ConcreteAttr::new(container, self)
    }
}

impl<C, A> Clone for Attr<C, A> {
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
        }
    }
}

impl<C, A> fmt::Debug for Attr<C, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attr")
            .field("getter", &self.has_getter())
            .field("setter", &self.has_setter())
            .finish()
    }
}

/// An [`Attr`] bound to the container that holds the attribute.
pub struct ConcreteAttr<'c, C, A> {
    container: &'c mut C,
    attr: Attr<C, A>,
}

impl<'c, C, A> ConcreteAttr<'c, C, A> {
    #[must_use]
    pub fn new(container: &'c mut C, attr: Attr<C, A>) -> Self {
        Self { container, attr }
    }

    pub fn of<G, S>(container: &'c mut C, getter: G, setter: S) -> Self
    where
        G: Fn(&C) -> Option<A> + Send + Sync + 'static,
        S: Fn(&mut C, A) + Send + Sync + 'static,
    {
        Self::new(container, Attr::of(getter, setter))
    }

    #[must_use]
    pub fn container(&self) -> &C {
        &*self.container
    }

    #[must_use]
    pub fn attr(&self) -> &Attr<C, A> {
        &self.attr
    }
}

impl<C, A> CAttr<A> for ConcreteAttr<'_, C, A> {
    fn get(&self) -> Option<A> {
        self.attr.get(&*self.container)
    }

    fn set(&mut self, value: A) {
        self.attr.set(&mut *self.container, value);
    }
}

impl<C, A> fmt::Debug for ConcreteAttr<'_, C, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConcreteAttr")
            .field("attr", &self.attr)
            .finish_non_exhaustive()
    }
}
