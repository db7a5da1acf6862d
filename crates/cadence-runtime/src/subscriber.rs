//! Subscriber callbacks and capability traits

use std::fmt;
use std::rc::Rc;

use cadence_core::TickPhase;

/// What makes two callbacks the same subscriber
#[derive(Clone, Copy, PartialEq, Eq)]
enum Identity {
    /// A closure, identified by its own allocation
    Closure(*const ()),
    /// A capability method bound to a shared object, identified by the object
    /// and the phase the method serves
    Target(*const (), TickPhase),
}

/// A shared reference to a zero-argument tick callback.
///
/// Clones of the same `Callback` compare equal, while two closures wrapped
/// separately are distinct subscribers even if their bodies are identical.
/// Callbacks built from a capability trait compare equal when they forward to
/// the same `Rc` target for the same phase, so subscribing an object twice
/// keeps a single entry.
#[derive(Clone)]
pub struct Callback {
    func: Rc<dyn Fn()>,
    identity: Identity,
}

impl Callback {
    /// Wrap a closure as a new, distinct subscriber
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self::from(Rc::new(f) as Rc<dyn Fn()>)
    }

    /// Invoke the callback
    pub fn invoke(&self) {
        (self.func)()
    }

    /// Returns true if both handles refer to the same subscriber
    pub fn same_as(&self, other: &Callback) -> bool {
        self.identity == other.identity
    }

    fn bound<T: 'static>(target: &Rc<T>, phase: TickPhase, func: Rc<dyn Fn()>) -> Self {
        Self {
            func,
            identity: Identity::Target(Rc::as_ptr(target) as *const (), phase),
        }
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for Callback {}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.identity {
            Identity::Closure(ptr) => write!(f, "Callback({:p})", ptr),
            Identity::Target(ptr, phase) => write!(f, "Callback({:p}, {})", ptr, phase),
        }
    }
}

impl From<Rc<dyn Fn()>> for Callback {
    fn from(func: Rc<dyn Fn()>) -> Self {
        // Data address only; vtable pointers for one type may differ across
        // codegen units.
        let identity = Identity::Closure(Rc::as_ptr(&func) as *const ());
        Self { func, identity }
    }
}

/// An object that wants a call once per frame
pub trait Updateable {
    fn on_update(&self);
}

/// An object that wants a call once per frame, after all regular updates
pub trait LateUpdateable {
    fn on_late_update(&self);
}

/// An object that wants a call on every fixed (physics) step
pub trait FixedUpdateable {
    fn on_fixed_update(&self);
}

impl Callback {
    /// Build a callback that forwards to `target.on_update()`
    pub fn from_updateable<T: Updateable + 'static>(target: &Rc<T>) -> Self {
        let t = Rc::clone(target);
        Self::bound(target, TickPhase::Update, Rc::new(move || t.on_update()))
    }

    /// Build a callback that forwards to `target.on_late_update()`
    pub fn from_late_updateable<T: LateUpdateable + 'static>(target: &Rc<T>) -> Self {
        let t = Rc::clone(target);
        Self::bound(target, TickPhase::LateUpdate, Rc::new(move || t.on_late_update()))
    }

    /// Build a callback that forwards to `target.on_fixed_update()`
    pub fn from_fixed_updateable<T: FixedUpdateable + 'static>(target: &Rc<T>) -> Self {
        let t = Rc::clone(target);
        Self::bound(target, TickPhase::FixedUpdate, Rc::new(move || t.on_fixed_update()))
    }
}
