use std::{fmt, hash, rc::Rc};

/// The kind of code a [`Handler`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A free function or a method that takes no receiver.
    Function,

    /// A method bound to a specific receiver instance.
    Method,

    /// A closure capturing its environment.
    Closure,
}

/// Identity of the code (and receiver) behind a handler.
///
/// Addresses are only compared, never dereferenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Target {
    Function(usize),
    Method { method: usize, receiver: usize },
    Closure(usize),
}

/// A typed, invokable reference to a piece of executable code.
///
/// A `Handler<A, R>` can be called with `&A` and produces an `R`. Handlers
/// taking several arguments use a tuple for `A`, and handlers with nothing to
/// return use the default `R = ()`.
///
/// Handlers are cheap to clone, and clones compare equal to the original.
/// Equality follows the code a handler refers to:
///
/// - [`Handler::function`] handlers are equal when they wrap the same function.
/// - [`Handler::method`] handlers are equal when they wrap the same method
///   *and* are bound to the same receiver.
/// - [`Handler::new`] handlers are equal only to their own clones.
///
/// Handlers of different kinds are never equal.
///
/// # Example
///
/// ```
/// use strand_core::Handler;
///
/// fn square(x: &i32) -> i32 {
///     x * x
/// }
///
/// // A handler type plays the role of a named delegate type.
/// type Transform = Handler<i32, i32>;
///
/// let handler: Transform = Handler::function(square);
///
/// assert_eq!(handler.call(&4), 16);
/// assert_eq!(handler, Handler::function(square));
/// ```
pub struct Handler<A, R = ()> {
    target: Target,
    function: Rc<dyn Fn(&A) -> R>,
}

impl<A: 'static, R: 'static> Handler<A, R> {
    /// Creates a handler from a closure.
    ///
    /// Every call to `new` produces a distinct identity, even for identical
    /// closures. Keep a clone of the handler to remove it from a chain later.
    pub fn new<F>(closure: F) -> Self
    where
        F: Fn(&A) -> R + 'static,
    {
        let function: Rc<dyn Fn(&A) -> R> = Rc::new(closure);
        let target = Target::Closure(address_of(&function));
        Self { target, function }
    }

    /// Creates a handler from a free function.
    ///
    /// Identity is the function's address. The compiler may merge identical
    /// functions or duplicate one across codegen units, so distinct functions
    /// with identical bodies are not guaranteed to compare unequal.
    pub fn function(function: fn(&A) -> R) -> Self {
        Self {
            target: Target::Function(function as usize),
            function: Rc::new(function),
        }
    }

    /// Creates a handler that calls `method` on `receiver`.
    ///
    /// The handler keeps `receiver` alive until every clone of it is dropped,
    /// so bound handlers must be removed from long-lived chains once the
    /// receiver is no longer needed.
    pub fn method<T: 'static>(receiver: &Rc<T>, method: fn(&T, &A) -> R) -> Self {
        let target = Target::Method {
            method: method as usize,
            receiver: address_of(receiver),
        };

        let receiver = Rc::clone(receiver);
        Self {
            target,
            function: Rc::new(move |args: &A| method(&receiver, args)),
        }
    }
}

impl<A, R> Handler<A, R> {
    /// Calls the referenced code with `args`.
    pub fn call(&self, args: &A) -> R {
        (self.function)(args)
    }

    /// Returns the kind of code this handler refers to.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self.target {
            Target::Function(_) => Kind::Function,
            Target::Method { .. } => Kind::Method,
            Target::Closure(_) => Kind::Closure,
        }
    }
}

impl<A: 'static, R: 'static> From<fn(&A) -> R> for Handler<A, R> {
    fn from(function: fn(&A) -> R) -> Self {
        Self::function(function)
    }
}

impl<A, R> Clone for Handler<A, R> {
    fn clone(&self) -> Self {
        Self {
            target: self.target,
            function: Rc::clone(&self.function),
        }
    }
}

impl<A, R> PartialEq for Handler<A, R> {
    fn eq(&self, other: &Self) -> bool {
        self.target == other.target
    }
}

impl<A, R> Eq for Handler<A, R> {}

impl<A, R> hash::Hash for Handler<A, R> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.target.hash(state);
    }
}

impl<A, R> fmt::Debug for Handler<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target {
            Target::Function(function) => f
                .debug_struct("Handler")
                .field("function", &format_args!("{function:#x}"))
                .finish(),
            Target::Method { method, receiver } => f
                .debug_struct("Handler")
                .field("method", &format_args!("{method:#x}"))
                .field("receiver", &format_args!("{receiver:#x}"))
                .finish(),
            Target::Closure(closure) => f
                .debug_struct("Handler")
                .field("closure", &format_args!("{closure:#x}"))
                .finish(),
        }
    }
}

/// Returns the address of the value shared by `rc`.
fn address_of<T: ?Sized>(rc: &Rc<T>) -> usize {
    Rc::as_ptr(rc).cast::<()>() as usize
}
