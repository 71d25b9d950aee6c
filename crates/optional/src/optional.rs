use core::fmt;
use core::hint;

use crate::config::Config;

/// An owned value that is either absent (`Empty`) or present (`Holding`).
///
/// Every combinator consumes `self` and hands back a new `Optional`; there is
/// no way to change the variant or payload of an existing value in place.
/// For `T: Copy` the whole type is `Copy`, so chaining on plain values is free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Optional<T> {
    Empty,
    Holding(T),
}

impl<T> Optional<T> {
    /// Constructs an `Optional::Empty` variant.
    pub const fn empty() -> Self {
        Optional::Empty
    }

    /// Constructs an `Optional::Holding(val)` variant. Zero or falsy values are still present.
    pub const fn holding(val: T) -> Self {
        Optional::Holding(val)
    }

    /// Copies the referenced value in, or returns `Empty` when there is none.
    ///
    /// The result owns its own clone, so later changes made through the
    /// original reference are not observed.
    pub fn from_ref(src: Option<&T>) -> Self
    where
        T: Clone,
    {
        match src {
            Some(val) => Optional::Holding(val.clone()),
            None => Optional::Empty,
        }
    }

    /// Builds an `Optional` from a raw pointer. Null maps to `Empty`, anything
    /// else is dereferenced and the pointee cloned.
    ///
    /// # Safety
    /// Caller must ensure `ptr` is either null or points to a valid,
    /// initialized `T` for the duration of the call.
    pub unsafe fn from_ptr(ptr: *const T) -> Self
    where
        T: Clone,
    {
        Self::from_ref(unsafe { ptr.as_ref() })
    }

    /// Returns true if the value is `Empty`.
    pub fn is_empty(&self) -> bool {
        matches!(self, Optional::Empty)
    }

    /// Returns true if the value is `Holding`.
    pub fn is_present(&self) -> bool {
        matches!(self, Optional::Holding(_))
    }

    /// Returns true if a value is held and `f` accepts it. `f` only runs when present.
    pub fn is_present_and<F: FnOnce(&T) -> bool>(&self, f: F) -> bool {
        match self {
            Optional::Holding(val) => f(val),
            Optional::Empty => false,
        }
    }

    /// Returns `Empty` if `self` is empty, otherwise returns `other` untouched.
    /// The held value is dropped, never combined with `other`.
    pub fn and<U>(self, other: Optional<U>) -> Optional<U> {
        match self {
            Optional::Holding(_) => other,
            Optional::Empty => Optional::Empty,
        }
    }

    /// Monadic bind: feeds the held value to `f` and returns its result as is.
    pub fn and_then<U, F: FnOnce(T) -> Optional<U>>(self, f: F) -> Optional<U> {
        match self {
            Optional::Holding(val) => f(val),
            Optional::Empty => Optional::Empty,
        }
    }

    /// Returns `self` if present, otherwise `other`.
    ///
    /// `other` is built by the caller before the call whatever the outcome;
    /// use [`Optional::or_else`] when the fallback is costly to produce.
    pub fn or(self, other: Optional<T>) -> Optional<T> {
        match self {
            Optional::Holding(_) => self,
            Optional::Empty => other,
        }
    }

    /// Returns `self` if present, otherwise calls `f` once and returns its result.
    pub fn or_else<F: FnOnce() -> Optional<T>>(self, f: F) -> Optional<T> {
        match self {
            Optional::Holding(_) => self,
            Optional::Empty => f(),
        }
    }

    /// Present iff exactly one of `self` and `other` is present.
    pub fn xor(self, other: Optional<T>) -> Optional<T> {
        match (self, other) {
            (Optional::Holding(val), Optional::Empty) | (Optional::Empty, Optional::Holding(val)) => {
                Optional::Holding(val)
            }
            _ => Optional::Empty,
        }
    }

    /// Pairs two held values; `Empty` if either side is.
    pub fn zip<U>(self, other: Optional<U>) -> Optional<(T, U)> {
        match (self, other) {
            (Optional::Holding(a), Optional::Holding(b)) => Optional::Holding((a, b)),
            _ => Optional::Empty,
        }
    }

    /// Maps `Optional<T>` to `Optional<U>` by applying `f` to the contained value.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Optional<U> {
        match self {
            Optional::Holding(val) => Optional::Holding(f(val)),
            Optional::Empty => Optional::Empty,
        }
    }

    /// Applies `f` to the held value, or returns `default` when empty.
    ///
    /// `default` is evaluated eagerly by the caller, even when a value is
    /// present and it ends up discarded. Expensive defaults belong in
    /// [`Optional::map_or_else`].
    pub fn map_or<U, F: FnOnce(T) -> U>(self, default: U, f: F) -> U {
        match self {
            Optional::Holding(val) => f(val),
            Optional::Empty => default,
        }
    }

    /// Applies `f` to the held value, or calls `default` when empty.
    /// Exactly one of the two closures runs.
    pub fn map_or_else<U, D: FnOnce() -> U, F: FnOnce(T) -> U>(self, default: D, f: F) -> U {
        match self {
            Optional::Holding(val) => f(val),
            Optional::Empty => default(),
        }
    }

    /// Keeps the held value only if `predicate` accepts it.
    pub fn filter<P: FnOnce(&T) -> bool>(self, predicate: P) -> Optional<T> {
        if let Optional::Holding(val) = &self {
            if predicate(val) {
                return self;
            }
        }
        Optional::Empty
    }

    /// Calls `f` with a reference to the held value, if any.
    pub fn inspect<F: FnOnce(&T)>(&self, f: F) {
        if let Optional::Holding(val) = self {
            f(val);
        }
    }

    /// Returns the held value.
    ///
    /// Panics with [`Config::UNWRAP_EMPTY_MSG`] when `Empty`. Reach for this
    /// only where absence would be a logic error; [`crate::Guard`] turns the
    /// panic back into a value at an outer boundary.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Optional::Holding(val) => val,
            Optional::Empty => fatal(Config::UNWRAP_EMPTY_MSG),
        }
    }

    /// Like [`Optional::unwrap`], but the panic carries `msg` verbatim.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Optional::Holding(val) => val,
            Optional::Empty => fatal(msg),
        }
    }

    /// Returns the held value or `default`. `default` is evaluated eagerly.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Optional::Holding(val) => val,
            Optional::Empty => default,
        }
    }

    pub fn unwrap_or_else<F: FnOnce() -> T>(self, f: F) -> T {
        match self {
            Optional::Holding(val) => val,
            Optional::Empty => f(),
        }
    }

    /// Returns the held value without a presence check in release builds.
    ///
    /// Debug builds still panic on `Empty` (with a generic message), so misuse
    /// shows up in tests.
    ///
    /// # Safety
    /// Caller must ensure the value is `Holding`. Calling this on `Empty` in
    /// a release build is undefined behavior.
    #[track_caller]
    pub unsafe fn unwrap_unsafe(self) -> T {
        match self {
            Optional::Holding(val) => val,
            Optional::Empty if cfg!(debug_assertions) => fatal(Config::UNWRAP_UNSAFE_MSG),
            Optional::Empty => unsafe { hint::unreachable_unchecked() },
        }
    }

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Holding(val) => Optional::Holding(val),
            Optional::Empty => Optional::Empty,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Optional::Holding(val) => Some(val),
            Optional::Empty => None,
        }
    }
}

impl<T: Clone> Optional<&T> {
    /// Clones the borrowed payload into an owned `Optional<T>`.
    pub fn cloned(self) -> Optional<T> {
        self.map(|val| val.clone())
    }
}

impl<T> Optional<Optional<T>> {
    pub fn flatten(self) -> Optional<T> {
        self.and_then(|inner| inner)
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn fatal(msg: &str) -> ! {
    panic!("{}", msg)
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::Empty
    }
}

impl<T> From<T> for Optional<T> {
    fn from(val: T) -> Self {
        Optional::Holding(val)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(val: Option<T>) -> Self {
        match val {
            Some(val) => Optional::Holding(val),
            None => Optional::Empty,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(val: Optional<T>) -> Self {
        val.into_option()
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Optional::Holding(val) => write!(f, "{}", val),
            Optional::Empty => f.write_str(Config::EMPTY_DISPLAY),
        }
    }
}
