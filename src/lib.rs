#![deny(missing_docs)]
//! A container that abstracts over the presence or absence of a value.
//!
//! [`Maybe`] has two states: it either holds a value or it holds nothing.
//! Null-like inputs (an [`Option::None`]) are treated as no value at
//! construction, so an absent marker can never be stored as a legitimate
//! value. Every operation consumes the container and returns a new one,
//! which keeps chains of transformations free of intermediate null checks.
//!
//! ```
//! use maybe::Maybe;
//!
//! let port: Maybe<u16> = Maybe::of("8080").map(|s| s.parse().ok());
//! assert_eq!(8080, port.unwrap_or(80));
//!
//! let missing: Maybe<u16> = Maybe::of(None);
//! assert_eq!(80, missing.unwrap_or(80));
//! ```

/// A value that is either present or absent.
#[derive(Debug, Default, PartialEq, Clone, Copy)]
pub enum Maybe<T> {
    /// A held value
    Present(T),
    /// No value
    #[default]
    Absent,
}

impl<T> Maybe<T> {
    /// Create an absent instance
    pub const fn empty() -> Self {
        Self::Absent
    }

    /// Wrap a value.
    ///
    /// Anything null-like becomes [`Maybe::Absent`] rather than an error:
    /// passing [`Option::None`] yields the same result as [`Maybe::empty`].
    ///
    /// ```
    /// use maybe::Maybe;
    ///
    /// assert!(Maybe::of(1).has_value());
    /// assert!(!Maybe::<u32>::of(None).has_value());
    /// ```
    pub fn of(value: impl Into<Self>) -> Self {
        value.into()
    }

    /// Returns true if a value is held
    pub fn has_value(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Project the held value into a new container.
    ///
    /// The projection is invoked once with the held value and its result is
    /// returned as is, without further wrapping. On an absent instance the
    /// projection is never invoked.
    pub fn and_then<U, F>(self, project: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Present(value) => project(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Apply `project` to the held value and wrap the result.
    ///
    /// The projection's output passes through the same normalization as
    /// [`Maybe::of`], so a projection returning [`Option::None`] empties the
    /// container even though the input held a value.
    ///
    /// ```
    /// use maybe::Maybe;
    ///
    /// let whole: Maybe<u32> = Maybe::of("42").map(|s| s.parse().ok());
    /// assert!(whole.has_value());
    ///
    /// let broken: Maybe<u32> = Maybe::of("4x").map(|s| s.parse().ok());
    /// assert!(!broken.has_value());
    /// ```
    pub fn map<U, V, F>(self, project: F) -> Maybe<U>
    where
        V: Into<Maybe<U>>,
        F: FnOnce(T) -> V,
    {
        self.and_then(|value| Maybe::of(project(value)))
    }

    /// Take the held value, or `fallback` if absent
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => fallback,
        }
    }

    /// Take the held value, or fail with the caller supplied error.
    ///
    /// The error is returned unchanged. This is the only fallible operation
    /// on the container.
    pub fn ok_or<E>(self, err: E) -> Result<T, E> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(err),
        }
    }

    /// Observe the held value without consuming it.
    ///
    /// The callback is invoked once with a reference to the held value, for
    /// its side effect only, and the container is returned for further
    /// chaining. On an absent instance the callback is never invoked.
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Present(value) = &self {
            f(value);
        }
        self
    }
}

impl<T> From<T> for Maybe<T> {
    fn from(value: T) -> Self {
        Maybe::Present(value)
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(val) => Maybe::Present(val),
            None => Maybe::Absent,
        }
    }
}
