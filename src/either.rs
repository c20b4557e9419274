// src/either.rs

//! Success/failure wrapper with short-circuiting composition.
//!
//! Every fallible step of the scraping pipelines returns an [`Either`]. Steps
//! are composed with [`Either::chain`] (or the `>>` and `|` operators): a `Success`
//! feeds its value into the next step, a `Failure` is passed through without
//! calling it. The first failure in a sequence is the one that surfaces.
//!
//! ```
//! use pantip_scraper::either::{Either, Success};
//!
//! let halve = |n: u32| {
//!     if n % 2 == 0 {
//!         Either::Success(n / 2)
//!     } else {
//!         Either::Failure(format!("{n} is odd"))
//!     }
//! };
//!
//! assert_eq!(Success(12).chain(halve).chain(halve), Success(3));
//! assert_eq!((Success(12) >> halve >> halve >> halve).error(), Some(&"3 is odd".to_string()));
//! ```

use std::ops::{BitOr, Shr};

/// Outcome of a fallible pipeline step.
///
/// Exactly one side is present and the tag never changes once built.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Either<E, T> {
    Failure(E),
    Success(T),
}

/// Pipeline outcome with a descriptive error message.
pub type Maybe<T> = Either<String, T>;

pub use Either::{Failure, Success};

impl<E, T> Either<E, T> {
    /// Apply `f` to the success value. A failure is returned unchanged and
    /// `f` is never called.
    pub fn chain<U, F>(self, f: F) -> Either<E, U>
    where
        F: FnOnce(T) -> Either<E, U>,
    {
        match self {
            Success(value) => f(value),
            Failure(error) => Failure(error),
        }
    }

    /// Alias of [`Either::chain`].
    pub fn then<U, F>(self, f: F) -> Either<E, U>
    where
        F: FnOnce(T) -> Either<E, U>,
    {
        self.chain(f)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Failure(_))
    }

    /// The success value, or `None` on a failure.
    pub fn value(&self) -> Option<&T> {
        match self {
            Success(value) => Some(value),
            Failure(_) => None,
        }
    }

    /// The failure error, or `None` on a success.
    pub fn error(&self) -> Option<&E> {
        match self {
            Failure(error) => Some(error),
            Success(_) => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Success(value) => Some(value),
            Failure(_) => None,
        }
    }

    pub fn into_error(self) -> Option<E> {
        match self {
            Failure(error) => Some(error),
            Success(_) => None,
        }
    }

    /// Transform the success value with an infallible function.
    pub fn map<U, F>(self, f: F) -> Either<E, U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Success(value) => Success(f(value)),
            Failure(error) => Failure(error),
        }
    }

    /// Transform the failure error.
    pub fn map_err<G, F>(self, f: F) -> Either<G, T>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(f(error)),
        }
    }

    pub fn as_ref(&self) -> Either<&E, &T> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(error),
        }
    }

    /// Unwrap the success value or fall back to `default`.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Success(value) => value,
            Failure(_) => default,
        }
    }

    /// Unwrap the success value or compute a fallback from the error.
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Success(value) => value,
            Failure(error) => f(error),
        }
    }
}

impl<E, T> From<Result<T, E>> for Either<E, T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Success(value),
            Err(error) => Failure(error),
        }
    }
}

impl<E, T> From<Either<E, T>> for Result<T, E> {
    fn from(either: Either<E, T>) -> Self {
        match either {
            Success(value) => Ok(value),
            Failure(error) => Err(error),
        }
    }
}

/// `either >> f` is shorthand for `either.chain(f)`.
impl<E, T, U, F> Shr<F> for Either<E, T>
where
    F: FnOnce(T) -> Either<E, U>,
{
    type Output = Either<E, U>;

    fn shr(self, f: F) -> Self::Output {
        self.chain(f)
    }
}

/// `either | f` binds the same way as `>>`.
impl<E, T, U, F> BitOr<F> for Either<E, T>
where
    F: FnOnce(T) -> Either<E, U>,
{
    type Output = Either<E, U>;

    fn bitor(self, f: F) -> Self::Output {
        self.chain(f)
    }
}

/// A pipeline step taking a raw value and producing a wrapped one.
pub type Step<'a, E, T> = Box<dyn Fn(T) -> Either<E, T> + 'a>;

/// Build a function that folds a wrapped value through `steps` with
/// [`Either::chain`], in order.
///
/// With no steps the returned function is the identity. For steps whose
/// value types differ use the [`pipe!`](crate::pipe) macro.
pub fn pipe<'a, E, T>(steps: Vec<Step<'a, E, T>>) -> impl Fn(Either<E, T>) -> Either<E, T> + 'a
where
    E: 'a,
    T: 'a,
{
    move |initial| {
        steps
            .iter()
            .fold(initial, |acc, step| acc.chain(|value| step(value)))
    }
}

/// Build a closure chaining a wrapped value through each step in order.
///
/// `pipe!(f1, f2)(x)` is `x.chain(f1).chain(f2)`; `pipe!()` is the identity.
#[macro_export]
macro_rules! pipe {
    () => {
        |initial| initial
    };
    ($($step:expr),+ $(,)?) => {
        |initial| {
            let acc = initial;
            $(let acc = $crate::either::Either::chain(acc, $step);)+
            acc
        }
    };
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn parse(text: String) -> Maybe<i64> {
        text.trim()
            .parse::<i64>()
            .map_err(|e| format!("cannot parse '{text}': {e}"))
            .into()
    }

    fn non_negative(n: i64) -> Maybe<i64> {
        if n >= 0 {
            Success(n)
        } else {
            Failure(format!("{n} is negative"))
        }
    }

    #[test]
    fn test_chain_on_success_applies_function() {
        let lhs = Success::<String, _>("42".to_string()).chain(parse);
        let rhs = parse("42".to_string());
        assert_eq!(lhs, rhs);
        assert_eq!(lhs.value(), Some(&42));
    }

    #[test]
    fn test_chain_on_failure_short_circuits() {
        let calls = Cell::new(0);
        let result: Maybe<i64> = Failure("boom".to_string()).chain(|n: i64| {
            calls.set(calls.get() + 1);
            Success(n + 1)
        });

        assert_eq!(result, Failure("boom".to_string()));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_accessors() {
        let ok: Maybe<i64> = Success(1);
        let err: Maybe<i64> = Failure("bad".to_string());

        assert!(ok.is_success() && !ok.is_failure());
        assert!(err.is_failure() && !err.is_success());
        assert_eq!(ok.error(), None);
        assert_eq!(err.value(), None);
        assert_eq!(err.error().map(String::as_str), Some("bad"));
        assert_eq!(err.unwrap_or(7), 7);
    }

    #[test]
    fn test_shr_operator_matches_chain() {
        let via_op = Success("-3".to_string()) >> parse >> non_negative;
        let via_chain = Success("-3".to_string()).chain(parse).chain(non_negative);
        assert_eq!(via_op, via_chain);
        assert_eq!(via_op.error().map(String::as_str), Some("-3 is negative"));
    }

    #[test]
    fn test_bitor_operator_matches_chain() {
        let via_op = Success(" 8 ".to_string()) | parse | non_negative;
        assert_eq!(via_op, Success(8));

        let calls = Cell::new(0);
        let failed: Maybe<i64> = Failure("early".to_string())
            | (|n: i64| {
                calls.set(calls.get() + 1);
                Success(n)
            });
        assert_eq!(failed, Failure("early".to_string()));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_pipe_without_steps_is_identity() {
        let run = pipe::<String, i64>(Vec::new());
        assert_eq!(run(Success(5)), Success(5));
        assert_eq!(run(Failure("x".into())), Failure("x".to_string()));

        let run_macro = pipe!();
        let input: Maybe<i64> = Success(9);
        assert_eq!(run_macro(input), Success(9));
    }

    #[test]
    fn test_pipe_equals_nested_chain() {
        let double = |n: i64| -> Maybe<i64> { Success(n * 2) };
        let run = pipe(vec![Box::new(non_negative) as Step<'static, String, i64>, Box::new(double)]);

        for x in [-4_i64, 0, 21] {
            let expected = Success(x).chain(non_negative).chain(double);
            assert_eq!(run(Success(x)), expected);
        }
    }

    #[test]
    fn test_pipe_macro_with_changing_types() {
        let run = pipe!(parse, non_negative, |n: i64| Success::<String, _>(n.to_string()));
        assert_eq!(run(Success(" 12 ".to_string())), Success("12".to_string()));
        assert!(run(Success("abc".to_string())).is_failure());
    }

    #[test]
    fn test_result_round_trip() {
        let result: Result<i64, String> = Success::<String, i64>(3).into();
        assert_eq!(result, Ok(3));
        let either: Maybe<i64> = Err::<i64, String>("e".into()).into();
        assert_eq!(either.into_error(), Some("e".to_string()));
    }
}
