// src/common/outcome.rs
//! Two-variant validation result that accumulates failures.
//!
//! Unlike `Result`, combining two `Invalid` outcomes keeps the errors of
//! both sides, so a caller gets the full list of violations in one pass.

use super::non_empty::NonEmpty;
use super::semigroup::Semigroup;

#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Outcome<E, A> {
    /// Fully refined value
    Valid(A),
    /// One or more violations, in the order the validators ran
    Invalid(NonEmpty<E>),
}

impl<E, A> Outcome<E, A> {
    pub fn valid(value: A) -> Self {
        Outcome::Valid(value)
    }

    /// Failure carrying a single error
    pub fn invalid(error: E) -> Self {
        Outcome::Invalid(NonEmpty::single(error))
    }

    pub fn invalid_many(errors: NonEmpty<E>) -> Self {
        Outcome::Invalid(errors)
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid(_))
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Outcome::Invalid(_))
    }

    /// Errors of an `Invalid` outcome, `None` when valid
    pub fn errors(&self) -> Option<&NonEmpty<E>> {
        match self {
            Outcome::Valid(_) => None,
            Outcome::Invalid(errors) => Some(errors),
        }
    }

    /// Case analysis over both branches.
    ///
    /// This is the extraction point for callers: one handler for the
    /// violations and one for the refined value, both producing `R`.
    pub fn fold<R>(
        self,
        on_invalid: impl FnOnce(NonEmpty<E>) -> R,
        on_valid: impl FnOnce(A) -> R,
    ) -> R {
        match self {
            Outcome::Valid(value) => on_valid(value),
            Outcome::Invalid(errors) => on_invalid(errors),
        }
    }

    /// Transforms the value; `Invalid` passes through untouched and `f` is not called
    pub fn map<B>(self, f: impl FnOnce(A) -> B) -> Outcome<E, B> {
        match self {
            Outcome::Valid(value) => Outcome::Valid(f(value)),
            Outcome::Invalid(errors) => Outcome::Invalid(errors),
        }
    }

    /// Transforms every error, keeping order
    pub fn map_err<F>(self, f: impl FnMut(E) -> F) -> Outcome<F, A> {
        match self {
            Outcome::Valid(value) => Outcome::Valid(value),
            Outcome::Invalid(errors) => Outcome::Invalid(errors.map(f)),
        }
    }

    /// Pairs two independent outcomes, merging errors when both fail
    pub fn zip<B>(self, other: Outcome<E, B>) -> Outcome<E, (A, B)> {
        self.zip_with(other, |a, b| (a, b))
    }

    /// Combines two independent outcomes with `f`.
    ///
    /// Errors from `self` always come before errors from `other`.
    pub fn zip_with<B, C>(self, other: Outcome<E, B>, f: impl FnOnce(A, B) -> C) -> Outcome<E, C> {
        match (self, other) {
            (Outcome::Valid(a), Outcome::Valid(b)) => Outcome::Valid(f(a, b)),
            (Outcome::Invalid(left), Outcome::Invalid(right)) => {
                Outcome::Invalid(left.combine(right))
            }
            (Outcome::Invalid(left), Outcome::Valid(_)) => Outcome::Invalid(left),
            (Outcome::Valid(_), Outcome::Invalid(right)) => Outcome::Invalid(right),
        }
    }

    /// Applies a validated function to a validated argument
    pub fn apply<B, F>(self, function: Outcome<E, F>) -> Outcome<E, B>
    where
        F: FnOnce(A) -> B,
    {
        function.zip_with(self, |f, value| f(value))
    }

    /// Chains a dependent validation.
    ///
    /// Short-circuits: `next` only runs on a valid value, so use it for checks
    /// that need the refined result of an earlier step, never to join
    /// independent fields.
    pub fn and_then<B>(self, next: impl FnOnce(A) -> Outcome<E, B>) -> Outcome<E, B> {
        match self {
            Outcome::Valid(value) => next(value),
            Outcome::Invalid(errors) => Outcome::Invalid(errors),
        }
    }

    pub fn into_result(self) -> Result<A, NonEmpty<E>> {
        match self {
            Outcome::Valid(value) => Ok(value),
            Outcome::Invalid(errors) => Err(errors),
        }
    }
}

impl<E, A> From<Result<A, E>> for Outcome<E, A> {
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Outcome::Valid(value),
            Err(error) => Outcome::invalid(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed(message: &'static str) -> Outcome<&'static str, i32> {
        Outcome::invalid(message)
    }

    fn times_ten(value: i32) -> i32 {
        value * 10
    }

    fn errors_of<A>(outcome: Outcome<&'static str, A>) -> Vec<&'static str> {
        outcome.fold(NonEmpty::into_vec, |_| Vec::new())
    }

    #[test]
    fn test_fold_selects_branch() {
        let valid: Outcome<&str, i32> = Outcome::valid(4);
        assert_eq!(valid.fold(|errors| -(errors.len() as i32), |v| v * 2), 8);
        assert_eq!(failed("boom").fold(|errors| -(errors.len() as i32), |v| v * 2), -1);
    }

    #[test]
    fn test_map_skips_invalid_branch() {
        let mut calls = 0;
        let mapped = failed("bad").map(|v| {
            calls += 1;
            v + 1
        });
        assert_eq!(calls, 0);
        assert_eq!(mapped, failed("bad"));

        assert_eq!(Outcome::<&str, i32>::valid(1).map(|v| v + 1), Outcome::valid(2));
    }

    #[test]
    fn test_zip_decision_table() {
        let ok = |v: i32| Outcome::<&'static str, i32>::valid(v);

        assert_eq!(ok(1).zip(ok(2)), Outcome::valid((1, 2)));
        assert_eq!(errors_of(failed("e1").zip(failed("e2"))), vec!["e1", "e2"]);
        assert_eq!(errors_of(failed("e1").zip(ok(2))), vec!["e1"]);
        assert_eq!(errors_of(ok(1).zip(failed("e2"))), vec!["e2"]);
    }

    #[test]
    fn test_apply_accumulates_both_sides() {
        let function: Outcome<&str, fn(i32) -> i32> = Outcome::invalid("no function");
        let applied = failed("no argument").apply(function);
        assert_eq!(errors_of(applied), vec!["no function", "no argument"]);

        let function: Outcome<&str, fn(i32) -> i32> = Outcome::valid(times_ten as fn(i32) -> i32);
        assert_eq!(Outcome::valid(3).apply(function), Outcome::valid(30));
    }

    #[test]
    fn test_and_then_short_circuits() {
        let chained = failed("first").and_then(|_| failed("second"));
        assert_eq!(errors_of(chained), vec!["first"]);

        let chained = Outcome::<&str, i32>::valid(5).and_then(|v| {
            if v > 3 {
                Outcome::invalid("too big")
            } else {
                Outcome::valid(v)
            }
        });
        assert_eq!(errors_of(chained), vec!["too big"]);
    }

    #[test]
    fn test_map_err_and_result_conversion() {
        let outcome = failed("bad").map_err(str::len);
        assert_eq!(outcome.clone().into_result().unwrap_err().into_vec(), vec![3]);
        assert!(outcome.is_invalid());

        let from_ok: Outcome<String, u8> = Ok(7).into();
        assert_eq!(from_ok.into_result(), Ok(7));
        let from_err: Outcome<String, u8> = Err("nope".to_string()).into();
        assert_eq!(from_err.errors().map(NonEmpty::len), Some(1));
    }
}
