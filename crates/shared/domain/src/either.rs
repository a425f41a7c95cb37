//! Two-armed result channel for use cases.
//!
//! `Left` carries an expected domain failure, `Right` carries the success
//! payload. Infrastructure faults never travel through this type.

/// Either a domain failure (`Left`) or a success payload (`Right`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a use case outcome must be inspected"]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

/// Build a failure outcome.
pub fn left<L, R>(value: L) -> Either<L, R> {
    Either::Left(value)
}

/// Build a success outcome.
pub fn right<L, R>(value: R) -> Either<L, R> {
    Either::Right(value)
}

impl<L, R> Either<L, R> {
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Borrow the failure payload, if this is a failure.
    pub fn left_value(&self) -> Option<&L> {
        match self {
            Either::Left(value) => Some(value),
            Either::Right(_) => None,
        }
    }

    /// Borrow the success payload, if this is a success.
    pub fn right_value(&self) -> Option<&R> {
        match self {
            Either::Left(_) => None,
            Either::Right(value) => Some(value),
        }
    }

    /// Take the failure payload.
    ///
    /// # Panics
    /// Panics if the outcome is a success.
    #[track_caller]
    pub fn unwrap_left(self) -> L {
        match self {
            Either::Left(value) => value,
            Either::Right(_) => panic!("called `Either::unwrap_left()` on a `Right` value"),
        }
    }

    /// Take the success payload.
    ///
    /// # Panics
    /// Panics if the outcome is a failure.
    #[track_caller]
    pub fn unwrap_right(self) -> R {
        match self {
            Either::Right(value) => value,
            Either::Left(_) => panic!("called `Either::unwrap_right()` on a `Left` value"),
        }
    }

    pub fn map<T>(self, f: impl FnOnce(R) -> T) -> Either<L, T> {
        match self {
            Either::Left(value) => Either::Left(value),
            Either::Right(value) => Either::Right(f(value)),
        }
    }

    pub fn map_left<T>(self, f: impl FnOnce(L) -> T) -> Either<T, R> {
        match self {
            Either::Left(value) => Either::Left(f(value)),
            Either::Right(value) => Either::Right(value),
        }
    }

    /// Convert into a standard `Result` so callers can use `?`.
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Either::Right(value),
            Err(value) => Either::Left(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_is_failure_only() {
        let outcome: Either<&str, i32> = left("boom");

        assert!(outcome.is_left());
        assert!(!outcome.is_right());
        assert_eq!(outcome.left_value(), Some(&"boom"));
        assert_eq!(outcome.right_value(), None);
        assert_eq!(outcome.unwrap_left(), "boom");
    }

    #[test]
    fn test_right_is_success_only() {
        let outcome: Either<&str, i32> = right(42);

        assert!(outcome.is_right());
        assert!(!outcome.is_left());
        assert_eq!(outcome.left_value(), None);
        assert_eq!(outcome.right_value(), Some(&42));
        assert_eq!(outcome.unwrap_right(), 42);
    }

    #[test]
    #[should_panic(expected = "unwrap_right")]
    fn test_unwrap_wrong_arm_panics() {
        let outcome: Either<&str, i32> = left("boom");
        outcome.unwrap_right();
    }

    #[test]
    #[should_panic(expected = "unwrap_left")]
    fn test_unwrap_left_on_success_panics() {
        let outcome: Either<&str, i32> = right(1);
        outcome.unwrap_left();
    }

    #[test]
    fn test_map_touches_one_arm() {
        let ok: Either<String, i32> = right(2);
        let err: Either<String, i32> = left("no".to_string());

        assert_eq!(ok.map(|v| v * 10), Either::Right(20));
        assert_eq!(err.map(|v| v * 10), Either::Left("no".to_string()));
        assert_eq!(
            left::<_, i32>("no").map_left(str::len),
            Either::Left(2)
        );
    }

    #[test]
    fn test_result_conversion() {
        let outcome: Either<&str, i32> = Ok::<i32, &str>(7).into();
        assert_eq!(outcome.into_result(), Ok(7));

        let outcome: Either<&str, i32> = Err::<i32, &str>("bad").into();
        assert_eq!(outcome.into_result(), Err("bad"));
    }
}
