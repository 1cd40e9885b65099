use std::fmt;

use super::error::{ParseError, better_error};
use super::state::Input;

/// One possible parse: a value and the input left over after it.
pub struct Candidate<'t, T, R> {
    pub value: R,
    pub rest: Input<'t, T>,
}

impl<'t, T, R> Candidate<'t, T, R> {
    pub fn new(value: R, rest: Input<'t, T>) -> Self {
        Self { value, rest }
    }

    pub fn map<U>(self, f: impl FnOnce(R) -> U) -> Candidate<'t, T, U> {
        Candidate {
            value: f(self.value),
            rest: self.rest,
        }
    }
}

impl<T, R: Clone> Clone for Candidate<'_, T, R> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            rest: self.rest,
        }
    }
}

impl<T, R: fmt::Debug> fmt::Debug for Candidate<'_, T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidate")
            .field("value", &self.value)
            .field("rest", &self.rest)
            .finish()
    }
}

/// The full result of running a parser.
///
/// * `success == true`: `candidates` is valid, even when it is empty.
/// * `success == false`: `candidates` is empty and `error` is present.
///
/// `error` holds the farthest error seen, including on success, where it
/// reports what a sibling branch almost matched.
pub struct Outcome<'t, T, R> {
    pub success: bool,
    pub candidates: Vec<Candidate<'t, T, R>>,
    pub error: Option<ParseError>,
}

impl<'t, T, R> Outcome<'t, T, R> {
    pub fn empty_success() -> Self {
        Self {
            success: true,
            candidates: Vec::new(),
            error: None,
        }
    }

    pub fn success_with(candidates: Vec<Candidate<'t, T, R>>, error: Option<ParseError>) -> Self {
        Self {
            success: true,
            candidates,
            error,
        }
    }

    pub fn fail_with(error: ParseError) -> Self {
        Self {
            success: false,
            candidates: Vec::new(),
            error: Some(error),
        }
    }

    /// Builds a success or a failure from collected candidates.
    ///
    /// A failure without any recorded error gets an `Unknown` one so that the
    /// "failed outcomes carry an error" invariant holds.
    pub fn merge_outcome(
        candidates: Vec<Candidate<'t, T, R>>,
        error: Option<ParseError>,
        success: bool,
    ) -> Self {
        if success {
            Self::success_with(candidates, error)
        } else {
            Self::fail_with(error.unwrap_or_else(|| ParseError::new("no alternative matched")))
        }
    }

    /// Transforms every candidate's value, keeping residuals and the error.
    pub fn map_values<U>(self, mut f: impl FnMut(R) -> U) -> Outcome<'t, T, U> {
        Outcome {
            success: self.success,
            candidates: self
                .candidates
                .into_iter()
                .map(|c| c.map(&mut f))
                .collect(),
            error: self.error,
        }
    }

    /// Re-types a failed outcome.
    pub fn into_failure<U>(self) -> Outcome<'t, T, U> {
        Outcome {
            success: false,
            candidates: Vec::new(),
            error: self.error,
        }
    }

    /// Folds an error recorded before this outcome into its farthest error.
    pub fn with_error(mut self, earlier: Option<ParseError>) -> Self {
        self.error = better_error(earlier, self.error.take());
        self
    }

    pub fn values(&self) -> impl Iterator<Item = &R> {
        self.candidates.iter().map(|c| &c.value)
    }
}

impl<T, R: fmt::Debug> fmt::Debug for Outcome<'_, T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Outcome")
            .field("success", &self.success)
            .field("candidates", &self.candidates)
            .field("error", &self.error)
            .finish()
    }
}
