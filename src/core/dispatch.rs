//! Validate-then-dispatch support.
//!
//! Every generic operation is a free function that resolves the tag of its
//! argument and calls that tag's implementation trait (`FoldlImpl`,
//! `HeadImpl`, ...). Before dispatching, and when the `check-models`
//! feature is enabled, the function statically asserts that the tag models
//! the concept the operation belongs to:
//!
//! ```text
//! foldl(xs, s, f)
//!   -> const { assert!(models::<Foldable, TagOf<Xs>>(), "...") }
//!   -> <TagOf<Xs> as FoldlImpl<Xs, S, F>>::foldl(xs, s, f)
//! ```
//!
//! Without the feature, the assertion disappears and only trait resolution
//! stands between a call and its implementation.

/// Statically asserts that a tag models a concept.
///
/// Expands to an inline `const` block, so a failed assertion rejects the
/// program with the given message during monomorphization.
#[cfg(feature = "check-models")]
macro_rules! require_models {
    ($concept:ty, $tag:ty, $message:literal) => {
        const { assert!($crate::core::models::<$concept, $tag>(), $message) }
    };
}

#[cfg(not(feature = "check-models"))]
macro_rules! require_models {
    ($concept:ty, $tag:ty, $message:literal) => {};
}

pub(crate) use require_models;

/// Reports a violated precondition and aborts the operation.
///
/// Preconditions (indexing past the end, folding an empty runtime container
/// without a seed, ...) are contractual; they are never turned into a
/// recoverable error.
#[cold]
#[track_caller]
pub(crate) fn precondition_violation(operation: &'static str, detail: &'static str) -> ! {
    tracing::error!(operation, detail, "precondition violated");
    panic!("{operation}: precondition violated: {detail}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[should_panic(expected = "at: precondition violated: index out of bounds")]
    fn precondition_violation_panics_with_operation_name() {
        precondition_violation("at", "index out of bounds");
    }
}
