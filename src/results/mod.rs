pub mod case;
pub mod group;
pub mod run;
pub mod status;
pub mod suite;

use std::cmp::Ordering;

pub use self::case::{TestCaseError, TestCaseResult};
pub use self::group::TestGroupResult;
pub use self::run::TestRunResult;
pub use self::status::TestExecutionResult;
pub use self::suite::TestSuiteResult;

/// Lexicographic comparison of two slices under `cmp`.
pub(crate) fn cmp_slices<T, F>(a: &[T], b: &[T], mut cmp: F) -> Ordering
where
    F: FnMut(&T, &T) -> Ordering,
{
    a.iter()
        .zip(b)
        .map(|(x, y)| cmp(x, y))
        .find(|ordering| *ordering != Ordering::Equal)
        .unwrap_or_else(|| a.len().cmp(&b.len()))
}
