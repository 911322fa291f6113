use thiserror::Error;

/// Errors reported by [`LeftRightPlanarity`](super::LeftRightPlanarity).
///
/// A non-planar graph is *not* an error; it is reported as a regular `false` verdict.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanarityError {
    /// The result was queried before [`run`](super::LeftRightPlanarity::run) completed.
    #[error("planarity test has not been run yet; call `run()` first")]
    NotRun,
}

/// Result type for planarity queries.
pub type PlanarityResult<T> = std::result::Result<T, PlanarityError>;
