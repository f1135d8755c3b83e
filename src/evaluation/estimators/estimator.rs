/// Incremental scalar estimator over weighted observations.
///
/// Implementations accept values via [`add_weighted`](Estimator::add_weighted)
/// and expose the current estimate via [`estimation`](Estimator::estimation).
pub trait Estimator {
    /// Incorporates a new observation with the given weight.
    fn add_weighted(&mut self, v: f64, weight: f64);

    /// Returns the current estimate.
    fn estimation(&self) -> f64;
}
