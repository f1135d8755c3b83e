mod estimator;
mod weighted_mean_estimator;

pub use estimator::Estimator;
pub use weighted_mean_estimator::WeightedMeanEstimator;
