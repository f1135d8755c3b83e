use crate::evaluation::estimators::Estimator;

/// Weighted mean: `sum(w * v) / sum(w)`.
///
/// An estimator that has seen no weight reports `0.0`, so empty restrictions
/// degrade to a zero score.
#[derive(Debug, Default, Clone, Copy)]
pub struct WeightedMeanEstimator {
    weight: f64,
    sum: f64,
}

impl Estimator for WeightedMeanEstimator {
    #[inline]
    fn add_weighted(&mut self, v: f64, weight: f64) {
        self.weight += weight;
        self.sum += weight * v;
    }

    #[inline]
    fn estimation(&self) -> f64 {
        if self.weight > 0.0 {
            self.sum / self.weight
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_estimates_zero() {
        let est = WeightedMeanEstimator::default();
        assert_eq!(est.estimation(), 0.0);
    }

    #[test]
    fn unit_weights_give_plain_mean() {
        let mut est = WeightedMeanEstimator::default();
        for v in [1.0, 0.0, 1.0, 1.0] {
            est.add_weighted(v, 1.0);
        }
        assert!((est.estimation() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn weights_scale_contributions() {
        let mut est = WeightedMeanEstimator::default();
        est.add_weighted(1.0, 3.0);
        est.add_weighted(0.0, 1.0);
        assert!((est.estimation() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn zero_weight_only_estimates_zero() {
        let mut est = WeightedMeanEstimator::default();
        est.add_weighted(1.0, 0.0);
        assert_eq!(est.estimation(), 0.0);
    }
}
