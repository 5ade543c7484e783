use rand::Rng;

use cr_core::config::review_config::{DEFAULT_MAX_EARNINGS, DEFAULT_MAX_VIEWS};
use cr_core::ports::MetricsGeneratorPort;
use cr_core::PerformanceMetrics;

/// Uniform random views in `[0, max_views)` and earnings in `[0, max_earnings)`.
pub struct RandomMetricsGenerator {
    max_views: u64,
    max_earnings: u64,
}

impl RandomMetricsGenerator {
    pub fn new(max_views: u64, max_earnings: u64) -> Self {
        Self {
            max_views,
            max_earnings,
        }
    }
}

impl Default for RandomMetricsGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_VIEWS, DEFAULT_MAX_EARNINGS)
    }
}

fn below(rng: &mut impl Rng, bound: u64) -> u64 {
    if bound == 0 {
        0
    } else {
        rng.random_range(0..bound)
    }
}

impl MetricsGeneratorPort for RandomMetricsGenerator {
    fn generate(&self) -> PerformanceMetrics {
        let mut rng = rand::rng();
        PerformanceMetrics {
            views: below(&mut rng, self.max_views),
            earnings: below(&mut rng, self.max_earnings),
        }
    }
}

/// Always yields the same metrics. For tests and demos.
pub struct FixedMetricsGenerator(pub PerformanceMetrics);

impl MetricsGeneratorPort for FixedMetricsGenerator {
    fn generate(&self) -> PerformanceMetrics {
        self.0
    }
}
