use crate::submission::PerformanceMetrics;

/// Source of simulated performance numbers for an approved clip.
pub trait MetricsGeneratorPort: Send + Sync {
    fn generate(&self) -> PerformanceMetrics;
}
