//! # Application Dependencies
//!
//! Groups the ports every use case is built from. Plain parameter grouping:
//! no defaults, no optional fields.

use std::sync::Arc;
use cr_core::ports::*;

pub struct AppDeps {
    // Storage
    pub store: Arc<dyn SubmissionStorePort>,

    // Simulated analytics
    pub metrics: Arc<dyn MetricsGeneratorPort>,

    // System
    pub clock: Arc<dyn ClockPort>,
}
