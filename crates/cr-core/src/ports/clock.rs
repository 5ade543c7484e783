use chrono::NaiveDate;

pub trait ClockPort: Send + Sync {
    /// Current calendar date, used as a submission's `submittedDate`.
    fn today(&self) -> NaiveDate;
}
