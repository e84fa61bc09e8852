//! Contains the statistics gathered while generating a sequence and the means to log them.
mod generation_statistics;
mod statistic_logging;

pub use generation_statistics::GenerationStatistics;
pub use statistic_logging::configure_statistic_logging;
pub use statistic_logging::log_statistic;
pub use statistic_logging::log_statistic_postfix;
pub use statistic_logging::should_log_statistics;
