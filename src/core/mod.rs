// ============================================================================
// spark-observable - Core Module
// Constants, options and the error type shared by every collection
// ============================================================================

pub mod constants;
pub mod error;
pub mod options;
