// ABOUTME: Storage key name constants
// ABOUTME: Centralized definitions of all persisted settings keys

// Earnings configuration
pub const CURRENCY: &str = "currency";
pub const HOURLY_RATE: &str = "hourlyRate";
pub const FREQUENCY: &str = "frequency";

// Daily working window, stored as "H:M"
pub const START_TIME: &str = "startTime";
pub const END_TIME: &str = "endTime";
