mod configs;

// Re-export test fixtures
pub use configs::*;
