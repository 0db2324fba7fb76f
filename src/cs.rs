pub mod change;

// Re-export all modules
pub use change::*;
