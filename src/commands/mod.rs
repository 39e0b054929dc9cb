//! Command implementations

pub mod analyze;
pub mod crack;
pub mod encode;

pub use analyze::{AnalysisResult, analyze_text};
pub use crack::{CrackConfig, CrackResult, crack_messages};
pub use encode::encode_text;
