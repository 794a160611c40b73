//! The decomposition pipeline: decompose, review, refine, finalize
//!
//! The orchestration loop lives in the external chat handler; each stage
//! here is a pure function over its inputs apart from the injected clock.

pub mod decomposer;
pub mod finalizer;
pub mod refiner;
pub mod reviewer;

pub use decomposer::{TaskDescription, decompose_task};
pub use finalizer::{FinalSummary, SummaryCounts, finalize_decomposition};
pub use refiner::{Answer, refine_decomposition};
pub use reviewer::{Confidence, ReviewResult, review_decomposition};
