//! # Factory Calc
//!
//! BOM 物料需求與缺料計算引擎

pub mod approval;
pub mod requirements;
pub mod resolver;

// Re-export 主要類型
pub use approval::{apply_approval, decide_approval, ApprovalOutcome};
pub use requirements::{
    compute_requirements, compute_requirements_bulk, has_shortage, shortages,
    MaterialRequirement, RequirementMap,
};
