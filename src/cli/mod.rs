//! Command-level workflows driven by the binary

pub mod orchestration;

pub use orchestration::{run_bump_workflow, BumpWorkflowArgs, WorkflowResult};
