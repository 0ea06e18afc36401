//! Main workflow orchestration logic
//!
//! Keeps the bump sequence (list, advance, confirm, create) apart from
//! argument parsing so it can run against any [Repository].

use anyhow::Result;

use crate::boundary::BoundaryWarning;
use crate::domain::{self, Version, VersionBump};
use crate::git::Repository;
use crate::ui;

/// Arguments for the bump workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic,
/// without depending on clap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BumpWorkflowArgs {
    /// Which component to increment
    pub part: VersionBump,

    /// Skip the confirmation prompt
    pub assume_yes: bool,

    /// Compute and print only, never write
    pub dry_run: bool,
}

/// How a bump workflow ended
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowResult {
    /// The tag was written to the repository
    Created { current: Version, tag: Version },
    /// Dry run, nothing written
    DryRun { current: Version, tag: Version },
    /// The user declined, nothing written
    Aborted { current: Version, tag: Version },
}

impl WorkflowResult {
    /// The tag name that was (or would have been) created
    pub fn tag_name(&self) -> String {
        match self {
            WorkflowResult::Created { tag, .. }
            | WorkflowResult::DryRun { tag, .. }
            | WorkflowResult::Aborted { tag, .. } => tag.to_string(),
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, WorkflowResult::Created { .. })
    }
}

/// Main bump workflow
///
/// 1. List tags from the repository
/// 2. Work out the current and next version
/// 3. Show both to the user
/// 4. Ask for confirmation via `confirm` unless `assume_yes` or `dry_run`
/// 5. Create the tag
///
/// A declined confirmation returns [WorkflowResult::Aborted] and leaves the
/// repository untouched. Tag creation failures are returned as errors.
pub fn run_bump_workflow<R, F>(
    repo: &R,
    args: &BumpWorkflowArgs,
    mut confirm: F,
) -> Result<WorkflowResult>
where
    R: Repository + ?Sized,
    F: FnMut(&str) -> Result<bool>,
{
    let tags = repo.list_tags()?;
    let advancement = domain::advance(&tags, args.part)?;
    let (current, tag) = (advancement.current, advancement.next);
    tracing::debug!(
        listed = tags.len(),
        ignored = advancement.ignored,
        %current,
        "picked latest release tag"
    );

    if !advancement.has_release_tag {
        ui::display_boundary_warning(&BoundaryWarning::NoVersionTags { baseline: current });
    }

    ui::display_advancement(&advancement);

    if args.dry_run {
        ui::display_status(&format!("Dry run: would create tag {}", tag));
        tracing::info!(%current, %tag, "dry run, no tag created");
        return Ok(WorkflowResult::DryRun { current, tag });
    }

    if !args.assume_yes && !confirm(ui::CREATE_TAG_PROMPT)? {
        ui::display_aborted();
        tracing::info!(%tag, "tag creation declined");
        return Ok(WorkflowResult::Aborted { current, tag });
    }

    let tag_name = tag.to_string();
    repo.create_tag(&tag_name)?;
    ui::display_success(&format!("Created tag {}", tag_name));
    tracing::info!(%current, tag = %tag_name, "tag created");

    Ok(WorkflowResult::Created { current, tag })
}
