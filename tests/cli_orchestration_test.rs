use git_bump::cli::{run_bump_workflow, BumpWorkflowArgs, WorkflowResult};
use git_bump::domain::{Version, VersionBump};
use git_bump::git::MockRepository;

#[test]
fn test_default_args_bump_patch() {
    let args = BumpWorkflowArgs::default();
    assert_eq!(args.part, VersionBump::Patch);
    assert!(!args.assume_yes);
    assert!(!args.dry_run);
}

#[test]
fn test_workflow_bumps_each_part() {
    let cases = [
        (VersionBump::Major, "v2.0.0"),
        (VersionBump::Minor, "v1.3.0"),
        (VersionBump::Patch, "v1.2.4"),
    ];

    for (part, expected) in cases {
        let repo = MockRepository::with_tags(["v1.2.3", "v1.2.3-rc", "garbage"]);
        let args = BumpWorkflowArgs {
            part,
            assume_yes: true,
            dry_run: false,
        };

        let result = run_bump_workflow(&repo, &args, |_| Ok(true)).unwrap();
        assert_eq!(result.tag_name(), expected);
        assert!(repo.tags().contains(&expected.to_string()));
    }
}

#[test]
fn test_declining_leaves_tags_unchanged() {
    let repo = MockRepository::with_tags(["v1.2.3", "v1.10.0"]);
    let before = repo.tags();

    let result = run_bump_workflow(&repo, &BumpWorkflowArgs::default(), |_| Ok(false)).unwrap();

    assert_eq!(
        result,
        WorkflowResult::Aborted {
            current: Version::new(1, 10, 0),
            tag: Version::new(1, 10, 1),
        }
    );
    assert_eq!(repo.tags(), before);
}

#[test]
fn test_dry_run_never_prompts_or_writes() {
    let repo = MockRepository::with_tags(["v0.3.0"]);
    let args = BumpWorkflowArgs {
        part: VersionBump::Minor,
        assume_yes: false,
        dry_run: true,
    };

    let result = run_bump_workflow(&repo, &args, |_| panic!("should not prompt")).unwrap();

    assert_eq!(result.tag_name(), "v0.4.0");
    assert!(!result.is_created());
    assert_eq!(repo.tags(), vec!["v0.3.0".to_string()]);
}

#[test]
fn test_empty_repository_starts_from_zero() {
    let repo = MockRepository::new();

    let result = run_bump_workflow(&repo, &BumpWorkflowArgs::default(), |_| Ok(true)).unwrap();

    assert_eq!(
        result,
        WorkflowResult::Created {
            current: Version::new(0, 0, 0),
            tag: Version::new(0, 0, 1),
        }
    );
}

#[test]
fn test_existing_tag_is_fatal() {
    // Someone else creates the same tag while the prompt is open.
    let repo = MockRepository::with_tags(["v1.0.0"]);
    let args = BumpWorkflowArgs {
        assume_yes: false,
        ..Default::default()
    };

    let result = run_bump_workflow(&repo, &args, |_| {
        repo.add_tag("v1.0.1");
        Ok(true)
    });

    let err = result.unwrap_err();
    assert!(err.to_string().contains("already exists"));
    assert_eq!(repo.tags(), vec!["v1.0.0".to_string(), "v1.0.1".to_string()]);
}

#[test]
fn test_prompt_error_is_propagated() {
    let repo = MockRepository::with_tags(["v1.0.0"]);

    let result = run_bump_workflow(&repo, &BumpWorkflowArgs::default(), |_| {
        Err(anyhow::anyhow!("stdin closed"))
    });

    assert!(result.is_err());
    assert_eq!(repo.tags(), vec!["v1.0.0".to_string()]);
}
