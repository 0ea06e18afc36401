use anyhow::Result;
use clap::Parser;

use git_bump::cli::{run_bump_workflow, BumpWorkflowArgs};
use git_bump::config;
use git_bump::domain::VersionBump;
use git_bump::git::Git2Repository;
use git_bump::{logging, ui};

#[derive(clap::Parser)]
#[command(
    name = "git-bump",
    about = "Create the next semantic version tag in a git repository",
    after_help = "Without --major or --minor the patch version is bumped."
)]
struct Args {
    #[arg(long, help = "Bump the major version (wins over --minor)")]
    major: bool,

    #[arg(long, help = "Bump the minor version")]
    minor: bool,

    #[arg(short, long, help = "Create the tag without asking for confirmation")]
    yes: bool,

    #[arg(long, help = "Show the next version without creating a tag")]
    dry_run: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short = 'C', long, default_value = ".", help = "Path to the git repository")]
    repo: String,

    #[arg(long, help = "Print debug logs to stderr")]
    verbose: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("git-bump {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    logging::init(args.verbose);

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref())?;

    let repo = Git2Repository::open(&args.repo)?.with_tag_config(config.tag.clone());

    let workflow_args = BumpWorkflowArgs {
        part: VersionBump::from_flags(args.major, args.minor),
        assume_yes: args.yes || config.behavior.assume_yes,
        dry_run: args.dry_run,
    };

    run_bump_workflow(&repo, &workflow_args, ui::confirm_action)?;
    Ok(())
}
