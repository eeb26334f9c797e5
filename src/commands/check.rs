//! Implementation of the `broom check` command.
//!
//! Resolves and validates the retention policy with exactly the same merging
//! rules as `run`, including pattern compilation, then prints the resolved
//! policy. No filesystem entry under the base folder is touched, so this is
//! the way to verify retention config before letting it loose.

use crate::cli::CheckArgs;
use crate::commands::resolve_inputs;
use crate::error::Result;
use crate::pattern::PatternSet;
use crate::policy::RetentionPolicy;

/// Execute the `broom check` command.
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let (config, request) = resolve_inputs(&args.policy)?;

    let policy = RetentionPolicy::resolve(&config, &request)?;
    // Compile for the side effect: an unparsable pattern must fail here,
    // just as it would fail a run before any filesystem access.
    PatternSet::compile(&policy.patterns, policy.pattern_type)?;

    println!("Policy is valid.");
    println!();
    println!("  Base folder:    {}", policy.base_folder.display());
    println!("  Pattern type:   {}", policy.pattern_type.as_str());
    println!("  Patterns:");
    for pattern in &policy.patterns {
        println!("    - {}", pattern);
    }
    println!(
        "  Age threshold:  {} {}",
        policy.age_amount,
        policy.age_unit.as_str()
    );
    println!("  Folder removal: {}", policy.folder_removal_mode.as_str());
    println!("  Dry run:        {}", policy.dry_run);
    println!("  Report details: {}", policy.report_details);

    Ok(())
}
