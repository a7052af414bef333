//! Terminal output for fnship commands
//!
//! Step headers and summaries go to stdout, styled with `console`.
//! Diagnostics and tracing output go to stderr.

use std::fmt::Write;

use console::Style;

use crate::operations::deploy::DeploymentPlan;
use crate::service::exclude::LOCAL_ONLY_PATTERN;

/// Prefix of every dry-run line
pub const DRY_RUN_PREFIX: &str = "[DRY RUN]";

/// Print a numbered pipeline step, e.g. `[2/3] Uploading to gs://...`
pub fn step(index: usize, total: usize, message: &str) {
    println!(
        "{} {}",
        Style::new().bold().cyan().apply_to(format!("[{}/{}]", index, total)),
        message
    );
}

/// Print a secondary line under the current step
pub fn note(message: &str) {
    println!("      {}", Style::new().dim().apply_to(message));
}

/// Print the final success line
pub fn success(message: &str) {
    println!("{} {}", Style::new().bold().green().apply_to("✓"), message);
}

/// Render a deployment plan as `[DRY RUN]` lines
pub fn render_plan(plan: &DeploymentPlan) -> String {
    let label = Style::new().bold();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} Would deploy {} from {}",
        DRY_RUN_PREFIX,
        Style::new().bold().yellow().apply_to(&plan.request.function_name),
        plan.request.service_dir.display()
    );
    let _ = writeln!(
        out,
        "{} {} {}",
        DRY_RUN_PREFIX,
        label.apply_to("Archive:"),
        plan.archive.display()
    );
    for name in plan.selection.included_names() {
        let _ = writeln!(out, "{}   + {}", DRY_RUN_PREFIX, name);
    }
    for file in &plan.selection.excluded {
        let reason = if file.pattern == LOCAL_ONLY_PATTERN {
            "local only".to_string()
        } else {
            format!("excluded by {}", file.pattern)
        };
        let _ = writeln!(out, "{}   - {} ({})", DRY_RUN_PREFIX, file.name, reason);
    }
    let _ = writeln!(
        out,
        "{} {} {}",
        DRY_RUN_PREFIX,
        label.apply_to("Remote:"),
        plan.remote_object
    );
    let env_vars = if plan.env_vars.is_empty() {
        "(none)".to_string()
    } else {
        plan.env_vars.join(", ")
    };
    let _ = writeln!(
        out,
        "{} {} {}",
        DRY_RUN_PREFIX,
        label.apply_to("Environment:"),
        env_vars
    );
    let _ = writeln!(out, "{} {}", DRY_RUN_PREFIX, label.apply_to("Commands:"));
    for command in plan.commands() {
        let _ = writeln!(out, "{}   {}", DRY_RUN_PREFIX, command);
    }

    out
}
