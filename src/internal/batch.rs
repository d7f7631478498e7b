use crate::internal::generate::generate;
use crate::internal::helpers::prompt_line;
use crate::types::local_settings::LocalSettings;
use crate::types::presets::PresetCategory;
use crate::types::web_app::WebAppSpec;
use crate::types::{GenerateOutcome, OverwritePolicy};
use std::io;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub created: usize,
    pub skipped: usize,
    pub failed: usize,
}

fn policy_from_answer(answer: &str) -> OverwritePolicy {
    match answer.trim().to_ascii_lowercase().as_str() {
        "o" | "overwrite" => OverwritePolicy::Always,
        "s" | "skip" => OverwritePolicy::Never,
        _ => OverwritePolicy::Ask,
    }
}

/// Settles the overwrite policy once for the whole batch instead of
/// prompting per app. The result is threaded through `run_batch`
/// explicitly, nothing global changes.
pub fn negotiate_batch_policy(initial: OverwritePolicy) -> io::Result<OverwritePolicy> {
    if initial != OverwritePolicy::Ask {
        return Ok(initial);
    }

    let answer = prompt_line(
        "Existing web apps: [a]sk per app, [o]verwrite all, [s]kip all? [a/o/s]",
    )?;
    Ok(policy_from_answer(&answer))
}

/// Applies `generate` over every app in the category, in order. Fatal
/// errors abort only the current app, the rest of the batch still runs.
pub fn run_batch(
    category: &PresetCategory,
    policy: OverwritePolicy,
    settings: &LocalSettings,
) -> BatchReport {
    let mut report = BatchReport::default();

    for app in &category.apps {
        let spec = WebAppSpec::from(app);
        match generate(&spec, policy, settings) {
            Ok(GenerateOutcome::Created { id, launcher, .. }) => {
                println!("Created web app '{id}' ({})", launcher.display());
                report.created += 1;
            }
            Ok(GenerateOutcome::Skipped { id }) => {
                println!("Skipped existing web app '{id}'");
                report.skipped += 1;
            }
            Err(e) => {
                eprintln!("Failed to create '{}': {e}", app.name);
                report.failed += 1;
            }
        }
    }

    report
}
