use crate::cli::LintArgs;
use color_eyre::eyre::{eyre, Result};
use duct::cmd;
use std::fs;
use std::io::Write;

// ---------------------------------------------------------------------------
// Functional Core — pure types and logic, no I/O
// ---------------------------------------------------------------------------

/// Identifier for each check, used to match skip flags and fix-mode overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CheckId {
    Fmt,
    Clippy,
    Test,
    SmokeCodeOpt,
    SmokeContentMod,
}

/// A lint check to execute.
struct Check {
    id: CheckId,
    /// The program to invoke.
    program: &'static str,
    /// Arguments passed to the program.
    args: &'static [&'static str],
}

/// The outcome of running a single check.
enum CheckOutcome {
    Passed { output: String },
    Failed { output: String },
}

struct CheckResult {
    name: String,
    outcome: CheckOutcome,
}

/// The ordered pipeline of checks to run.
///
/// The smoke checks run each binary with `--dry-run`, which composes the
/// default prompt without a credential or network access.
const CHECKS: &[Check] = &[
    Check {
        id: CheckId::Fmt,
        program: "cargo",
        args: &["fmt", "--all", "--check"],
    },
    Check {
        id: CheckId::Clippy,
        program: "cargo",
        args: &["clippy", "--all-targets", "--", "-D", "warnings"],
    },
    Check {
        id: CheckId::Test,
        program: "cargo",
        args: &["test", "--all-targets"],
    },
    Check {
        id: CheckId::SmokeCodeOpt,
        program: "cargo",
        args: &["run", "--quiet", "--bin", "code-opt", "--", "--dry-run"],
    },
    Check {
        id: CheckId::SmokeContentMod,
        program: "cargo",
        args: &["run", "--quiet", "--bin", "content-mod", "--", "--dry-run"],
    },
];

fn should_skip(id: CheckId, args: &LintArgs) -> bool {
    match id {
        CheckId::Fmt => args.no_fmt,
        CheckId::Clippy => args.no_clippy,
        CheckId::Test => args.no_test,
        CheckId::SmokeCodeOpt | CheckId::SmokeContentMod => args.no_smoke,
    }
}

/// Arguments to use in `--fix` mode, or `None` to keep the defaults.
fn fix_args(id: CheckId) -> Option<&'static [&'static str]> {
    match id {
        CheckId::Fmt => Some(&["fmt", "--all"]),
        CheckId::Clippy => Some(&[
            "clippy",
            "--all-targets",
            "--fix",
            "--allow-dirty",
            "--",
            "-D",
            "warnings",
        ]),
        _ => None,
    }
}

fn check_display_name(program: &str, args: &[&str]) -> String {
    format!("{} {}", program, args.join(" "))
}

fn format_log_entry(result: &CheckResult) -> String {
    match &result.outcome {
        CheckOutcome::Passed { output } | CheckOutcome::Failed { output } => {
            format!("=== {} ===\n{}\n", result.name, output)
        }
    }
}

// ---------------------------------------------------------------------------
// Imperative Shell — I/O, side effects, orchestration
// ---------------------------------------------------------------------------

/// Run the lint pipeline, stopping at the first failing check.
pub fn run(args: &LintArgs) -> Result<()> {
    let log_path = std::env::current_dir()?.join("target").join("xtask-lint.log");
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut log_file = fs::File::create(&log_path)?;

    for check in CHECKS.iter().filter(|check| !should_skip(check.id, args)) {
        let check_args = if args.fix {
            fix_args(check.id).unwrap_or(check.args)
        } else {
            check.args
        };

        let result = run_check(check.program, check_args)?;
        write!(log_file, "{}", format_log_entry(&result))?;

        match result.outcome {
            CheckOutcome::Passed { output } => {
                if args.verbose {
                    print!("{output}");
                }
                println!("[ok] {}", result.name);
            }
            CheckOutcome::Failed { output } => {
                print!("{output}");
                println!("log: {}", log_path.display());
                return Err(eyre!("lint failed at: {}", result.name));
            }
        }
    }

    println!("log: {}", log_path.display());
    Ok(())
}

fn run_check(program: &str, args: &[&str]) -> Result<CheckResult> {
    let output = cmd(program, args)
        .stderr_to_stdout()
        .stdout_capture()
        .unchecked()
        .run()?;

    let text = String::from_utf8_lossy(&output.stdout).into_owned();
    let name = check_display_name(program, args);

    let outcome = if output.status.success() {
        CheckOutcome::Passed { output: text }
    } else {
        CheckOutcome::Failed { output: text }
    };

    Ok(CheckResult { name, outcome })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_skip_respects_each_flag() {
        let mut args = LintArgs::default();
        assert!(CHECKS.iter().all(|check| !should_skip(check.id, &args)));

        args.no_fmt = true;
        assert!(should_skip(CheckId::Fmt, &args));
        assert!(!should_skip(CheckId::Clippy, &args));

        args.no_clippy = true;
        assert!(should_skip(CheckId::Clippy, &args));

        args.no_test = true;
        assert!(should_skip(CheckId::Test, &args));
        assert!(!should_skip(CheckId::SmokeCodeOpt, &args));

        args.no_smoke = true;
        assert!(should_skip(CheckId::SmokeCodeOpt, &args));
        assert!(should_skip(CheckId::SmokeContentMod, &args));
    }

    #[test]
    fn test_fix_args_fmt_drops_check_flag() {
        let args = fix_args(CheckId::Fmt).unwrap();
        assert!(!args.contains(&"--check"));
    }

    #[test]
    fn test_fix_args_clippy_adds_fix_allow_dirty() {
        let args = fix_args(CheckId::Clippy).unwrap();
        assert!(args.contains(&"--fix"));
        assert!(args.contains(&"--allow-dirty"));
        assert!(args.contains(&"warnings"));
    }

    #[test]
    fn test_fix_args_leaves_tests_and_smoke_alone() {
        assert!(fix_args(CheckId::Test).is_none());
        assert!(fix_args(CheckId::SmokeCodeOpt).is_none());
        assert!(fix_args(CheckId::SmokeContentMod).is_none());
    }

    #[test]
    fn test_smoke_checks_use_dry_run() {
        for check in CHECKS
            .iter()
            .filter(|c| matches!(c.id, CheckId::SmokeCodeOpt | CheckId::SmokeContentMod))
        {
            assert!(check.args.contains(&"--dry-run"));
        }
    }

    #[test]
    fn test_format_log_entry() {
        let result = CheckResult {
            name: "cargo fmt --all --check".to_string(),
            outcome: CheckOutcome::Failed {
                output: "Diff in src/lib.rs\n".to_string(),
            },
        };
        let entry = format_log_entry(&result);
        assert!(entry.starts_with("=== cargo fmt --all --check ===\n"));
        assert!(entry.contains("Diff in src/lib.rs"));
    }

    #[test]
    fn test_check_display_name() {
        assert_eq!(
            check_display_name("cargo", &["run", "--bin", "code-opt"]),
            "cargo run --bin code-opt"
        );
    }
}
