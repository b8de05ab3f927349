//! Terminal output for the command line front end.

use console::style;

use crate::report::DecisionReport;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Human readable one-line summary of a decision.
pub fn format_decision(report: &DecisionReport) -> String {
    let verdict = if report.update {
        style("update").green().bold().to_string()
    } else {
        style("keep").yellow().bold().to_string()
    };

    format!(
        "{}: {} -> {} (policy: {})",
        verdict, report.current, report.new, report.policy
    )
}

/// Print the decision summary to stdout.
pub fn display_decision(report: &DecisionReport) {
    println!("{}", format_decision(report));
}

/// Display the policy type names accepted in configuration files.
pub fn display_policy_types(names: &[&str]) {
    println!("{}", style("Policy types:").bold());
    for name in names {
        println!("  - {}", name);
    }
}
