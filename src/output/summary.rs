use std::fmt::Write;

use bddgen::generator::GenerationReport;
use bddgen::scenarios::ScenarioBlock;
use comfy_table::{Cell, Table};

use super::styling::{muted, pending, scenario_label, section_heading, succeeded};
use super::tables::{check_cell, color_coded_count_cell, create_table, cyan_header};

pub const NO_HAPPY_PATHS: &str = "No happy-path scenarios matched the selection rules.";

fn add_section_header(output: &mut String, emoji: &str, title: &str) {
    let _ = writeln!(output, "{}", section_heading(emoji, title));
}

fn push_block(output: &mut String, label: String, block: &ScenarioBlock) {
    let _ = writeln!(output, "  {}", scenario_label(label));
    for line in block.lines() {
        let _ = writeln!(output, "    {line}");
    }
    output.push('\n');
}

/// One row per block: its title line and which filters it passed.
fn overview_table(report: &GenerationReport) -> Table {
    let mut table = create_table();
    table.set_header(cyan_header(&["#", "Scenario", "Valid", "Happy"]));
    for (i, block) in report.all.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(block.title()),
            check_cell(report.valid.contains(block)),
            check_cell(report.happy.contains(block)),
        ]);
    }
    table
}

/// Renders a human-readable report of one generation run.
///
/// Sections, in order:
/// - Raw Gherkin: the trimmed backend text
/// - Validation summary: total / valid / happy counts and the action check
/// - All scenarios: an overview table, then every block, numbered
/// - Happy paths: the blocks selected for automation, or a notice when none
pub fn render_report(report: &GenerationReport) -> String {
    let mut output = String::new();

    add_section_header(&mut output, "📝", "Raw Gherkin");
    if report.raw.is_empty() {
        let _ = writeln!(output, "  {}\n", muted("(empty response)"));
    } else {
        for line in report.raw.lines() {
            let _ = writeln!(output, "  {}", muted(line));
        }
        output.push('\n');
    }

    add_section_header(&mut output, "📊", "Validation Summary");
    let summary = &report.summary;
    let mut table = create_table();
    table.set_header(cyan_header(&[
        "Total",
        "Valid",
        "Happy",
        "Has required actions",
    ]));
    table.add_row(vec![
        Cell::new(summary.total),
        color_coded_count_cell(summary.valid, summary.total),
        color_coded_count_cell(summary.happy, summary.valid),
        check_cell(summary.has_required_actions),
    ]);
    let _ = writeln!(output, "{table}");
    if let Some(backend) = &report.backend {
        let _ = writeln!(output, "  {} {}", muted("Backend:"), scenario_label(backend));
    }
    let _ = writeln!(
        output,
        "  {} {}\n",
        muted("Generated:"),
        muted(report.generated_at.format("%Y-%m-%d %H:%M UTC"))
    );

    add_section_header(&mut output, "📋", "All Scenarios");
    if report.all.is_empty() {
        let _ = writeln!(output, "  {}\n", pending("No scenarios found."));
    } else {
        let _ = writeln!(output, "{}", overview_table(report));
    }
    for (i, block) in report.all.iter().enumerate() {
        push_block(&mut output, format!("Scenario {}", i + 1), block);
    }

    add_section_header(&mut output, "✅", "Selected Happy-Path Scenarios");
    if report.happy.is_empty() {
        let _ = writeln!(output, "  {}", pending(NO_HAPPY_PATHS));
    } else {
        for (i, block) in report.happy.iter().enumerate() {
            push_block(&mut output, format!("Happy path {}", i + 1), block);
        }
        let _ = writeln!(
            output,
            "  {}",
            succeeded(format!(
                "{} of {} scenarios selected for automation",
                summary.happy, summary.total
            ))
        );
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use bddgen::generator::{analyze, GenerationSettings};

    const COMPLETION: &str = "Feature: Login
Scenario: Successful login
  Given a valid user
  When they submit valid credentials
  Then they see a success message
Scenario: Invalid login
  Given a user
  When they submit";

    #[test]
    fn test_render_report_with_happy_paths() {
        let report = analyze(COMPLETION, &GenerationSettings::default());
        let output = console::strip_ansi_codes(&render_report(&report)).to_string();

        assert!(output.contains("Raw Gherkin"));
        assert!(output.contains("Validation Summary"));
        assert!(output.contains("Scenario 1"));
        assert!(output.contains("Scenario 3"));
        assert!(output.contains("Happy path 1"));
        assert!(!output.contains("Happy path 2"));
        assert!(output.contains("1 of 3 scenarios selected"));
        assert!(!output.contains(NO_HAPPY_PATHS));
    }

    #[test]
    fn test_overview_lists_block_titles() {
        let report = analyze(COMPLETION, &GenerationSettings::default());
        let output = console::strip_ansi_codes(&render_report(&report)).to_string();

        let overview: Vec<&str> = output
            .lines()
            .filter(|l| l.contains("Feature: Login") || l.contains("Scenario: "))
            .filter(|l| l.contains("│"))
            .collect();
        assert_eq!(overview.len(), 3);
        assert!(overview[0].contains("Feature: Login") && overview[0].contains("no"));
        assert!(overview[1].contains("Scenario: Successful login"));
        assert_eq!(overview[1].matches("yes").count(), 2);
        assert!(overview[2].contains("Scenario: Invalid login"));
        assert!(!overview[2].contains("yes"));
    }

    #[test]
    fn test_render_report_without_happy_paths() {
        let report = analyze(
            "Scenario: Broken\n  Given something",
            &GenerationSettings::default(),
        );
        let output = console::strip_ansi_codes(&render_report(&report)).to_string();

        assert!(output.contains("Scenario 1"));
        assert!(output.contains(NO_HAPPY_PATHS));
    }

    #[test]
    fn test_render_report_empty_response() {
        let report = analyze("", &GenerationSettings::default());
        let output = console::strip_ansi_codes(&render_report(&report)).to_string();

        assert!(output.contains("(empty response)"));
        assert!(output.contains("No scenarios found."));
        assert!(output.contains(NO_HAPPY_PATHS));
    }
}
