//! Plain-text rendering of scenario reports

use std::fmt::Write;

use rbe_core::{PolicyDial, Preset, ScenarioReport, SweepPoint, clamp01};

/// Width of outcome bars, in cells
const BAR_WIDTH: usize = 20;

/// Format a [0, 1] fraction as a whole percentage
pub fn format_percent(value: f64) -> String {
    format!("{}%", (value * 100.0).round() as i64)
}

/// Format an hours-per-week value
pub fn format_hours(hours: u32) -> String {
    format!("{hours}h")
}

/// Render a horizontal bar for a [0, 1] fraction
pub fn render_bar(fraction: f64, width: usize) -> String {
    let filled = (clamp01(fraction) * width as f64).round() as usize;
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(width - filled));
    bar
}

fn outcome_row(out: &mut String, label: &str, fraction: f64, value: &str) {
    let _ = writeln!(
        out,
        "  {label:<12} {}  {value:>4}",
        render_bar(fraction, BAR_WIDTH)
    );
}

pub fn render_report(report: &ScenarioReport) -> String {
    let mut out = String::new();
    let class = report.classification;
    let outcomes = &report.outcomes;

    let _ = writeln!(out, "Scenario: {}", class.label());
    let _ = writeln!(out, "  {}", class.headline());
    let _ = writeln!(out, "  {}", class.narrative());
    out.push('\n');

    out.push_str("Dials\n");
    for dial in PolicyDial::ALL {
        let _ = writeln!(out, "  {:<18} {:>3}", dial.label(), report.inputs.get(dial));
    }
    out.push('\n');

    out.push_str("Outcomes\n");
    outcome_row(
        &mut out,
        "Inequality",
        outcomes.inequality,
        &format_percent(outcomes.inequality),
    );
    outcome_row(
        &mut out,
        "Work week",
        outcomes.work_week_fraction(),
        &format_hours(outcomes.avg_work_hours),
    );
    outcome_row(
        &mut out,
        "Emissions",
        outcomes.emissions_index,
        &format_percent(outcomes.emissions_index),
    );
    outcome_row(
        &mut out,
        "Security",
        outcomes.security_index,
        &format_percent(outcomes.security_index),
    );

    if let Some(last) = report.final_year() {
        let _ = writeln!(out, "\nTrajectory ({} years)", last.year);
        let _ = writeln!(
            out,
            "  {:>4}  {:>10}  {:>9}  {:>8}",
            "Year", "Inequality", "Emissions", "Security"
        );
        for record in &report.projection {
            let _ = writeln!(
                out,
                "  {:>4}  {:>10}  {:>9}  {:>8}",
                record.year,
                format_percent(record.inequality),
                format_percent(record.emissions),
                format_percent(record.security)
            );
        }
    }

    out
}

pub fn render_sweep(dial: PolicyDial, points: &[SweepPoint]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Sweep: {}", dial.label());
    let _ = writeln!(
        out,
        "  {:>5}  {:>10}  {:>9}  {:>9}  {:>8}  {}",
        "Value", "Inequality", "Work week", "Emissions", "Security", "Label"
    );
    for point in points {
        let outcomes = &point.outcomes;
        let _ = writeln!(
            out,
            "  {:>5}  {:>10}  {:>9}  {:>9}  {:>8}  {}",
            point.value,
            format_percent(outcomes.inequality),
            format_hours(outcomes.avg_work_hours),
            format_percent(outcomes.emissions_index),
            format_percent(outcomes.security_index),
            point.classification.label()
        );
    }
    out
}

pub fn render_presets(presets: &[Preset]) -> String {
    let mut out = String::new();
    for preset in presets {
        let inputs = preset.inputs;
        let _ = writeln!(
            out,
            "{:<16} {} ({}/{}/{}/{})\n  {}",
            preset.key,
            preset.name,
            inputs.profit_priority,
            inputs.commons_level,
            inputs.automation_level,
            inputs.eco_constraint,
            preset.description
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rbe_core::{PRESETS, PolicyInputs, sweep_dial};

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.79), "79%");
        assert_eq!(format_percent(0.104), "10%");
        assert_eq!(format_percent(0.0), "0%");
        assert_eq!(format_percent(1.0), "100%");
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(37), "37h");
    }

    #[test]
    fn test_render_bar() {
        assert_eq!(render_bar(0.5, 10), "█████░░░░░");
        assert_eq!(render_bar(0.0, 4), "░░░░");
        assert_eq!(render_bar(1.5, 4), "████");
    }

    #[test]
    fn test_render_report() {
        let report = ScenarioReport::build(PolicyInputs::new(20, 80, 70, 80), 5);
        let text = render_report(&report);

        assert!(text.starts_with("Scenario: RBE-leaning"));
        assert!(text.contains("Long game: Stability"));
        assert!(text.contains("Commons ownership"));
        assert!(text.contains("31h"));
        assert!(text.contains("Trajectory (5 years)"));

        let trajectory_rows = text
            .lines()
            .skip_while(|line| !line.contains("Year"))
            .skip(1)
            .count();
        assert_eq!(trajectory_rows, 6);
    }

    #[test]
    fn test_render_sweep() {
        let points = sweep_dial(&PolicyInputs::default(), PolicyDial::EcoConstraint, 3).unwrap();
        let text = render_sweep(PolicyDial::EcoConstraint, &points);

        assert!(text.starts_with("Sweep: Ecological limits"));
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn test_render_presets() {
        let text = render_presets(&PRESETS);
        assert!(text.contains("late-capitalism"));
        assert!(text.contains("Fresco-leaning RBE (20/80/70/80)"));
    }
}
