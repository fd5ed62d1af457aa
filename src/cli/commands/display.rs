//! Shared report rendering for `check` and `watch`.

use crate::report::{CoverageMap, Report, ReportOptions};
use crate::ui::UserInterface;

/// Show a scan report through the UI.
///
/// Fields, map and hints only appear in normal and verbose mode; the
/// closing success or warning line is shown unless output is silent.
pub fn show_report(
    ui: &mut dyn UserInterface,
    report: &Report,
    options: &ReportOptions,
    show_map: bool,
) {
    let result = &report.result;

    ui.show_header("Render Check Summary");
    ui.show_field("Folder", &report.folder.display().to_string());

    if result.is_empty() {
        ui.warning("No frame sequence found");
        if !result.unrecognized().is_empty() {
            ui.show_hint(&format!(
                "{} files did not form a sequence; try --any-ext or --loose",
                result.unrecognized().len()
            ));
        }
        show_ignored(ui, report);
        return;
    }

    if result.is_ambiguous() {
        let others: Vec<String> = result
            .ambiguous_with()
            .iter()
            .map(|k| k.to_string())
            .collect();
        ui.warning(&format!(
            "{} other sequence(s) have as many frames; checking {} (also matched {})",
            others.len(),
            report.sequence_label(),
            others.join(", ")
        ));
    }

    if result.is_range_too_large() {
        ui.warning(&format!(
            "Frame range {} is too wide to list every missing frame",
            report.range_label()
        ));
    }

    ui.show_field("Sequence", &report.sequence_label());
    ui.show_field("Frame range", &report.range_label());
    ui.show_field(
        "Frames found",
        &format!(
            "{} / {} ({:.2}%)",
            result.frame_count(),
            result.expected_count(),
            result.completeness()
        ),
    );
    ui.show_field("Missing", &result.missing_count().to_string());

    let blocks = result.missing_blocks();
    if !blocks.is_empty() {
        let formatted: Vec<String> = blocks.iter().map(|b| b.format(result.padding())).collect();
        ui.show_field("Missing blocks", &formatted.join(", "));
        ui.show_field(
            "Missing list",
            &report.missing_list(options.missing_list_limit),
        );
    }

    if show_map {
        if let Some(map) = CoverageMap::build(result, options.map_columns) {
            ui.show_coverage(&map);
        }
    }

    show_ignored(ui, report);
    ui.show_field("Checked", &report.checked_at_label());

    if result.is_complete() {
        ui.success(&format!(
            "All frames complete ({} frames)",
            result.frame_count()
        ));
    } else {
        ui.warning(&format!(
            "{} frames missing in {} block(s)",
            result.missing_count(),
            blocks.len()
        ));
    }
}

fn show_ignored(ui: &mut dyn UserInterface, report: &Report) {
    let ignored = report.result.unrecognized();
    if ignored.is_empty() {
        return;
    }
    ui.show_field("Ignored files", &ignored.len().to_string());
    if ui.output_mode().shows_details() {
        for name in ignored {
            ui.message(&format!("  {}", name));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{analyze, AnalyzeOptions};
    use crate::ui::{MockUI, OutputMode};
    use std::path::Path;

    fn report(names: &[&str]) -> Report {
        Report::new(
            Path::new("/renders/shot_010"),
            analyze(names, &AnalyzeOptions::default()),
        )
    }

    #[test]
    fn gap_is_shown_as_fields_and_warning() {
        let mut ui = MockUI::new();
        let r = report(&["shot_001.png", "shot_002.png", "shot_004.png"]);

        show_report(&mut ui, &r, &ReportOptions::default(), false);

        assert_eq!(ui.headers(), &["Render Check Summary".to_string()]);
        assert_eq!(ui.field("Sequence"), Some("shot_###.png"));
        assert_eq!(ui.field("Frame range"), Some("001 - 004"));
        assert_eq!(ui.field("Frames found"), Some("3 / 4 (75.00%)"));
        assert_eq!(ui.field("Missing"), Some("1"));
        assert_eq!(ui.field("Missing blocks"), Some("003"));
        assert!(ui.has_warning("1 frames missing in 1 block(s)"));
        assert!(ui.coverage_maps().is_empty());
    }

    #[test]
    fn complete_sequence_is_a_success() {
        let mut ui = MockUI::new();
        let r = report(&["a_01.jpg", "a_02.jpg", "a_03.jpg"]);

        show_report(&mut ui, &r, &ReportOptions::default(), false);

        assert!(ui.has_success("All frames complete (3 frames)"));
        assert_eq!(ui.field("Missing blocks"), None);
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn empty_folder_warns() {
        let mut ui = MockUI::new();
        show_report(&mut ui, &report(&[]), &ReportOptions::default(), true);

        assert!(ui.has_warning("No frame sequence found"));
        assert_eq!(ui.field("Sequence"), None);
        assert!(ui.hints().is_empty());
    }

    #[test]
    fn unnumbered_files_suggest_options() {
        let mut ui = MockUI::new();
        show_report(
            &mut ui,
            &report(&["notes.txt", "README"]),
            &ReportOptions::default(),
            false,
        );
        assert!(ui.has_hint("--loose"));
        assert_eq!(ui.field("Ignored files"), Some("2"));
    }

    #[test]
    fn ambiguity_is_a_warning() {
        let mut ui = MockUI::new();
        let r = report(&["a_1.png", "a_2.png", "b_1.png", "b_2.png"]);

        show_report(&mut ui, &r, &ReportOptions::default(), false);

        assert!(ui.has_warning("also matched b_#.png"));
        assert!(ui.has_success("All frames complete"));
    }

    #[test]
    fn stray_high_frame_is_summarized() {
        let mut ui = MockUI::new();
        let r = report(&["render_1.png", "render_2.png", "render_20261016123000.png"]);

        show_report(&mut ui, &r, &ReportOptions::default(), true);

        assert!(ui.has_warning("too wide to list"));
        assert_eq!(ui.field("Missing"), Some("20261016122997"));
        assert_eq!(ui.field("Missing blocks"), Some("00000000000003-20261016122999"));
        assert_eq!(ui.coverage_maps().len(), 1);
    }

    #[test]
    fn map_is_shown_on_request() {
        let mut ui = MockUI::new();
        let r = report(&["f_1.exr", "f_3.exr"]);

        show_report(&mut ui, &r, &ReportOptions::default(), true);

        assert_eq!(ui.coverage_maps(), &[vec!["█░█".to_string()]]);
    }

    #[test]
    fn verbose_lists_ignored_names() {
        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        let r = report(&["x_1.tga", "x_2.tga", "y_1.tga"]);

        show_report(&mut ui, &r, &ReportOptions::default(), false);

        assert_eq!(ui.field("Ignored files"), Some("1"));
        assert!(ui.has_message("y_1.tga"));
    }

    #[test]
    fn normal_mode_only_counts_ignored_names() {
        let mut ui = MockUI::new();
        let r = report(&["x_1.tga", "x_2.tga", "y_1.tga"]);

        show_report(&mut ui, &r, &ReportOptions::default(), false);

        assert!(!ui.has_message("y_1.tga"));
    }

    #[test]
    fn missing_list_respects_limit() {
        let mut ui = MockUI::new();
        let r = report(&["s_1.png", "s_5.png"]);
        let options = ReportOptions {
            missing_list_limit: 2,
            ..Default::default()
        };

        show_report(&mut ui, &r, &options, false);

        assert_eq!(ui.field("Missing list"), Some("2, 3 ... total 3"));
    }
}
