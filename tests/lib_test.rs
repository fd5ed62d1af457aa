//! Library integration tests.

use std::fs;

use framecheck::report::{Report, ReportFormat, ReportOptions};
use framecheck::scan::{scan_directory, ExtensionFilter, ScanOptions};
use framecheck::sequence::{analyze, compare, AnalyzeOptions, Grouping, SequenceKey};
use framecheck::FramecheckError;
use tempfile::TempDir;

#[test]
fn error_types_are_public() {
    let err = FramecheckError::ConfigValidationError {
        message: "map_columns must be at least 1".into(),
    };
    assert!(err.to_string().contains("map_columns"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> framecheck::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use framecheck::cli::{Cli, Commands};

    let cli = Cli::parse_from(["framecheck", "config", "--json"]);
    if let Some(Commands::Config(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Config command");
    }
}

#[test]
fn scenario_single_gap() {
    let r = analyze(
        &["shot_001.png", "shot_002.png", "shot_004.png"],
        &AnalyzeOptions::default(),
    );
    assert_eq!(r.prefix(), Some("shot_"));
    assert_eq!(r.extension(), Some(".png"));
    assert_eq!(r.range(), Some((1, 4)));
    assert_eq!(r.missing_frames(), &[3]);
}

#[test]
fn scenario_complete() {
    let r = analyze(&["a_01.jpg", "a_02.jpg", "a_03.jpg"], &AnalyzeOptions::default());
    assert!(r.missing_frames().is_empty());
    assert!(r.is_complete());
}

#[test]
fn scenario_empty() {
    let names: [&str; 0] = [];
    let r = analyze(&names, &AnalyzeOptions::default());
    assert!(r.is_empty());
    assert!(r.missing_frames().is_empty());
    assert!(r.present_frames().is_empty());
}

#[test]
fn scenario_dominant_group() {
    let r = analyze(&["x_1.tga", "x_2.tga", "y_1.tga"], &AnalyzeOptions::default());
    assert_eq!(r.prefix(), Some("x_"));
    assert_eq!(r.unrecognized(), &["y_1.tga".to_string()]);
    assert_eq!(r.range(), Some((1, 2)));
    assert!(r.missing_frames().is_empty());
}

#[test]
fn tie_is_reported_not_failed() {
    let r = analyze(&["b_7.exr", "a_7.exr"], &AnalyzeOptions::default());
    assert_eq!(r.prefix(), Some("a_"));
    assert_eq!(r.ambiguous_with(), &[SequenceKey::new("b_", ".exr")]);
}

#[test]
fn prefix_may_contain_digits() {
    let r = analyze(
        &["shot_010_v2_0005.exr", "shot_010_v2_0007.exr"],
        &AnalyzeOptions::default(),
    );
    assert_eq!(r.prefix(), Some("shot_010_v2_"));
    assert_eq!(r.missing_frames(), &[6]);
    assert_eq!(r.frame_name(6).as_deref(), Some("shot_010_v2_0006.exr"));
}

#[test]
fn directory_scan_and_report() {
    let temp = TempDir::new().unwrap();
    for n in [1001u64, 1002, 1005, 1006, 1010] {
        fs::write(temp.path().join(format!("beauty.{:04}.exr", n)), b"").unwrap();
    }
    fs::write(temp.path().join("render.log"), b"").unwrap();

    let options = ScanOptions {
        extensions: ExtensionFilter::only(&["exr"]),
        grouping: Grouping::Dominant,
    };
    let result = scan_directory(temp.path(), &options).unwrap();
    assert_eq!(result.missing_frames(), &[1003, 1004, 1007, 1008, 1009]);

    let report = Report::new(temp.path(), result);
    let text = ReportFormat::Text.render(&report, &ReportOptions::default());
    assert!(text.contains("Sequence:      beauty.####.exr"));
    assert!(text.contains("  1003-1004\n  1007-1009\n"));
}

#[test]
fn comparing_two_scans() {
    let a = analyze(&["a_1.png", "a_2.png"], &AnalyzeOptions::default());
    let b = analyze(&["b_2.png", "b_3.png"], &AnalyzeOptions::default());
    let cmp = compare(&a, &b);
    assert_eq!(cmp.common, 1);
    assert_eq!(cmp.only_in_a, vec![1]);
    assert_eq!(cmp.only_in_b, vec![3]);
    assert!(!cmp.is_identical());
}
