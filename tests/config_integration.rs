use std::path::PathBuf;

use lineleap::config::{ConfigFlags, LineNumbers, load_config_flags, parse_flag_tokens};

#[test]
fn test_config_file_parsing_ignores_comments_and_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".lineleaprc");
    let content = r"
# comment
--watch

--line-numbers relative

--log-file=leap.log
";
    std::fs::write(&path, content).unwrap();

    let flags = load_config_flags(&path).unwrap();
    assert!(flags.watch);
    assert_eq!(flags.line_numbers, Some(LineNumbers::Relative));
    assert_eq!(flags.log_file, Some(PathBuf::from("leap.log")));
}

#[test]
fn test_cli_flags_override_file_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".lineleaprc");
    let content = "--watch\n--line-numbers off\n--log-file file.log\n";
    std::fs::write(&path, content).unwrap();

    let file_flags = load_config_flags(&path).unwrap();
    let cli_args = vec![
        "lineleap".to_string(),
        "--line-numbers".to_string(),
        "relative".to_string(),
    ];
    let cli_flags = parse_flag_tokens(&cli_args);

    let effective = file_flags.union(&cli_flags);
    assert!(effective.watch, "file flags should remain enabled");
    assert_eq!(
        effective.line_numbers,
        Some(LineNumbers::Relative),
        "cli should override line-number mode"
    );
    assert_eq!(
        effective.log_file,
        Some(PathBuf::from("file.log")),
        "file config should be preserved when CLI does not override"
    );
}

#[test]
fn test_parse_flag_tokens_handles_equals_syntax() {
    let args = vec![
        "lineleap".to_string(),
        "--line-numbers=off".to_string(),
        "--log-file=leap.log".to_string(),
    ];
    let flags = parse_flag_tokens(&args);
    assert_eq!(flags.line_numbers, Some(LineNumbers::Off));
    assert_eq!(flags.log_file, Some(PathBuf::from("leap.log")));
}

#[test]
fn test_config_union_merges_booleans() {
    let file = ConfigFlags {
        watch: true,
        ..ConfigFlags::default()
    };
    let cli = ConfigFlags {
        line_numbers: Some(LineNumbers::Absolute),
        ..ConfigFlags::default()
    };
    let merged = file.union(&cli);
    assert!(merged.watch);
    assert_eq!(merged.line_numbers, Some(LineNumbers::Absolute));
}
