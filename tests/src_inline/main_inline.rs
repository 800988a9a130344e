use super::*;

#[test]
fn test_no_subcommand_means_gui() {
    let cli = Cli::try_parse_from(["kira-metarisk"]).unwrap();
    assert!(cli.command.is_none());
    assert!(!cli.verbose);
}

#[test]
fn test_score_defaults_match_form() {
    let cli = Cli::try_parse_from(["kira-metarisk", "score"]).unwrap();
    let Some(Command::Score(args)) = cli.command else {
        panic!("expected score");
    };
    assert_eq!(
        args.values(),
        [55.0, 2.0, 2.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0]
    );
    assert_eq!(args.format, OutputFormat::Text);
    assert!(args.out.is_none());
}

#[test]
fn test_score_flags() {
    let cli = Cli::try_parse_from([
        "kira-metarisk",
        "score",
        "--age",
        "70",
        "--tumor-cm",
        "6",
        "--lymph-nodes",
        "-1",
        "--er",
        "0",
        "--format",
        "json",
        "--out",
        "out",
        "--model",
        "profile.json",
    ])
    .unwrap();
    assert_eq!(cli.model, Some(PathBuf::from("profile.json")));
    let Some(Command::Score(args)) = cli.command else {
        panic!("expected score");
    };
    assert_eq!(args.age, 70.0);
    assert_eq!(args.tumor_cm, 6.0);
    assert_eq!(args.lymph_nodes, -1.0);
    assert_eq!(args.er, 0.0);
    assert_eq!(args.format, OutputFormat::Json);
    assert_eq!(args.out, Some(PathBuf::from("out")));
}

#[test]
fn test_non_numeric_flag_rejected() {
    assert!(Cli::try_parse_from(["kira-metarisk", "score", "--age", "old"]).is_err());
}

#[test]
fn test_nan_flag_rejected_at_validation() {
    let cli = Cli::try_parse_from(["kira-metarisk", "score", "--grade", "NaN"]).unwrap();
    let Some(Command::Score(args)) = cli.command else {
        panic!("expected score");
    };
    let err = AppError::from(args.clinical_input().unwrap_err());
    assert_eq!(err.to_string(), "Grade (1-3): value must be finite");
}

#[test]
fn test_load_profile_default() {
    let profile = load_profile(None).unwrap();
    assert_eq!(profile, ModelProfile::default_v1());
}

#[test]
fn test_output_format_maps_to_report_format() {
    assert_eq!(ReportFormat::from(OutputFormat::Text), ReportFormat::Text);
    assert_eq!(ReportFormat::from(OutputFormat::Json), ReportFormat::Json);
}

#[test]
fn test_score_with_model_file_writes_reports() {
    let dir = std::env::temp_dir().join(format!("kira_metarisk_main_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let model_path = dir.join("profile.json");
    std::fs::write(
        &model_path,
        r#"{"name":"strict","thresholds":{"high":0.6,"medium":0.35}}"#,
    )
    .unwrap();
    let out_dir = dir.join("out");

    let profile = load_profile(Some(&model_path)).unwrap();
    assert_eq!(profile.name, "strict");

    let cli = Cli::try_parse_from([
        "kira-metarisk".to_string(),
        "score".to_string(),
        "--out".to_string(),
        out_dir.display().to_string(),
    ])
    .unwrap();
    let Some(Command::Score(args)) = cli.command else {
        panic!("expected score");
    };
    run_score(&args, &profile).unwrap();

    let summary = std::fs::read_to_string(out_dir.join("summary.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&summary).unwrap();
    assert_eq!(json["model"]["name"], "strict");
    // p ~ 0.3966 sits above the lowered medium threshold.
    assert_eq!(json["category"], "medium");
    let report = std::fs::read_to_string(out_dir.join("metarisk_report.txt")).unwrap();
    assert!(report.contains("Profile: strict"));
}

#[test]
fn test_load_profile_rejects_invalid_file() {
    let dir = std::env::temp_dir().join(format!("kira_metarisk_bad_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let model_path = dir.join("profile.json");
    std::fs::write(&model_path, r#"{"thresholds":{"high":0.3,"medium":0.6}}"#).unwrap();
    let err = AppError::from(load_profile(Some(&model_path)).unwrap_err());
    assert!(err.to_string().starts_with("invalid model profile"));
}
