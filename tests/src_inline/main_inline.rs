use super::*;

#[test]
fn test_parse_run_defaults() {
    let cli = Cli::try_parse_from(["kira-segeval", "run", "--data", "data"]).unwrap();
    let Command::Run(args) = cli.command else {
        panic!("expected run");
    };
    assert_eq!(args.data, PathBuf::from("data"));
    assert_eq!(args.gt, DEFAULT_GT_METHOD);
    assert!(args.methods.is_empty());
    assert_eq!(args.count, 20);
    assert_eq!(args.metric, ScoreMetric::F1);
    assert_eq!(args.zero_policy, ZeroDivisionPolicy::Fail);
    assert_eq!(args.format, ReportFormat::Text);

    let profile = build_profile(&args);
    assert_eq!(profile.alpha, 0.05);
    assert!(profile.validate().is_ok());
}

#[test]
fn test_parse_run_overrides() {
    let cli = Cli::try_parse_from([
        "kira-segeval",
        "-v",
        "run",
        "--data",
        "data",
        "--methods",
        "Results - 2004 Staal,Results - 2008 Soares",
        "--metric",
        "sensitivity",
        "--zero-policy",
        "perfect",
        "--alpha",
        "0.01",
        "--format",
        "json",
    ])
    .unwrap();
    assert_eq!(cli.verbose, 1);
    let Command::Run(args) = cli.command else {
        panic!("expected run");
    };
    assert_eq!(
        args.methods,
        vec![
            "Results - 2004 Staal".to_string(),
            "Results - 2008 Soares".to_string()
        ]
    );
    assert_eq!(args.metric, ScoreMetric::Sensitivity);
    assert_eq!(args.zero_policy, ZeroDivisionPolicy::Perfect);
    assert_eq!(args.alpha, 0.01);
    assert_eq!(args.format, ReportFormat::Json);
}

#[test]
fn test_parse_inspect_requires_method() {
    assert!(Cli::try_parse_from(["kira-segeval", "inspect", "--data", "d"]).is_err());
    let cli = Cli::try_parse_from([
        "kira-segeval",
        "inspect",
        "--data",
        "d",
        "--method",
        "Results - 2015 Chowdhury",
        "--index",
        "3",
    ])
    .unwrap();
    let Command::Inspect(args) = cli.command else {
        panic!("expected inspect");
    };
    assert_eq!(args.index, 3);
}

#[test]
fn test_invalid_alpha_rejected() {
    let cli = Cli::try_parse_from(["kira-segeval", "run", "--data", "d", "--alpha", "2"]).unwrap();
    let Command::Run(args) = cli.command else {
        panic!("expected run");
    };
    assert!(run_compare(&args).is_err());
}
