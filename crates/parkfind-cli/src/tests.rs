use super::*;

#[test]
fn parses_nearest_with_defaults() {
    let cli = Cli::try_parse_from(["parkfind-cli", "nearest", "55.741834, 37.630808"])
        .expect("expected valid cli args");

    match cli.command {
        Commands::Nearest {
            coordinates,
            radius,
            limit,
        } => {
            assert_eq!(coordinates, "55.741834, 37.630808");
            assert_eq!(radius, None);
            assert_eq!(limit, None);
        }
        other => panic!("expected nearest, got {other:?}"),
    }
}

#[test]
fn parses_nearest_with_radius_and_limit() {
    let cli = Cli::try_parse_from([
        "parkfind-cli",
        "nearest",
        "55.7,37.6",
        "--radius",
        "1500",
        "--limit",
        "20",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Nearest {
            radius: Some(1500),
            limit: Some(20),
            ..
        }
    ));
}

#[test]
fn parses_lookup_command() {
    let cli =
        Cli::try_parse_from(["parkfind-cli", "lookup", "70000001"]).expect("expected valid cli args");

    assert!(matches!(cli.command, Commands::Lookup { ref id } if id == "70000001"));
}

#[test]
fn parses_occupancy_command() {
    let cli = Cli::try_parse_from([
        "parkfind-cli",
        "occupancy",
        "--cost",
        "150",
        "--distance",
        "2.5",
        "--spots",
        "40",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Commands::Occupancy {
            cost,
            distance,
            spots,
            hour,
        } => {
            assert!((cost - 150.0).abs() < f64::EPSILON);
            assert!((distance - 2.5).abs() < f64::EPSILON);
            assert_eq!(spots, 40);
            assert_eq!(hour, None);
        }
        other => panic!("expected occupancy, got {other:?}"),
    }
}

#[test]
fn occupancy_requires_spots() {
    let result = Cli::try_parse_from([
        "parkfind-cli",
        "occupancy",
        "--cost",
        "150",
        "--distance",
        "2.5",
    ]);
    assert!(result.is_err());
}

#[test]
fn missing_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["parkfind-cli"]).is_err());
}

#[test]
fn radius_must_be_numeric() {
    let result = Cli::try_parse_from(["parkfind-cli", "nearest", "55.7,37.6", "--radius", "far"]);
    assert!(result.is_err());
}

#[test]
fn occupancy_rejects_out_of_range_hour() {
    let err = occupancy::run_occupancy(100.0, 1.0, 10, Some(30)).expect_err("hour 30 is invalid");
    assert!(err.to_string().contains("hour"), "got: {err}");
}
