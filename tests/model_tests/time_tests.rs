//! Tests for Time formatting and parsing

use std::time::Duration;

use chubby::{ChubbyError, Time};

fn time(s: &str) -> Time {
    s.parse().unwrap()
}

// =============================================================================
// Display Tests
// =============================================================================

#[test]
fn test_display() {
    let cases = [
        (3600, "1:00:00"),
        (3723, "1:02:03"),
        (60, "1:00"),
        (119, "1:59"),
        (59, "0:59"),
        (0, "0:00"),
        (36000 + 59 * 60 + 59, "10:59:59"),
    ];

    for (secs, expected) in cases {
        assert_eq!(Time::from_secs(secs).to_string(), expected);
    }
}

#[test]
fn test_components() {
    let t = Time::from_secs(3723);

    assert_eq!(t.hour(), 1);
    assert_eq!(t.minute(), 2);
    assert_eq!(t.second(), 3);
    assert_eq!(t.as_secs(), 3723);
}

// =============================================================================
// Parse Tests
// =============================================================================

#[test]
fn test_parse_seconds_only() {
    assert_eq!(time("0"), Time::ZERO);
    assert_eq!(time("30"), Time::from_secs(30));
    assert_eq!(time("59"), Time::from_secs(59));
}

#[test]
fn test_parse_minutes_seconds() {
    assert_eq!(time("1:09"), Time::from_secs(69));
    assert_eq!(time("59:59"), Time::from_secs(3599));
}

#[test]
fn test_parse_hours() {
    assert_eq!(time("01:02:03"), Time::from_secs(3723));
    assert_eq!(time("00:00:00"), Time::ZERO);
    assert_eq!(time("100:00:00"), Time::from_secs(360_000));
}

#[test]
fn test_parse_display_output() {
    for secs in [0, 59, 60, 3599, 3600, 86_399] {
        let t = Time::from_secs(secs);
        assert_eq!(time(&t.to_string()), t);
    }
}

#[test]
fn test_parse_errors() {
    for input in ["", "FF", "1:", ":1", "-1", "1:2:3:4", "00:00:00:00", "1.5"] {
        let err = input.parse::<Time>().unwrap_err();
        assert!(
            matches!(err, ChubbyError::InvalidTime { .. }),
            "{:?} gave {:?}",
            input,
            err
        );
    }
}

#[test]
fn test_parse_out_of_range() {
    assert!("60".parse::<Time>().is_err());
    assert!("1:60".parse::<Time>().is_err());
    assert!("60:00".parse::<Time>().is_err());
    assert!("1:60:00".parse::<Time>().is_err());
}

#[test]
fn test_error_keeps_input() {
    match "1:60".parse::<Time>() {
        Err(ChubbyError::InvalidTime { input, reason }) => {
            assert_eq!(input, "1:60");
            assert!(reason.starts_with("seconds"));
        }
        other => panic!("unexpected result {:?}", other),
    }
}

// =============================================================================
// Conversion Tests
// =============================================================================

#[test]
fn test_from_integer() {
    assert_eq!(Time::try_from(90i64).unwrap(), Time::from_secs(90));
    assert!(Time::try_from(-1i64).is_err());
}

#[test]
fn test_duration_conversion() {
    let t = Time::from(Duration::from_millis(90_500));
    assert_eq!(t, Time::from_secs(90));
    assert_eq!(Duration::from(t), Duration::from_secs(90));
}
