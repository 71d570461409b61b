use rbuildtimes::core::duration::normalize;
use rbuildtimes::errors::AppError;

fn assert_invalid(token: &str) {
    match normalize(token) {
        Err(AppError::InvalidDuration(t)) => assert_eq!(t, token),
        other => panic!("expected InvalidDuration for {token:?}, got {other:?}"),
    }
}

#[test]
fn test_seconds() {
    assert_eq!(normalize("5.990 s").unwrap(), 5.990);
    assert_eq!(normalize("12 s").unwrap(), 12.0);
    assert_eq!(normalize("0.001 s").unwrap(), 0.001);
}

#[test]
fn test_compound_minutes() {
    assert_eq!(normalize("01:50 min").unwrap(), 110.0);
    assert_eq!(normalize("1:05.5 min").unwrap(), 65.5);
    assert_eq!(normalize("10:00 min").unwrap(), 600.0);
}

#[test]
fn test_fractional_minutes() {
    assert_eq!(normalize("1.5 min").unwrap(), 90.0);
    assert_eq!(normalize("2 min").unwrap(), 120.0);
}

#[test]
fn test_whitespace_is_optional_and_trimmed() {
    assert_eq!(normalize("5.990s").unwrap(), 5.990);
    assert_eq!(normalize("01:50min").unwrap(), 110.0);
    assert_eq!(normalize("  5.419 s  ").unwrap(), 5.419);
    assert_eq!(normalize("3\ts").unwrap(), 3.0);
}

#[test]
fn test_seconds_with_minutes_prefix_rejected() {
    assert_invalid("1:5.990 s");
    assert_invalid("00:05 s");
}

#[test]
fn test_garbage_rejected() {
    assert_invalid("abc");
    assert_invalid("");
    assert_invalid("   ");
    assert_invalid("5.990");
    assert_invalid("5.990 sec");
    assert_invalid("5.990 s extra");
    assert_invalid("x5 s");
    assert_invalid("1.5.2 min");
    assert_invalid("1:2:3 min");
    assert_invalid("1. s");
    assert_invalid(".5 s");
    assert_invalid("-1 s");
    assert_invalid("1,5 min");
    assert_invalid("01-50 min");
}

#[test]
fn test_deterministic() {
    for token in ["5.990 s", "01:50 min", "1.5 min"] {
        assert_eq!(normalize(token).unwrap(), normalize(token).unwrap());
        assert!(normalize(token).unwrap() >= 0.0);
    }
}

#[test]
fn test_overflowing_values_rejected() {
    let huge = "9".repeat(400);

    assert_invalid(&format!("{huge} s"));
    assert_invalid(&format!("{huge} min"));
    assert_invalid(&format!("{huge}:05 min"));
    assert_invalid(&format!("01:{huge} min"));

    // large but finite values still go through
    assert_eq!(normalize("100000:00 min").unwrap(), 6_000_000.0);
}
