use ritmo_core::{DurationValue, RitmoError};

#[test]
fn text_forms_convert_to_seconds() {
    let cases = [
        ("30s", 30.0),
        ("90sec", 90.0),
        ("45", 45.0),
        ("5min", 300.0),
        ("1.5min", 90.0),
        ("2hr", 7200.0),
        ("2h", 7200.0),
        ("1day", 86_400.0),
        (" 10 min ", 600.0),
    ];
    for (text, expected) in cases {
        assert_eq!(
            DurationValue::from(text).to_seconds().unwrap(),
            expected,
            "{text}"
        );
    }
}

#[test]
fn strict_conversion_rejects_non_durations() {
    for text in ["bogus", "min5", "5 parsecs", "", "-5s"] {
        let res = DurationValue::from(text).to_seconds();
        assert!(matches!(res, Err(RitmoError::InvalidArg(_))), "{text}");
    }
    assert!(DurationValue::Seconds(f64::NAN).to_seconds().is_err());
    assert!(DurationValue::Seconds(-1.0).to_seconds().is_err());
}

#[test]
fn fail_soft_conversion_defaults_to_zero() {
    assert_eq!(DurationValue::from("nonsense").to_seconds_or_zero(), 0.0);
    assert_eq!(DurationValue::Seconds(f64::INFINITY).to_seconds_or_zero(), 0.0);
    assert_eq!(DurationValue::from("15min").to_seconds_or_zero(), 900.0);
}

#[test]
fn untagged_serde_accepts_numbers_and_text() {
    let num: DurationValue = serde_json::from_str("90").unwrap();
    assert_eq!(num.to_seconds().unwrap(), 90.0);

    let text: DurationValue = serde_json::from_str("\"90s\"").unwrap();
    assert_eq!(text.to_seconds().unwrap(), 90.0);
}

#[test]
fn chrono_deltas_convert_directly() {
    let d = DurationValue::from(chrono::TimeDelta::minutes(5));
    assert_eq!(d.to_seconds().unwrap(), 300.0);
}
