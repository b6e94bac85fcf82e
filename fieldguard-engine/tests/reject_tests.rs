use fieldguard_engine::BindingErrors;
use fieldguard_engine::reject::{
    Rejection, reject_if_empty, reject_if_length_less_than, reject_if_length_more_than,
    reject_if_not_matches, reject_if_value_less_than, reject_if_value_more_than,
};
use fieldguard_model::{ErrorArg, FieldValue, NumericValue};
use fieldguard_numeric::CoercionError;
use pretty_assertions::assert_eq;

fn text(s: &str) -> String {
    s.to_string()
}

// ── Length ───────────────────────────────────────────────────────

#[test]
fn length_less_than_is_inclusive() {
    let mut errors = BindingErrors::new("form");
    let at_bound = text("abcde");
    reject_if_length_less_than(&mut errors, "f", Some(&at_bound), 5, Rejection::new("short")).unwrap();
    assert!(!errors.has_errors());

    let below = text("abcd");
    reject_if_length_less_than(&mut errors, "f", Some(&below), 5, Rejection::new("short")).unwrap();
    assert_eq!(errors.error_count(), 1);
}

#[test]
fn length_more_than_is_inclusive() {
    let mut errors = BindingErrors::new("form");
    let at_bound = text("abcde");
    reject_if_length_more_than(&mut errors, "f", Some(&at_bound), 5, Rejection::new("long")).unwrap();
    assert!(!errors.has_errors());

    let above = text("abcdef");
    reject_if_length_more_than(&mut errors, "f", Some(&above), 5, Rejection::new("long")).unwrap();
    assert_eq!(errors.error_count(), 1);
}

#[test]
fn unset_value_is_valid_for_every_helper() {
    let mut errors = BindingErrors::new("form");
    let bound = NumericValue::I32(0);
    reject_if_empty(&mut errors, "f", None, Rejection::new("e")).unwrap();
    reject_if_length_less_than(&mut errors, "f", None, 10, Rejection::new("e")).unwrap();
    reject_if_length_more_than(&mut errors, "f", None, 0, Rejection::new("e")).unwrap();
    reject_if_not_matches(&mut errors, "f", None, "x", Rejection::new("e")).unwrap();
    reject_if_value_less_than(&mut errors, "f", None, &bound, Rejection::new("e")).unwrap();
    reject_if_value_more_than(&mut errors, "f", None, &bound, Rejection::new("e")).unwrap();
    assert!(!errors.has_errors());
}

// ── Empty / pattern ──────────────────────────────────────────────

#[test]
fn empty_text_is_rejected() {
    let mut errors = BindingErrors::new("form");
    let empty = text("");
    reject_if_empty(&mut errors, "name", Some(&empty), Rejection::new("required")).unwrap();
    assert_eq!(errors.field_violation("name").unwrap().error_code, "required");
}

#[test]
fn not_matching_records_rejection_details() {
    let mut errors = BindingErrors::new("form");
    let value = text("abc");
    let rejection = Rejection::new("zip.invalid")
        .with_args(vec![ErrorArg::from("[0-9]{5}")])
        .with_default_message(Some("Not a zip code"));
    reject_if_not_matches(&mut errors, "zip", Some(&value), "[0-9]{5}", rejection).unwrap();

    let violation = errors.field_violation("zip").unwrap();
    assert_eq!(violation.args, vec![ErrorArg::Text("[0-9]{5}".to_string())]);
    assert_eq!(violation.default_message.as_deref(), Some("Not a zip code"));
}

#[test]
fn matching_value_is_accepted() {
    let mut errors = BindingErrors::new("form");
    let value = text("02134");
    reject_if_not_matches(&mut errors, "zip", Some(&value), "[0-9]{5}", Rejection::new("e")).unwrap();
    assert!(!errors.has_errors());
}

// ── Value ────────────────────────────────────────────────────────

#[test]
fn value_bounds_are_inclusive() {
    let mut errors = BindingErrors::new("form");
    let bound = NumericValue::I64(10);
    let equal = 10i64;
    reject_if_value_less_than(&mut errors, "n", Some(&equal), &bound, Rejection::new("min")).unwrap();
    reject_if_value_more_than(&mut errors, "n", Some(&equal), &bound, Rejection::new("max")).unwrap();
    assert!(!errors.has_errors());

    let below = 9i64;
    reject_if_value_less_than(&mut errors, "below", Some(&below), &bound, Rejection::new("min")).unwrap();
    let above = 11i64;
    reject_if_value_more_than(&mut errors, "above", Some(&above), &bound, Rejection::new("max")).unwrap();
    assert_eq!(errors.error_count(), 2);
}

#[test]
fn value_helper_rejects_non_numeric_field() {
    let mut errors = BindingErrors::new("form");
    let value: &dyn FieldValue = &true;
    let err = reject_if_value_less_than(
        &mut errors,
        "flag",
        Some(value),
        &NumericValue::I32(1),
        Rejection::new("min"),
    )
    .unwrap_err();
    assert_eq!(
        err,
        CoercionError::UnsupportedKind {
            type_name: "bool".to_string()
        }
    );
}
