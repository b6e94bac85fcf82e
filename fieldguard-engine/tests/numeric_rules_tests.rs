mod common;

use bigdecimal::BigDecimal;
use common::{Form, codes, init_tracing};
use fieldguard_engine::{BindingErrors, ConfigurationError, Validator};
use fieldguard_model::{ErrorArg, NumericKind, NumericValue, Rule, RuleSet};
use fieldguard_numeric::CoercionError;
use num_bigint::BigInt;
use pretty_assertions::assert_eq;
use std::str::FromStr;

fn validate(rules: RuleSet, form: &Form) -> Result<BindingErrors, ConfigurationError> {
    init_tracing();
    let mut errors = BindingErrors::new(form.subject_type);
    Validator::new(rules).validate(form, &mut errors)?;
    Ok(errors)
}

// ── Integral kinds ───────────────────────────────────────────────

#[test]
fn small_integer_kinds() {
    let rules = RuleSet::builder()
        .rule("sensor", "offset", Rule::min_value("-128", NumericKind::I8))
        .rule("sensor", "channel", Rule::max_value("32767", NumericKind::I16))
        .build()
        .unwrap();
    let form = Form::new("sensor")
        .set("offset", i8::MIN)
        .set("channel", i16::MAX);
    assert!(!validate(rules, &form).unwrap().has_errors());
}

#[test]
fn wide_integer_bound() {
    let rules = RuleSet::builder()
        .rule("ledger", "balance", Rule::max_value("9223372036854775807", NumericKind::I64))
        .rule("ledger", "floor", Rule::min_value("-9223372036854775808", NumericKind::I64))
        .build()
        .unwrap();
    let form = Form::new("ledger")
        .set("balance", i64::MAX)
        .set("floor", i64::MIN);
    assert!(!validate(rules, &form).unwrap().has_errors());
}

#[test]
fn big_integer_beyond_i64() {
    let bound = "1234567890123456789012345678901234567890";
    let rules = RuleSet::builder()
        .rule("ledger", "total", Rule::max_value(bound, NumericKind::BigInteger))
        .build()
        .unwrap();

    let at_bound = Form::new("ledger").set("total", BigInt::from_str(bound).unwrap());
    assert!(!validate(rules.clone(), &at_bound).unwrap().has_errors());

    let above = Form::new("ledger").set("total", BigInt::from_str(bound).unwrap() + 1);
    let errors = validate(rules, &above).unwrap();
    assert_eq!(codes(&errors), vec!["ledger.total.maxValue"]);
    assert_eq!(
        errors.field_violation("total").unwrap().args,
        vec![ErrorArg::Number(NumericValue::BigInteger(
            BigInt::from_str(bound).unwrap()
        ))]
    );
}

// ── Fractional kinds ─────────────────────────────────────────────

#[test]
fn float_bounds() {
    let rules = RuleSet::builder()
        .rule("reading", "ratio", Rule::min_value("0.25", NumericKind::F32))
        .rule("reading", "level", Rule::max_value("1e3", NumericKind::F64))
        .build()
        .unwrap();
    let ok = Form::new("reading").set("ratio", 0.25f32).set("level", 1000.0f64);
    assert!(!validate(rules.clone(), &ok).unwrap().has_errors());

    let bad = Form::new("reading").set("ratio", 0.2f32).set("level", 1000.5f64);
    assert_eq!(
        codes(&validate(rules, &bad).unwrap()),
        vec!["reading.ratio.minValue", "reading.level.maxValue"]
    );
}

#[test]
fn big_decimal_compares_by_value() {
    let rules = RuleSet::builder()
        .rule("invoice", "amount", Rule::min_value("0.10", NumericKind::BigDecimal))
        .build()
        .unwrap();
    let equal_other_scale = Form::new("invoice").set("amount", BigDecimal::from_str("0.1000").unwrap());
    assert!(!validate(rules.clone(), &equal_other_scale).unwrap().has_errors());

    let below = Form::new("invoice").set("amount", BigDecimal::from_str("0.0999").unwrap());
    assert_eq!(
        codes(&validate(rules, &below).unwrap()),
        vec!["invoice.amount.minValue"]
    );
}

// ── Kind checks ──────────────────────────────────────────────────

#[test]
fn default_kind_is_i32() {
    let rules = RuleSet::from_json(
        r#"{ "subjects": { "order": { "quantity": [ { "kind": "min_value", "bound": "1" } ] } } }"#,
    )
    .unwrap();
    assert!(validate(rules.clone(), &Form::new("order").set("quantity", 1i32)).is_ok());

    let err = validate(rules, &Form::new("order").set("quantity", 1i64)).unwrap_err();
    assert!(matches!(
        err,
        ConfigurationError::Coercion {
            source: CoercionError::KindMismatch {
                bound: NumericKind::I32,
                field: NumericKind::I64,
            },
            ..
        }
    ));
}

#[test]
fn big_integer_field_with_decimal_rule() {
    let rules = RuleSet::builder()
        .rule("ledger", "total", Rule::max_value("10", NumericKind::BigDecimal))
        .build()
        .unwrap();
    let err = validate(rules, &Form::new("ledger").set("total", BigInt::from(3))).unwrap_err();
    assert_eq!(err.field(), Some("total"));
}
