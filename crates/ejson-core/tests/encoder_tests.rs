use chrono::{Duration, TimeZone, Utc};
use ejson_core::{stringify, Value};
use num_bigint::BigInt;

// ============================================================================
// Scalars
// ============================================================================

#[test]
fn renders_null() {
    assert_eq!(stringify(&Value::Null), "null");
}

#[test]
fn renders_undefined() {
    assert_eq!(stringify(&Value::Undefined), "undefined");
}

#[test]
fn renders_booleans() {
    assert_eq!(stringify(&Value::Bool(true)), "true");
    assert_eq!(stringify(&Value::Bool(false)), "false");
}

#[test]
fn whole_floats_render_without_fraction() {
    assert_eq!(stringify(&Value::Number(42.0)), "42");
    assert_eq!(stringify(&Value::Number(-7.0)), "-7");
}

#[test]
fn fractional_floats_render_shortest() {
    assert_eq!(stringify(&Value::Number(3.14)), "3.14");
    assert_eq!(stringify(&Value::Number(0.1)), "0.1");
}

#[test]
fn negative_zero_normalizes() {
    assert_eq!(stringify(&Value::Number(-0.0)), "0");
    assert_eq!(stringify(&Value::Number(0.0)), "0");
}

#[test]
fn non_finite_floats_render_as_literals() {
    assert_eq!(stringify(&Value::Number(f64::NAN)), "NaN");
    assert_eq!(stringify(&Value::Number(f64::INFINITY)), "Infinity");
    assert_eq!(stringify(&Value::Number(f64::NEG_INFINITY)), "-Infinity");
}

#[test]
fn max_safe_whole_float_renders_as_digits() {
    assert_eq!(
        stringify(&Value::Number(9007199254740991.0)),
        "9007199254740991"
    );
}

#[test]
fn whole_floats_beyond_safe_range_use_exponent_form() {
    // A digit-run rendering would read back as a big integer.
    assert_eq!(
        stringify(&Value::Number(9007199254740992.0)),
        "9.007199254740992e15"
    );
    assert_eq!(stringify(&Value::Number(1e300)), "1e300");
    assert_eq!(stringify(&Value::Number(-1e300)), "-1e300");
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn strings_are_quoted() {
    assert_eq!(
        stringify(&Value::String("hello world".to_string())),
        r#""hello world""#
    );
}

#[test]
fn escapes_the_seven_character_set() {
    let value = Value::String("q:\" b:\\ nl:\n tab:\t cr:\r bs:\u{8} ff:\u{c}".to_string());
    assert_eq!(
        stringify(&value),
        r#""q:\" b:\\ nl:\n tab:\t cr:\r bs:\b ff:\f""#
    );
}

#[test]
fn forward_slash_is_not_escaped() {
    assert_eq!(stringify(&Value::String("a/b".to_string())), r#""a/b""#);
}

#[test]
fn other_control_characters_pass_through_raw() {
    assert_eq!(stringify(&Value::String("\u{1}".to_string())), "\"\u{1}\"");
}

#[test]
fn unicode_passes_through_raw() {
    assert_eq!(
        stringify(&Value::String("héllo 😀".to_string())),
        "\"héllo 😀\""
    );
}

// ============================================================================
// Big Integers
// ============================================================================

#[test]
fn bigints_render_with_suffix() {
    assert_eq!(stringify(&Value::BigInt(BigInt::from(123))), "123n");
    assert_eq!(stringify(&Value::BigInt(BigInt::from(-5))), "-5n");
}

#[test]
fn huge_bigints_render_every_digit() {
    let n = BigInt::parse_bytes(b"123456789012345678901234567890", 10).unwrap();
    assert_eq!(
        stringify(&Value::BigInt(n)),
        "123456789012345678901234567890n"
    );
}

// ============================================================================
// Timestamps
// ============================================================================

#[test]
fn dates_render_as_quoted_iso_with_millis() {
    let date = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
    assert_eq!(
        stringify(&Value::Date(date)),
        r#""2024-01-15T10:30:00.000Z""#
    );
}

#[test]
fn sub_millisecond_precision_truncates() {
    let date =
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap() + Duration::microseconds(123_456);
    assert_eq!(
        stringify(&Value::Date(date)),
        r#""2024-01-15T10:30:00.123Z""#
    );
}

// ============================================================================
// One-Way Forms
// ============================================================================

#[test]
fn symbols_render_with_description() {
    assert_eq!(stringify(&Value::Symbol("id".to_string())), "Symbol(id)");
    assert_eq!(stringify(&Value::Symbol(String::new())), "Symbol()");
}

#[test]
fn functions_render_verbatim() {
    let source = "function add(a, b) { return a + b; }";
    assert_eq!(stringify(&Value::Function(source.to_string())), source);
}

#[test]
fn arrow_functions_render_verbatim() {
    assert_eq!(
        stringify(&Value::Function("(x) => x * 2".to_string())),
        "(x) => x * 2"
    );
}

// ============================================================================
// Containers
// ============================================================================

#[test]
fn renders_empty_containers() {
    assert_eq!(stringify(&Value::Array(vec![])), "[]");
    assert_eq!(stringify(&Value::Object(vec![])), "{}");
}

#[test]
fn arrays_join_with_commas() {
    let value = Value::Array(vec![
        Value::Number(1.0),
        Value::String("two".to_string()),
        Value::Bool(true),
    ]);
    assert_eq!(stringify(&value), r#"[1,"two",true]"#);
}

#[test]
fn nested_arrays_render() {
    let value = Value::Array(vec![Value::Array(vec![Value::Number(1.0)]), Value::Array(vec![])]);
    assert_eq!(stringify(&value), "[[1],[]]");
}

#[test]
fn one_way_forms_render_inside_arrays() {
    let value = Value::Array(vec![Value::Undefined, Value::Number(f64::NAN)]);
    assert_eq!(stringify(&value), "[undefined,NaN]");
}

#[test]
fn objects_render_in_insertion_order() {
    let value = Value::Object(vec![
        ("b".to_string(), Value::Number(2.0)),
        ("a".to_string(), Value::Number(1.0)),
    ]);
    assert_eq!(stringify(&value), r#"{"b":2,"a":1}"#);
}

#[test]
fn object_keys_are_escaped() {
    let value = Value::Object(vec![("a\"b\n".to_string(), Value::Number(1.0))]);
    assert_eq!(stringify(&value), r#"{"a\"b\n":1}"#);
}

#[test]
fn empty_key_renders() {
    let value = Value::Object(vec![(String::new(), Value::Number(1.0))]);
    assert_eq!(stringify(&value), r#"{"":1}"#);
}

#[test]
fn deep_mixed_document_renders() {
    let value = Value::Object(vec![
        (
            "user".to_string(),
            Value::Object(vec![
                ("name".to_string(), Value::String("Ada".to_string())),
                ("id".to_string(), Value::BigInt(BigInt::from(9007199254740993i64))),
            ]),
        ),
        (
            "scores".to_string(),
            Value::Array(vec![Value::Number(95.0), Value::Number(87.5)]),
        ),
    ]);
    assert_eq!(
        stringify(&value),
        r#"{"user":{"name":"Ada","id":9007199254740993n},"scores":[95,87.5]}"#
    );
}

// ============================================================================
// Display
// ============================================================================

#[test]
fn display_matches_stringify() {
    let value = Value::Array(vec![Value::Number(1.0), Value::Null]);
    assert_eq!(format!("{value}"), stringify(&value));
}
