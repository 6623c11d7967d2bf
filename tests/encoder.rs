use lenient_json::{
    decode, encode, mime_type,
    value::{Key, Str, Value},
    MIME_TYPE,
};
use num_bigint::BigInt;
use test_case::test_case;

fn int(n: i64) -> Value {
    Value::from(n)
}

#[test_case(Value::Null, "null"; "null")]
#[test_case(Value::Bool(true), "true"; "true")]
#[test_case(Value::Bool(false), "false"; "false")]
#[test_case(int(0), "0"; "zero")]
#[test_case(int(-42), "-42"; "negative")]
#[test_case(Value::from(u64::MAX), "18446744073709551615"; "u64 max")]
#[test_case(Value::from(1.0), "1.0"; "integral float")]
#[test_case(Value::from(-2.5), "-2.5"; "negative float")]
#[test_case(Value::from(0.1), "0.1"; "shortest digits")]
#[test_case(Value::from(1e300), "1e300"; "large exponent")]
#[test_case(Value::from(1e-7), "1e-7"; "small exponent")]
#[test_case(Value::from(f64::NAN), "null"; "nan")]
#[test_case(Value::from(f64::INFINITY), "null"; "infinity")]
#[test_case(Value::from(f64::NEG_INFINITY), "null"; "negative infinity")]
fn scalar(value: Value, expected: &str) {
    assert_eq!(encode(&value), expected);
}

#[test]
fn big_integer() {
    let big: BigInt = "-340282366920938463463374607431768211456".parse().unwrap();

    assert_eq!(
        encode(&Value::from(big)),
        "-340282366920938463463374607431768211456"
    );
}

mod string {
    use super::*;

    #[test]
    fn quotes_and_backslashes() {
        assert_eq!(encode(&Value::from("a\"b\\c\n")), r#""a\"b\\c\n""#);
    }

    #[test]
    fn short_escapes() {
        assert_eq!(
            encode(&Value::from("\u{8}\t\n\u{c}\r")),
            r#""\b\t\n\f\r""#
        );
    }

    #[test]
    fn control_bytes_use_unicode_escapes() {
        assert_eq!(encode(&Value::from("\0\u{1}\u{1f}")), r#""\u0000\u0001\u001F""#);
    }

    #[test]
    fn printable_ascii_passes_through() {
        let printable: String = (0x20u8..=0x7F)
            .filter(|b| *b != b'"' && *b != b'\\')
            .map(char::from)
            .collect();

        assert_eq!(encode(&Value::from(printable.as_str())), format!("\"{}\"", printable));
    }

    #[test]
    fn high_bytes_are_escaped_one_by_one() {
        assert_eq!(encode(&Value::from("é")), r#""\u00C3\u00A9""#);
        assert_eq!(
            encode(&Value::String(Str::from(&b"\xFF"[..]))),
            r#""\u00FF""#
        );
    }

    #[test]
    fn wide_units_keep_four_digits() {
        let s = Str::from(vec![0x4E2D, 0xD83D, 0xDE00]);

        assert_eq!(encode(&Value::String(s)), r#""\u4E2D\uD83D\uDE00""#);
    }

    #[test]
    fn empty() {
        assert_eq!(encode(&Value::from("")), r#""""#);
    }
}

mod container {
    use super::*;

    #[test]
    fn empty() {
        assert_eq!(encode(&Value::Array(vec![])), "[]");
        assert_eq!(encode(&Value::Object(vec![])), "{}");
    }

    #[test]
    fn array() {
        let value = Value::Array(vec![int(1), Value::Null, Value::Array(vec![Value::from("x")])]);

        assert_eq!(encode(&value), r#"[1,null,["x"]]"#);
    }

    #[test]
    fn object_keeps_order_and_duplicates() {
        let value = Value::Object(vec![
            (Key::from("b"), int(1)),
            (Key::from("a"), Value::Object(vec![])),
            (Key::from("b"), int(2)),
        ]);

        assert_eq!(encode(&value), r#"{"b":1,"a":{},"b":2}"#);
    }

    #[test]
    fn labels_encode_like_strings() {
        let labelled = Value::Object(vec![(Key::Label("say \"hi\""), Value::Bool(true))]);
        let stringy = Value::Object(vec![(Key::from("say \"hi\""), Value::Bool(true))]);

        assert_eq!(encode(&labelled), r#"{"say \"hi\"":true}"#);
        assert_eq!(encode(&labelled), encode(&stringy));
    }

    #[test]
    fn display_matches_encode() {
        let value = Value::Object(vec![(Key::Label("k"), Value::from(vec![int(1), Value::from(0.5)]))]);

        assert_eq!(value.to_string(), encode(&value));
    }
}

mod round_trip {
    use super::*;

    fn round_trip(value: Value) {
        let text = encode(&value);
        let (decoded, rest) = decode(&text).unwrap();

        assert!(rest.is_empty(), "remainder left for {}", text);
        assert_eq!(decoded, value);
    }

    #[test]
    fn scalars() {
        round_trip(Value::Null);
        round_trip(Value::Bool(false));
        round_trip(int(-7));
        round_trip(Value::from(1.0));
        round_trip(Value::from(1e16));
        round_trip(Value::from(-3.25e-12));
        round_trip(Value::from(f64::MAX));
        round_trip(Value::from(f64::MIN_POSITIVE));
    }

    #[test]
    fn every_unit() {
        let units: Vec<u16> = (0..=0x1FF).chain([0xD800, 0xDFFF, 0xFFFF]).collect();

        round_trip(Value::String(Str::from(units)));
    }

    #[test]
    fn nested_tree() {
        let text = br#"{"name":"caf\u00e9","tags":["a",,"b"],"n":{"x":-1,"y":2.5e3,"x":null}}"#;
        let (value, _) = decode(text).unwrap();

        round_trip(value);
    }

    #[test]
    fn escapes_survive() {
        let (value, _) = decode(&encode(&Value::from("a\"b\\c\n"))).unwrap();

        assert_eq!(value.unwrap_string(), "a\"b\\c\n");
    }
}

#[test]
fn mime() {
    assert_eq!(MIME_TYPE, "application/json");
    assert_eq!(mime_type(), MIME_TYPE);
}
