use duckwire::value::Value;
use std::collections::BTreeMap;

#[test]
fn untyped_json_decodes_to_the_weak_side_variants() {
    // What a weakly-typed peer's decoder hands the adapter: integers wide,
    // floats wide, no 32-bit variants.
    let arguments: Vec<Value> =
        serde_json::from_str(r#"[2, 3.5, "x", null, true, [1], {"k": 1}]"#)
            .expect("should decode");

    let mut map = BTreeMap::new();
    map.insert("k".to_string(), Value::I64(1));

    assert_eq!(
        arguments,
        vec![
            Value::I64(2),
            Value::F64(3.5),
            Value::String("x".to_string()),
            Value::Null,
            Value::Bool(true),
            Value::Seq(vec![Value::I64(1)]),
            Value::Map(map),
        ]
    );
}

#[test]
fn narrowed_values_serialize_without_variant_tags() {
    // Untagged: the wire sees plain numbers either side of a narrowing.
    assert_eq!(serde_json::to_string(&Value::I32(7)).expect("serialize"), "7");
    assert_eq!(
        serde_json::to_string(&Value::F32(3.0)).expect("serialize"),
        "3.0"
    );
}

#[test]
fn from_impls_produce_the_weak_side_variants() {
    assert_eq!(Value::from(7i64), Value::I64(7));
    assert_eq!(Value::from(3.5f64), Value::F64(3.5));
    assert_eq!(Value::from("x"), Value::String("x".to_string()));
    assert_eq!(Value::from(true), Value::Bool(true));
}

#[test]
fn type_names_reflect_runtime_width() {
    assert_eq!(Value::I64(7).type_name(), "i64");
    assert_eq!(Value::I32(7).type_name(), "i32");
    assert_eq!(Value::F64(3.0).type_name(), "f64");
    assert_eq!(Value::F32(3.0).type_name(), "f32");
    assert!(Value::Null.is_null());
}
