use duckwire::adapter::{AdapterError, resolve_method};
use duckwire::descriptor::{MethodSignature, ServiceDescriptor};
use duckwire::value::ParamType;

fn calc_descriptor() -> ServiceDescriptor {
    ServiceDescriptor::new(
        "com.example.Calc",
        None,
        vec![
            MethodSignature::new("Echo", vec![ParamType::String]),
            MethodSignature::new("add", vec![ParamType::I32, ParamType::I32]),
            MethodSignature::new("add", vec![ParamType::I32, ParamType::I32, ParamType::I32]),
        ],
    )
    .expect("descriptor should register")
}

#[test]
fn resolution_ignores_caller_casing() {
    let descriptor = calc_descriptor();

    for spelling in ["Echo", "echo", "ECHO", "eChO"] {
        let signature = resolve_method(&descriptor, spelling, 1).expect("should resolve");
        // Canonical declared spelling, regardless of how the caller wrote it.
        assert_eq!(signature.name, "Echo");
    }
}

#[test]
fn arity_selects_between_same_named_signatures() {
    let descriptor = calc_descriptor();

    let two = resolve_method(&descriptor, "ADD", 2).expect("binary add");
    assert_eq!(two.arity(), 2);

    let three = resolve_method(&descriptor, "add", 3).expect("ternary add");
    assert_eq!(three.arity(), 3);
}

#[test]
fn arity_mismatch_fails_even_when_the_name_exists() {
    let descriptor = calc_descriptor();

    assert_eq!(
        resolve_method(&descriptor, "add", 1).err(),
        Some(AdapterError::MethodNotFound {
            method: "add".to_string(),
            arity: 1,
        })
    );
}

#[test]
fn unknown_name_fails_with_method_not_found() {
    let descriptor = calc_descriptor();

    let err = resolve_method(&descriptor, "sub", 1).expect_err("no such method");
    assert!(!err.to_string().is_empty());
    assert!(err.to_string().contains("sub"));
}
