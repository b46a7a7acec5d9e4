use duckwire::adapter::resolve_path;
use duckwire::descriptor::{RegistrationUrl, ServiceDescriptor};

fn descriptor_with_path(configured_path: Option<String>) -> ServiceDescriptor {
    ServiceDescriptor::new("com.example.Calc", configured_path, vec![])
        .expect("descriptor should register")
}

#[test]
fn default_path_is_literal_group_path_concatenation() {
    let descriptor = descriptor_with_path(None);
    let url = RegistrationUrl::new("g", "/p");

    // No normalization: the double slash is intentional.
    assert_eq!(resolve_path(&descriptor, &url), "/g//p");
}

#[test]
fn configured_path_wins_verbatim() {
    let descriptor = descriptor_with_path(Some("/calc/v2".to_string()));
    let url = RegistrationUrl::new("g", "/p");

    assert_eq!(resolve_path(&descriptor, &url), "/calc/v2");
}

#[test]
fn blank_configured_path_falls_back_to_default() {
    let descriptor = descriptor_with_path(Some("   ".to_string()));
    let url = RegistrationUrl::new("payments", "orders");

    assert_eq!(resolve_path(&descriptor, &url), "/payments/orders");
}
