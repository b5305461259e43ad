//! Tests for binding keys and dependency requests

use crate::test_utils::*;
use finject_domain::{Annotation, Expression};
use finject_processor::{DependencyRequest, Key};

#[test]
fn test_key_equality_includes_qualifier() {
    let plain = Key::new(class_type("java.lang.Long"), None);
    let qualified = Key::new(
        class_type("java.lang.Long"),
        Some(Annotation::marker(class("test.Named"))),
    );
    assert_ne!(plain, qualified);
    assert_eq!(plain, Key::new(class_type("java.lang.Long"), None));
}

#[test]
fn test_key_ordering_type_then_qualified_first() {
    let named = Some(Annotation::marker(class("test.Named")));
    let mut keys = vec![
        Key::new(class_type("java.lang.Long"), None),
        Key::new(class_type("java.lang.Long"), named.clone()),
        Key::new(class_type("java.lang.Integer"), None),
    ];
    keys.sort();

    let rendered: Vec<String> = keys.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        [
            "java.lang.Integer",
            "@test.Named java.lang.Long",
            "java.lang.Long",
        ]
    );
}

#[test]
fn test_request_argument() {
    let plain = DependencyRequest::new(Key::new(class_type("java.lang.Long"), None), "foo");
    assert_eq!(plain.argument(), Expression::name("foo").invoke("get"));

    let provider = DependencyRequest::new(
        Key::new(provider_of(class_type("java.lang.Long")), None),
        "foo",
    );
    assert!(provider.key.is_provider());
    assert_eq!(provider.argument(), Expression::name("foo"));
    assert_eq!(
        provider.provider_type(),
        provider_of(class_type("java.lang.Long"))
    );
}

#[test]
fn test_qualified_provider_keeps_qualifier() {
    let named = Annotation::marker(class("test.Named"));
    let request = DependencyRequest::new(
        Key::new(provider_of(class_type("java.lang.Long")), Some(named.clone())),
        "foo",
    );
    assert_eq!(
        request.provider_type().to_string(),
        "@test.Named javax.inject.Provider<java.lang.Long>"
    );
    assert_eq!(request.provider_type().annotations(), [named]);
}
