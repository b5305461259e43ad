//! Tests for class names and type references

use finject_domain::value_objects::well_known;
use finject_domain::{Annotation, AnnotationValue, ClassName, PrimitiveType, TypeName};

fn class(name: &str) -> ClassName {
    ClassName::best_guess(name).unwrap()
}

#[test]
fn test_best_guess_splits_package_and_nesting() {
    let name = class("com.example.Outer.Inner");
    assert_eq!(name.package_name(), "com.example");
    assert_eq!(name.simple_names(), ["Outer", "Inner"]);
    assert_eq!(name.enclosing_class_name(), Some(class("com.example.Outer")));
    assert_eq!(name.top_level_class_name(), class("com.example.Outer"));
}

#[test]
fn test_nested_class_round_trips_through_names() {
    let outer = class("test.Outer");
    let inner = outer.nested_class("TestFragment");
    assert_eq!(inner.canonical_name(), "test.Outer.TestFragment");
    assert_eq!(inner.reflection_name(), "test.Outer$TestFragment");
    assert_eq!(inner.to_string(), "test.Outer.TestFragment");
}

#[test]
fn test_peer_class_of_top_level_class() {
    let peer = class("test.TestFragment").peer_class_with_reflection_nesting("X");
    assert_eq!(peer, class("test.X"));
}

#[test]
fn test_get_rejects_invalid_identifiers() {
    assert!(ClassName::get("test", ["1Bad"]).is_err());
    assert!(ClassName::get("te st", ["Good"]).is_err());
    assert!(ClassName::get("test", Vec::<String>::new()).is_err());
}

#[test]
fn test_parameterized_display_is_fully_qualified() {
    let provider = TypeName::parameterized(
        well_known::JAVAX_PROVIDER.clone(),
        vec![TypeName::Class(class("java.lang.Long"))],
    );
    assert_eq!(provider.to_string(), "javax.inject.Provider<java.lang.Long>");
    assert!(provider.is_parameterized_by(&well_known::JAVAX_PROVIDER));
}

#[test]
fn test_annotated_type_strips_back_to_original() {
    let named = Annotation::marker(class("test.Named"))
        .with_member("value", AnnotationValue::String("x".to_string()));
    let plain = TypeName::Primitive(PrimitiveType::Int);
    let annotated = plain.clone().annotated(vec![named.clone()]);

    assert_eq!(annotated.annotations(), [named]);
    assert_eq!(annotated.without_annotations(), plain);
    assert_eq!(annotated.to_string(), "@test.Named(\"x\") int");
}

#[test]
fn test_annotated_with_nothing_is_unchanged() {
    let plain = TypeName::Class(class("java.lang.String"));
    assert_eq!(plain.clone().annotated(Vec::new()), plain);
}

#[test]
fn test_type_variables_of_parameterized_type() {
    let generic = TypeName::parameterized(
        class("test.Holder"),
        vec![TypeName::variable("T"), TypeName::Class(class("java.lang.String"))],
    );
    let variables = generic.type_variables();
    assert_eq!(variables.len(), 1);
    assert_eq!(variables[0].name, "T");
}

#[test]
fn test_single_annotation_value_reads_as_one_element() {
    let single = AnnotationValue::class(class("test.A"));
    assert_eq!(single.elements().len(), 1);

    let array = AnnotationValue::Array(vec![
        AnnotationValue::class(class("test.A")),
        AnnotationValue::Error("FragmentInject_TestModule".to_string()),
    ]);
    assert_eq!(array.elements().len(), 2);
    assert_eq!(array.to_string(), "{test.A.class, <error FragmentInject_TestModule>}");
}
