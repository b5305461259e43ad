//! In-memory declaration environment tests

use crate::test_utils::*;
use finject_domain::value_objects::well_known;
use finject_domain::{
    AnnotationValue, DeclarationEnvironment, Error, JavaFile, MarkedElement, TypeDeclaration,
    TypeSpec,
};
use finject_infrastructure::adapters::DeclarationGraph;
use finject_infrastructure::InMemoryEnvironment;

fn includes(env: &InMemoryEnvironment, aggregator: &str) -> AnnotationValue {
    env.read_annotation_value(
        &class(aggregator),
        &well_known::DAGGER_MODULE,
        "includes",
    )
    .unwrap()
}

#[test]
fn test_builtins_are_resolvable() {
    let env = environment(Vec::new());
    assert!(env.find_type(&well_known::FRAGMENT).is_some());
    assert!(env.has_marker(&class("javax.inject.Named"), &well_known::JAVAX_QUALIFIER));
}

#[test]
fn test_declared_builtin_is_not_duplicated() {
    let env = environment(vec![TypeDeclaration::class(well_known::FRAGMENT.clone())]);
    let count = env
        .declarations()
        .iter()
        .filter(|d| d.name == *well_known::FRAGMENT)
        .count();
    assert_eq!(count, 1);
}

#[test]
fn test_duplicate_declaration_is_rejected() {
    let graph = DeclarationGraph {
        sources: vec![long_fragment("test.TestFragment")],
        classpath: vec![TypeDeclaration::class(class("test.TestFragment"))],
    };
    let result = InMemoryEnvironment::from_graph(graph);
    assert!(matches!(result, Err(Error::InvalidDeclaration { .. })));
}

#[test]
fn test_only_sources_are_roots() {
    let env = InMemoryEnvironment::from_graph(single_target_graph()).unwrap();
    assert_eq!(
        env.roots(),
        [class("test.TestFragment"), class("test.TestModule")]
    );

    let marked = env.find_declarations_marked(&well_known::FRAGMENT_INJECT);
    assert_eq!(
        marked,
        [MarkedElement::Constructor {
            owner: class("test.TestFragment"),
            index: 0,
        }]
    );

    let mut env = env;
    env.set_roots(Vec::new());
    assert!(env
        .find_declarations_marked(&well_known::FRAGMENT_INJECT)
        .is_empty());
}

#[test]
fn test_subtype_is_transitive() {
    let env = environment(vec![
        TypeDeclaration::class(class("test.BaseFragment"))
            .with_superclass(well_known::FRAGMENT.clone()),
        TypeDeclaration::class(class("test.TestFragment"))
            .with_superclass(class("test.BaseFragment")),
    ]);
    assert!(env.is_subtype_of(&class("test.TestFragment"), &well_known::FRAGMENT));
    assert!(!env.is_subtype_of(&well_known::FRAGMENT, &class("test.TestFragment")));
}

#[test]
fn test_class_literal_of_missing_type_reads_unresolved() {
    let env = InMemoryEnvironment::from_graph(single_target_graph()).unwrap();
    assert_eq!(
        includes(&env, "test.TestModule"),
        AnnotationValue::Array(vec![AnnotationValue::Error(
            "FragmentInject_TestModule".to_string()
        )])
    );
}

#[test]
fn test_registered_type_resolves_class_literal() {
    let mut env = InMemoryEnvironment::from_graph(single_target_graph()).unwrap();
    let file = JavaFile::new("test", TypeSpec::class("FragmentInject_TestModule"));
    let name = env.register_generated(&file).unwrap();

    assert_eq!(name, class("test.FragmentInject_TestModule"));
    assert_eq!(
        includes(&env, "test.TestModule"),
        AnnotationValue::Array(vec![AnnotationValue::class(name)])
    );
}

#[test]
fn test_unresolved_simple_name_resolves_in_declaring_package() {
    let mut env = environment(vec![aggregator(
        "test.TestModule",
        vec![AnnotationValue::Error("FragmentInject_TestModule".to_string())],
    )]);
    assert_eq!(
        includes(&env, "test.TestModule"),
        AnnotationValue::Array(vec![AnnotationValue::Error(
            "FragmentInject_TestModule".to_string()
        )])
    );

    env.register_generated(&JavaFile::new("test", TypeSpec::class("FragmentInject_TestModule")))
        .unwrap();
    assert_eq!(
        includes(&env, "test.TestModule"),
        AnnotationValue::Array(vec![AnnotationValue::class(class(
            "test.FragmentInject_TestModule"
        ))])
    );
}

#[test]
fn test_registering_twice_fails() {
    let mut env = environment(Vec::new());
    let file = JavaFile::new("test", TypeSpec::class("Generated_Thing"));
    env.register_generated(&file).unwrap();
    assert!(env.register_generated(&file).is_err());
}

#[test]
fn test_generated_stub_keeps_annotations() {
    let mut env = environment(Vec::new());
    let spec = TypeSpec::class("FragmentInject_TestModule").add_annotation(
        finject_domain::Annotation::marker(well_known::DAGGER_MODULE.clone()),
    );
    let name = env.register_generated(&JavaFile::new("test", spec)).unwrap();
    assert!(env.has_marker(&name, &well_known::DAGGER_MODULE));
}
