//! Shared test utilities for finject-infrastructure tests
//!
//! Declaration graph builders for the usual program shapes.

#![allow(dead_code)] // Test utilities may not all be used in every test file

use finject_domain::value_objects::well_known;
use finject_domain::{
    Annotation, AnnotationValue, ClassName, ConstructorDeclaration, DeclarationKind, Modifier,
    ParameterDeclaration, TypeDeclaration, TypeName,
};
use finject_infrastructure::adapters::DeclarationGraph;
use finject_infrastructure::InMemoryEnvironment;
use std::path::Path;

pub fn class(name: &str) -> ClassName {
    ClassName::best_guess(name).unwrap()
}

pub fn class_type(name: &str) -> TypeName {
    TypeName::Class(class(name))
}

/// `public class <name> extends Fragment` with one public `@FragmentInject` constructor
pub fn fragment(name: &str, parameters: Vec<ParameterDeclaration>) -> TypeDeclaration {
    let mut constructor = ConstructorDeclaration::new()
        .with_modifier(Modifier::Public)
        .with_annotation(Annotation::marker(well_known::FRAGMENT_INJECT.clone()));
    for parameter in parameters {
        constructor = constructor.with_parameter(parameter);
    }
    TypeDeclaration::class(class(name))
        .with_modifier(Modifier::Public)
        .with_superclass(well_known::FRAGMENT.clone())
        .with_constructor(constructor)
}

/// `TestFragment(Long foo)`
pub fn long_fragment(name: &str) -> TypeDeclaration {
    fragment(
        name,
        vec![ParameterDeclaration::new("foo", class_type("java.lang.Long"))],
    )
}

/// `@FragmentModule @Module(includes = ...)` public abstract aggregator
pub fn aggregator(name: &str, includes: Vec<AnnotationValue>) -> TypeDeclaration {
    TypeDeclaration::class(class(name))
        .with_modifier(Modifier::Public)
        .with_modifier(Modifier::Abstract)
        .with_annotation(Annotation::marker(well_known::FRAGMENT_MODULE.clone()))
        .with_annotation(
            Annotation::marker(well_known::DAGGER_MODULE.clone())
                .with_member("includes", AnnotationValue::Array(includes)),
        )
}

/// Aggregator including its own registration module by class literal
pub fn including_aggregator(name: &str) -> TypeDeclaration {
    let generated = finject_processor::fragment_inject_module_name(&class(name));
    aggregator(name, vec![AnnotationValue::class(generated)])
}

pub fn generated_marker() -> TypeDeclaration {
    TypeDeclaration::class(well_known::GENERATED_PROCESSING.clone())
        .with_kind(DeclarationKind::Annotation)
}

pub fn graph(sources: Vec<TypeDeclaration>) -> DeclarationGraph {
    DeclarationGraph {
        sources,
        classpath: vec![generated_marker()],
    }
}

pub fn environment(sources: Vec<TypeDeclaration>) -> InMemoryEnvironment {
    InMemoryEnvironment::from_graph(graph(sources)).unwrap()
}

/// One fragment with a `Long` dependency plus an aggregator including its module
pub fn single_target_graph() -> DeclarationGraph {
    graph(vec![
        long_fragment("test.TestFragment"),
        including_aggregator("test.TestModule"),
    ])
}

/// The same program as [`single_target_graph`], spelled as a YAML graph file
pub const SINGLE_TARGET_YAML: &str = r#"
sources:
  - name: test.TestFragment
    modifiers: [public]
    superclass: { class: androidx.fragment.app.Fragment }
    constructors:
      - modifiers: [public]
        annotations: [{ type: com.vikingsen.inject.fragment.FragmentInject }]
        parameters: [{ name: foo, type: { class: java.lang.Long } }]
  - name: test.TestModule
    modifiers: [public, abstract]
    annotations:
      - type: com.vikingsen.inject.fragment.FragmentModule
      - type: dagger.Module
        members:
          - name: includes
            value: { array: [{ class: { class: test.FragmentInject_TestModule } }] }
classpath:
  - name: javax.annotation.processing.Generated
    kind: annotation
"#;

pub fn write_file(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
}
