//! Tests for registration module validation and synthesis

use crate::test_utils::*;
use finject_domain::value_objects::well_known;
use finject_domain::{
    Annotation, AnnotationValue, DeclarationEnvironment, MethodKind, Modifier, TypeDeclaration,
    TypeName,
};
use finject_processor::module::{find_fragment_module, FragmentModuleElements};
use finject_processor::{bind_method_name, DeclarationQueries, FragmentInjectionModule, InjectViolation};

fn module(public: bool, targets: &[&str]) -> FragmentInjectionModule {
    FragmentInjectionModule {
        module_name: class("test.TestModule"),
        public,
        injected_names: targets.iter().map(|t| class(t)).collect(),
        generated_annotation: None,
    }
}

#[test]
fn test_module_shape() {
    let spec = module(true, &["test.TestFragment"]).brew_java();

    assert_eq!(spec.name, "FragmentInject_TestModule");
    assert_eq!(
        spec.annotations,
        [Annotation::marker(well_known::DAGGER_MODULE.clone())]
    );
    assert_eq!(spec.modifiers, [Modifier::Public, Modifier::Abstract]);

    let constructor = spec.constructors().next().unwrap();
    assert_eq!(constructor.modifiers, [Modifier::Private]);
    assert!(constructor.parameters.is_empty());
}

#[test]
fn test_module_visibility_follows_aggregator() {
    let spec = module(false, &["test.TestFragment"]).brew_java();
    assert_eq!(spec.modifiers, [Modifier::Abstract]);
}

#[test]
fn test_bind_method() {
    let spec = module(true, &["test.TestFragment"]).brew_java();
    let binds: Vec<_> = spec.named_methods().collect();
    assert_eq!(binds.len(), 1);

    let bind = binds[0];
    assert_eq!(bind.name(), Some("bind_test_TestFragment"));
    assert!(bind.is_abstract());
    assert_eq!(
        bind.annotations,
        [
            Annotation::marker(well_known::DAGGER_BINDS.clone()),
            Annotation::marker(well_known::DAGGER_INTO_MAP.clone()),
            Annotation::marker(well_known::DAGGER_CLASS_KEY.clone())
                .with_member("value", AnnotationValue::class(class("test.TestFragment"))),
        ]
    );
    assert_eq!(
        bind.kind,
        MethodKind::Method {
            name: "bind_test_TestFragment".to_string(),
            returns: Some(TypeName::Class(well_known::FRAGMENT_INJECT_FACTORY.clone())),
        }
    );
    assert_eq!(bind.parameters[0].name, "factory");
    assert_eq!(
        bind.parameters[0].type_name,
        class_type("test.TestFragment_InjectFactory")
    );
}

#[test]
fn test_one_binding_per_target_in_order() {
    let spec = module(true, &["test.B", "test.A", "test.Outer.C"]).brew_java();
    let names: Vec<&str> = spec.named_methods().filter_map(|m| m.name()).collect();
    assert_eq!(names, ["bind_test_B", "bind_test_A", "bind_test_Outer$C"]);
    assert_eq!(
        spec.originating_elements,
        [
            class("test.TestModule"),
            class("test.B"),
            class("test.A"),
            class("test.Outer.C"),
        ]
    );
}

#[test]
fn test_nested_target_binding_name() {
    assert_eq!(
        bind_method_name(&class("test.Outer.TestFragment")),
        "bind_test_Outer$TestFragment"
    );
}

#[test]
fn test_missing_dagger_module() {
    let declaration = TypeDeclaration::class(class("test.TestModule"))
        .with_annotation(Annotation::marker(well_known::FRAGMENT_MODULE.clone()));
    let env = FakeEnvironment::new().with_root(declaration);
    let queries = DeclarationQueries::new(&env);
    let module_type = env.find_type(&class("test.TestModule")).unwrap();

    let mut violations = Vec::new();
    let elements = FragmentModuleElements::validate(module_type, Vec::new(), &queries, &mut violations);

    assert!(elements.is_none());
    match &violations[..] {
        [InjectViolation::MissingDaggerModule { element }] => {
            assert_eq!(element.canonical_name(), "test.TestModule");
        }
        other => panic!("Expected MissingDaggerModule, got {other:?}"),
    }
    assert_eq!(
        violations[0].to_string(),
        "@FragmentModule must also be annotated as Dagger @Module"
    );
}

#[test]
fn test_multiple_modules_reported_on_each() {
    let one = aggregator("test.OneModule", Vec::new());
    let two = aggregator("test.TwoModule", Vec::new());
    let candidates = [&one, &two];

    let mut violations = Vec::new();
    assert!(find_fragment_module(&candidates, &mut violations).is_none());

    let elements: Vec<String> = violations
        .iter()
        .map(|v| match v {
            InjectViolation::MultipleModules { element } => element.simple_name().to_string(),
            other => panic!("Expected MultipleModules, got {other:?}"),
        })
        .collect();
    assert_eq!(elements, ["OneModule", "TwoModule"]);
}

#[test]
fn test_validated_module_uses_aggregator_visibility() {
    let declaration = including_aggregator("test.TestModule");
    let env = FakeEnvironment::new().with_root(declaration);
    let queries = DeclarationQueries::new(&env);
    let module_type = env.find_type(&class("test.TestModule")).unwrap();

    let mut violations = Vec::new();
    let elements = FragmentModuleElements::validate(
        module_type,
        vec![class("test.TestFragment")],
        &queries,
        &mut violations,
    )
    .unwrap();
    let module = elements.to_fragment_injection_module(None);

    assert!(violations.is_empty());
    assert!(module.public);
    assert_eq!(
        module.generated_type().canonical_name(),
        "test.FragmentInject_TestModule"
    );
}
