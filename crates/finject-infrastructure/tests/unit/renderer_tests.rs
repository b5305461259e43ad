//! Java rendering tests

use crate::test_utils::*;
use finject_domain::value_objects::well_known;
use finject_domain::{
    Annotation, AnnotationValue, JavaFile, Modifier, ParameterDeclaration, TypeDeclaration,
    TypeName, TypeSpec,
};
use finject_infrastructure::{render_java, Compilation, InMemoryEnvironment, MemoryFiler};

fn compile(env: InMemoryEnvironment) -> MemoryFiler {
    let mut filer = MemoryFiler::new();
    Compilation::default().run(env, &mut filer).unwrap();
    filer
}

const FACTORY: &str = r#"// Generated by @FragmentInject. Do not modify!
package test;

import androidx.fragment.app.Fragment;
import com.vikingsen.inject.fragment.FragmentInjectFactory;
import javax.annotation.processing.Generated;
import javax.inject.Inject;
import javax.inject.Provider;

@Generated(
    value = "com.vikingsen.inject.fragment.processor.FragmentInjectProcessor",
    comments = "https://github.com/hansenji/FragmentInject"
)
public final class TestFragment_InjectFactory implements FragmentInjectFactory {
  private final Provider<Long> foo;

  @Inject
  public TestFragment_InjectFactory(Provider<Long> foo) {
    this.foo = foo;
  }

  @Override
  public Fragment create() {
    return new TestFragment(foo.get());
  }
}
"#;

const MODULE: &str = r#"// Generated by @FragmentInject. Do not modify!
package test;

import com.vikingsen.inject.fragment.FragmentInjectFactory;
import dagger.Binds;
import dagger.Module;
import dagger.multibindings.ClassKey;
import dagger.multibindings.IntoMap;
import javax.annotation.processing.Generated;

@Module
@Generated(
    value = "com.vikingsen.inject.fragment.processor.FragmentInjectProcessor",
    comments = "https://github.com/hansenji/FragmentInject"
)
public abstract class FragmentInject_TestModule {
  private FragmentInject_TestModule() {
  }

  @Binds
  @IntoMap
  @ClassKey(TestFragment.class)
  abstract FragmentInjectFactory bind_test_TestFragment(TestFragment_InjectFactory factory);
}
"#;

#[test]
fn test_factory_source() {
    let filer = compile(InMemoryEnvironment::from_graph(single_target_graph()).unwrap());
    assert_eq!(
        filer.source("test.TestFragment_InjectFactory").unwrap(),
        FACTORY
    );
}

#[test]
fn test_module_source() {
    let filer = compile(InMemoryEnvironment::from_graph(single_target_graph()).unwrap());
    assert_eq!(
        filer.source("test.FragmentInject_TestModule").unwrap(),
        MODULE
    );
}

#[test]
fn test_nested_target_uses_enclosing_name() {
    let env = environment(vec![
        TypeDeclaration::class(class("test.Outer")).with_modifier(Modifier::Public),
        long_fragment("test.Outer.TestFragment").with_modifier(Modifier::Static),
        including_aggregator("test.TestModule"),
    ]);
    let filer = compile(env);

    let factory = filer
        .source("test.Outer$TestFragment_InjectFactory")
        .unwrap();
    assert!(factory.contains("public final class Outer$TestFragment_InjectFactory"));
    assert!(factory.contains("return new Outer.TestFragment(foo.get());"));
    assert!(!factory.contains("import test."));

    let module = filer.source("test.FragmentInject_TestModule").unwrap();
    assert!(module.contains("@ClassKey(Outer.TestFragment.class)"));
    assert!(module.contains(
        "abstract FragmentInjectFactory bind_test_Outer$TestFragment(Outer$TestFragment_InjectFactory factory);"
    ));
}

#[test]
fn test_qualifier_kept_on_parameter_only() {
    let named = Annotation::marker(class("javax.inject.Named"))
        .with_member("value", AnnotationValue::String("userId".to_string()));
    let env = environment(vec![fragment(
        "test.TestFragment",
        vec![ParameterDeclaration::new("id", class_type("java.lang.Long")).with_annotation(named)],
    )]);
    let filer = compile(env);

    let factory = filer.source("test.TestFragment_InjectFactory").unwrap();
    assert!(factory.contains("import javax.inject.Named;"));
    assert!(factory.contains("  private final Provider<Long> id;\n"));
    assert!(factory.contains("public TestFragment_InjectFactory(@Named(\"userId\") Provider<Long> id)"));
}

#[test]
fn test_provider_dependency_passed_through() {
    let provider = TypeName::parameterized(
        well_known::JAVAX_PROVIDER.clone(),
        vec![class_type("java.lang.String")],
    );
    let env = environment(vec![fragment(
        "test.TestFragment",
        vec![ParameterDeclaration::new("name", provider)],
    )]);
    let filer = compile(env);

    let factory = filer.source("test.TestFragment_InjectFactory").unwrap();
    assert!(factory.contains("private final Provider<String> name;"));
    assert!(factory.contains("return new TestFragment(name);"));
}

#[test]
fn test_simple_name_clash_falls_back_to_qualified_name() {
    let env = environment(vec![
        TypeDeclaration::class(class("other.Fragment")),
        fragment(
            "test.TestFragment",
            vec![ParameterDeclaration::new("other", class_type("other.Fragment"))],
        ),
    ]);
    let filer = compile(env);

    let factory = filer.source("test.TestFragment_InjectFactory").unwrap();
    assert!(factory.contains("import other.Fragment;"));
    assert!(!factory.contains("import androidx.fragment.app.Fragment;"));
    assert!(factory.contains("public androidx.fragment.app.Fragment create()"));
    assert!(factory.contains("private final Provider<Fragment> other;"));
}

#[test]
fn test_default_package_and_no_comment() {
    let spec = TypeSpec::class("Plain").add_modifiers(&[Modifier::Final, Modifier::Public]);
    let source = render_java(&JavaFile::new("", spec));
    assert_eq!(source, "public final class Plain {\n}\n");
}

#[test]
fn test_rendering_is_deterministic() {
    let first = compile(InMemoryEnvironment::from_graph(single_target_graph()).unwrap());
    let second = compile(InMemoryEnvironment::from_graph(single_target_graph()).unwrap());
    assert_eq!(first.sources(), second.sources());
}
