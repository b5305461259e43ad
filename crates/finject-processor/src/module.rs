//! Registration module validation and synthesis
//!
//! The aggregator declaration (`@FragmentModule`) gets a generated peer,
//! `FragmentInject_<Aggregator>`, binding every known factory into the fragment factory map.

use crate::diagnostics::DiagnosticSink;
use crate::factory::inject_factory_name;
use crate::query::DeclarationQueries;
use crate::violations::InjectViolation;
use finject_domain::constants::{BIND_METHOD_PREFIX, BIND_PARAMETER, MODULE_PREFIX};
use finject_domain::value_objects::well_known;
use finject_domain::{
    Annotation, AnnotationValue, ClassName, JavaFile, MethodSpec, Modifier, TypeDeclaration,
    TypeSpec,
};

/// Name of the registration module generated for `aggregator`
pub fn fragment_inject_module_name(aggregator: &ClassName) -> ClassName {
    aggregator.peer_class_with_reflection_nesting(&format!(
        "{MODULE_PREFIX}{}",
        aggregator.simple_name()
    ))
}

/// Name of the binding method for `target`
///
/// `test.Outer.TestFragment` gives `bind_test_Outer$TestFragment`.
pub fn bind_method_name(target: &ClassName) -> String {
    format!(
        "{BIND_METHOD_PREFIX}{}",
        target.reflection_name().replace('.', "_")
    )
}

/// A located aggregator that passed validation, with the targets to register
#[derive(Debug, Clone)]
pub struct FragmentModuleElements<'a> {
    pub module_type: &'a TypeDeclaration,
    pub fragment_types: Vec<ClassName>,
}

/// Find the single aggregator among `candidates`
///
/// More than one is reported against each of them and yields nothing.
pub fn find_fragment_module<'a>(
    candidates: &[&'a TypeDeclaration],
    sink: &mut dyn DiagnosticSink,
) -> Option<&'a TypeDeclaration> {
    match candidates {
        [] => None,
        [single] => Some(*single),
        many => {
            for candidate in many {
                sink.report(InjectViolation::MultipleModules {
                    element: candidate.name.clone(),
                });
            }
            None
        }
    }
}

impl<'a> FragmentModuleElements<'a> {
    /// Validate `module_type` as an aggregator registering `fragment_types`
    pub fn validate(
        module_type: &'a TypeDeclaration,
        fragment_types: Vec<ClassName>,
        queries: &DeclarationQueries<'_>,
        sink: &mut dyn DiagnosticSink,
    ) -> Option<Self> {
        if !queries.is_dagger_module(module_type) {
            sink.report(InjectViolation::MissingDaggerModule {
                element: module_type.name.clone(),
            });
            return None;
        }
        Some(Self {
            module_type,
            fragment_types,
        })
    }

    pub fn to_fragment_injection_module(
        &self,
        generated_annotation: Option<Annotation>,
    ) -> FragmentInjectionModule {
        FragmentInjectionModule {
            module_name: self.module_type.name.clone(),
            public: self.module_type.has_modifier(Modifier::Public),
            injected_names: self.fragment_types.clone(),
            generated_annotation,
        }
    }
}

/// Everything needed to generate the registration module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentInjectionModule {
    pub module_name: ClassName,
    /// Generated module is public iff the aggregator is
    pub public: bool,
    /// Targets to bind, in discovery order
    pub injected_names: Vec<ClassName>,
    pub generated_annotation: Option<Annotation>,
}

impl FragmentInjectionModule {
    pub fn generated_type(&self) -> ClassName {
        fragment_inject_module_name(&self.module_name)
    }

    pub fn brew_java(&self) -> TypeSpec {
        let mut spec = TypeSpec::class(self.generated_type().simple_name())
            .add_annotation(Annotation::marker(well_known::DAGGER_MODULE.clone()));
        if let Some(annotation) = &self.generated_annotation {
            spec = spec.add_annotation(annotation.clone());
        }
        if self.public {
            spec = spec.add_modifiers(&[Modifier::Public]);
        }
        spec = spec
            .add_modifiers(&[Modifier::Abstract])
            .add_originating_element(self.module_name.clone())
            .add_method(MethodSpec::constructor().add_modifiers(&[Modifier::Private]));

        for injected in &self.injected_names {
            spec = spec
                .add_originating_element(injected.clone())
                .add_method(bind_method(injected));
        }
        spec
    }

    /// The module as a file in the aggregator's package
    pub fn to_java_file(&self, file_comment: Option<&str>) -> JavaFile {
        let file = JavaFile::new(self.module_name.package_name(), self.brew_java());
        match file_comment {
            Some(comment) => file.with_file_comment(comment),
            None => file,
        }
    }
}

fn bind_method(target: &ClassName) -> MethodSpec {
    MethodSpec::method(bind_method_name(target))
        .add_annotation(Annotation::marker(well_known::DAGGER_BINDS.clone()))
        .add_annotation(Annotation::marker(well_known::DAGGER_INTO_MAP.clone()))
        .add_annotation(
            Annotation::marker(well_known::DAGGER_CLASS_KEY.clone())
                .with_member("value", AnnotationValue::class(target.clone())),
        )
        .add_modifiers(&[Modifier::Abstract])
        .returns(well_known::FRAGMENT_INJECT_FACTORY.clone().into())
        .add_parameter(inject_factory_name(target).into(), BIND_PARAMETER)
}
