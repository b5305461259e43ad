//! Factory synthesis
//!
//! Turns a validated target into the description of its `<Target>_InjectFactory`: one provider
//! field per dependency request, an `@Inject` constructor filling them, and a `create()` that
//! builds the target.

use crate::dependency_request::DependencyRequest;
use crate::query::DeclarationQueries;
use crate::validator::FragmentInjectElements;
use finject_domain::constants::{CREATE_METHOD, FACTORY_SUFFIX};
use finject_domain::value_objects::well_known;
use finject_domain::{
    Annotation, ClassName, Expression, JavaFile, MethodSpec, Modifier, Statement, TypeName,
    TypeSpec, TypeVariableName,
};

/// Name of the factory generated for `target`, a peer of the target's outermost class
///
/// `test.Outer.TestFragment` gives `test.Outer$TestFragment_InjectFactory`.
pub fn inject_factory_name(target: &ClassName) -> ClassName {
    target.peer_class_with_reflection_nesting(&format!("{}{FACTORY_SUFFIX}", target.simple_name()))
}

/// Everything needed to generate one factory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentInjection {
    pub target_name: ClassName,
    /// The target as a type, parameterized by its own type variables when generic
    pub target_type: TypeName,
    pub type_variables: Vec<TypeVariableName>,
    /// In constructor parameter order
    pub dependency_requests: Vec<DependencyRequest>,
    pub generated_annotation: Option<Annotation>,
}

impl FragmentInjection {
    pub fn from_elements(
        elements: &FragmentInjectElements<'_>,
        queries: &DeclarationQueries<'_>,
        generated_annotation: Option<Annotation>,
    ) -> Self {
        let target = elements.target_type;
        let dependency_requests = elements
            .target_constructor
            .parameters
            .iter()
            .map(|parameter| DependencyRequest::of_parameter(parameter, queries))
            .collect();
        Self {
            target_name: target.name.clone(),
            target_type: target.as_type(),
            type_variables: target.type_parameters.clone(),
            dependency_requests,
            generated_annotation,
        }
    }

    pub fn generated_type(&self) -> ClassName {
        inject_factory_name(&self.target_name)
    }

    pub fn brew_java(&self) -> TypeSpec {
        let generated = self.generated_type();
        let mut spec = TypeSpec::class(generated.simple_name())
            .add_modifiers(&[Modifier::Public, Modifier::Final])
            .add_superinterface(well_known::FRAGMENT_INJECT_FACTORY.clone().into())
            .add_originating_element(self.target_name.clone());
        if let Some(annotation) = &self.generated_annotation {
            spec = spec.add_annotation(annotation.clone());
        }

        // Qualifiers only matter where the DI runtime resolves them
        for request in &self.dependency_requests {
            spec = spec.add_field(
                request.provider_type().without_annotations(),
                request.name.clone(),
                &[Modifier::Private, Modifier::Final],
            );
        }

        spec.add_method(self.constructor()).add_method(self.create_method())
    }

    /// The factory as a file in the target's package
    pub fn to_java_file(&self, file_comment: Option<&str>) -> JavaFile {
        let file = JavaFile::new(self.target_name.package_name(), self.brew_java());
        match file_comment {
            Some(comment) => file.with_file_comment(comment),
            None => file,
        }
    }

    fn constructor(&self) -> MethodSpec {
        let mut constructor = MethodSpec::constructor()
            .add_annotation(Annotation::marker(well_known::JAVAX_INJECT.clone()))
            .add_modifiers(&[Modifier::Public]);
        for request in &self.dependency_requests {
            constructor = constructor
                .add_parameter(request.provider_type(), request.name.clone())
                .add_statement(Statement::Assign {
                    target: Expression::ThisField(request.name.clone()),
                    value: Expression::name(request.name.clone()),
                });
        }
        constructor
    }

    fn create_method(&self) -> MethodSpec {
        let arguments = self
            .dependency_requests
            .iter()
            .map(DependencyRequest::argument)
            .collect();
        MethodSpec::method(CREATE_METHOD)
            .add_annotation(Annotation::marker(well_known::JAVA_OVERRIDE.clone()))
            .add_modifiers(&[Modifier::Public])
            .add_type_variables(self.type_variables.clone())
            .returns(well_known::FRAGMENT.clone().into())
            .add_statement(Statement::Return(Expression::New {
                type_name: self.target_type.clone(),
                arguments,
            }))
    }
}
