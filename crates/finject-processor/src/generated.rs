//! `@Generated` marker

use finject_domain::constants::{GENERATOR_COMMENTS, GENERATOR_NAME};
use finject_domain::value_objects::well_known;
use finject_domain::{Annotation, AnnotationValue, DeclarationEnvironment};

/// The `@Generated` annotation to stamp on generated types, if the environment has one
///
/// `javax.annotation.processing.Generated` wins over the legacy `javax.annotation.Generated`.
pub fn create_generated_annotation(env: &dyn DeclarationEnvironment) -> Option<Annotation> {
    let marker = [&*well_known::GENERATED_PROCESSING, &*well_known::GENERATED_LEGACY]
        .into_iter()
        .find(|name| env.find_type(name).is_some())?;
    Some(
        Annotation::marker(marker.clone())
            .with_member("value", AnnotationValue::String(GENERATOR_NAME.to_string()))
            .with_member(
                "comments",
                AnnotationValue::String(GENERATOR_COMMENTS.to_string()),
            ),
    )
}
