//! Round coordination
//!
//! [`FragmentInjectProcessor::process`] runs once per compilation round. All cross-round memory
//! lives in [`RoundState`], passed in and handed back, so a round is a function of the state,
//! the environment, and the processing-over signal.
//!
//! The registration module is emitted once, in the round that first sees the aggregator. Its
//! `@Module(includes = ...)` can only name the generated module after that module exists, so
//! that check is queued and evaluated on the terminal round.

use crate::diagnostics::DiagnosticSink;
use crate::factory::FragmentInjection;
use crate::generated::create_generated_annotation;
use crate::module::{find_fragment_module, FragmentModuleElements};
use crate::options::{LateTargetPolicy, ProcessorOptions};
use crate::query::DeclarationQueries;
use crate::validator::TargetValidator;
use crate::violations::InjectViolation;
use finject_domain::constants::MODULE_INCLUDES;
use finject_domain::value_objects::well_known;
use finject_domain::{
    AnnotationValue, ArtifactWriter, ClassName, DeclarationEnvironment, JavaFile, Result,
};
use serde::Serialize;
use tracing::{debug, info, warn};

/// A check deferred to the terminal round
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PendingAssertion {
    /// `aggregator`'s `@Module(includes = ...)` must name `generated`
    ModuleIncludes {
        aggregator: ClassName,
        generated: ClassName,
    },
}

/// State carried from one round to the next
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoundState {
    /// Rounds processed so far
    pub round: usize,
    /// Every target validated so far, in discovery order
    pub known_targets: Vec<ClassName>,
    /// Assertions checked on the terminal round
    ///
    /// A queued `ModuleIncludes` also marks its aggregator's module as emitted, so an
    /// aggregator seen again in a later round is skipped. Cleared once checked.
    pub pending: Vec<PendingAssertion>,
}

impl RoundState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registration module emitted in an earlier round, if any
    pub fn registered_module(&self) -> Option<&ClassName> {
        self.pending.iter().find_map(|assertion| match assertion {
            PendingAssertion::ModuleIncludes { generated, .. } => Some(generated),
        })
    }

    fn has_pending_for(&self, aggregator: &ClassName) -> bool {
        self.pending.iter().any(|assertion| match assertion {
            PendingAssertion::ModuleIncludes { aggregator: a, .. } => a == aggregator,
        })
    }

    fn push_pending(&mut self, assertion: PendingAssertion) {
        if !self.pending.contains(&assertion) {
            self.pending.push(assertion);
        }
    }
}

/// Result of one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub state: RoundState,
    /// Types written this round, in write order
    pub generated: Vec<ClassName>,
}

/// Validates targets and the aggregator and emits factories and the registration module
#[derive(Debug, Clone, Default)]
pub struct FragmentInjectProcessor {
    options: ProcessorOptions,
}

impl FragmentInjectProcessor {
    pub fn new(options: ProcessorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ProcessorOptions {
        &self.options
    }

    /// Run one round
    ///
    /// Diagnostics go to `sink` and never stop the round. Only a failing `writer` returns an
    /// error.
    pub fn process(
        &self,
        mut state: RoundState,
        env: &dyn DeclarationEnvironment,
        processing_over: bool,
        writer: &mut dyn ArtifactWriter,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<RoundOutcome> {
        state.round += 1;
        let queries = DeclarationQueries::new(env);
        let generated_annotation = if self.options.generated_annotation {
            create_generated_annotation(env)
        } else {
            None
        };
        let mut generated = Vec::new();
        debug!(round = state.round, processing_over, "Processing round");

        let validator = TargetValidator::new(queries);
        let late_module = state.registered_module().cloned();
        for candidate in queries.inject_candidates() {
            let Some(elements) = validator.validate(candidate, sink) else {
                continue;
            };
            let injection =
                FragmentInjection::from_elements(&elements, &queries, generated_annotation.clone());
            let file = injection.to_java_file(self.options.file_comment.as_deref());
            self.write(writer, &file, &mut generated)?;

            let target = &candidate.name;
            if !state.known_targets.contains(target) {
                state.known_targets.push(target.clone());
            }
            if let Some(module) = &late_module {
                self.report_late_target(target, module, sink);
            }
        }

        let module_candidates = queries.module_candidates();
        if let Some(module_type) = find_fragment_module(&module_candidates, sink) {
            let module_elements = FragmentModuleElements::validate(
                module_type,
                state.known_targets.clone(),
                &queries,
                sink,
            );
            if let Some(module_elements) = module_elements {
                let aggregator = &module_type.name;
                if state.has_pending_for(aggregator) {
                    debug!(aggregator = %aggregator, "Registration module already generated");
                } else {
                    let module = module_elements
                        .to_fragment_injection_module(generated_annotation.clone());
                    let file = module.to_java_file(self.options.file_comment.as_deref());
                    self.write(writer, &file, &mut generated)?;
                    state.push_pending(PendingAssertion::ModuleIncludes {
                        aggregator: aggregator.clone(),
                        generated: module.generated_type(),
                    });
                }
            }
        }

        if processing_over {
            for assertion in std::mem::take(&mut state.pending) {
                check_assertion(&assertion, env, sink);
            }
        }

        Ok(RoundOutcome { state, generated })
    }

    fn write(
        &self,
        writer: &mut dyn ArtifactWriter,
        file: &JavaFile,
        generated: &mut Vec<ClassName>,
    ) -> Result<()> {
        writer.write(file)?;
        let name = file.class_name();
        info!(generated = %name, "Generated artifact");
        generated.push(name);
        Ok(())
    }

    fn report_late_target(
        &self,
        target: &ClassName,
        module: &ClassName,
        sink: &mut dyn DiagnosticSink,
    ) {
        match self.options.late_targets {
            LateTargetPolicy::Warn => sink.report(InjectViolation::UnregisteredTarget {
                element: target.clone(),
                module: module.clone(),
            }),
            LateTargetPolicy::Ignore => {
                debug!(target_type = %target, module = %module, "Target not registered in module");
            }
        }
    }
}

fn check_assertion(
    assertion: &PendingAssertion,
    env: &dyn DeclarationEnvironment,
    sink: &mut dyn DiagnosticSink,
) {
    match assertion {
        PendingAssertion::ModuleIncludes {
            aggregator,
            generated,
        } => {
            // Re-resolve: the includes read in earlier rounds could not name the generated type
            if env.find_type(aggregator).is_none() {
                warn!(aggregator = %aggregator, "Aggregator no longer resolvable, skipping include check");
                return;
            }
            let includes = env.read_annotation_value(
                aggregator,
                &well_known::DAGGER_MODULE,
                MODULE_INCLUDES,
            );
            let referenced = includes.as_ref().is_some_and(|value| {
                value.elements().into_iter().any(|element| match element {
                    AnnotationValue::Class(type_name) => {
                        type_name.raw_class_name() == Some(generated)
                    }
                    _ => false,
                })
            });
            if !referenced {
                sink.report(InjectViolation::MissingInclude {
                    element: aggregator.clone(),
                    generated: generated.simple_name().to_string(),
                });
            }
        }
    }
}
