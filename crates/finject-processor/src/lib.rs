//! FragmentInject processor
//!
//! Validates `@FragmentInject` targets and the `@FragmentModule` aggregator of a program and
//! describes the code generated for them:
//! - one `<Target>_InjectFactory` per valid target
//! - one `FragmentInject_<Aggregator>` module binding every factory into the fragment map
//!
//! The processor runs once per compilation round against a
//! [`DeclarationEnvironment`](finject_domain::DeclarationEnvironment) and writes through an
//! [`ArtifactWriter`](finject_domain::ArtifactWriter).
//!
//! ```ignore
//! use finject_processor::{CollectingSink, FragmentInjectProcessor, RoundState};
//!
//! let processor = FragmentInjectProcessor::default();
//! let mut sink = CollectingSink::new();
//! let outcome = processor.process(RoundState::new(), &env, false, &mut writer, &mut sink)?;
//! let outcome = processor.process(outcome.state, &env, true, &mut writer, &mut sink)?;
//! ```

pub mod violation_trait;
#[macro_use]
pub mod violation_macro;
pub mod violations;

pub mod dependency_request;
pub mod diagnostics;
pub mod factory;
pub mod generated;
pub mod key;
pub mod module;
pub mod options;
pub mod processor;
pub mod query;
pub mod reporter;
pub mod validator;

pub use dependency_request::DependencyRequest;
pub use diagnostics::{CollectingSink, DiagnosticSink};
pub use factory::{inject_factory_name, FragmentInjection};
pub use generated::create_generated_annotation;
pub use key::Key;
pub use module::{bind_method_name, fragment_inject_module_name, FragmentInjectionModule};
pub use options::{LateTargetPolicy, ProcessorOptions};
pub use processor::{FragmentInjectProcessor, PendingAssertion, RoundOutcome, RoundState};
pub use query::DeclarationQueries;
pub use reporter::{ProcessingReport, ProcessingSummary, Reporter};
pub use validator::{FragmentInjectElements, TargetValidator};
pub use violation_trait::{Severity, Violation, ViolationCategory};
pub use violations::InjectViolation;
