//! Compilation driver tests

use crate::test_utils::*;
use finject_domain::{AnnotationValue, Error, Modifier, TypeDeclaration};
use finject_infrastructure::config::ConfigBuilder;
use finject_infrastructure::{Compilation, FilesystemFiler, InMemoryEnvironment, MemoryFiler};
use finject_processor::{InjectViolation, ProcessorOptions, Violation};

fn run(env: InMemoryEnvironment) -> (MemoryFiler, finject_infrastructure::CompilationOutcome) {
    let mut filer = MemoryFiler::new();
    let outcome = Compilation::default().run(env, &mut filer).unwrap();
    (filer, outcome)
}

#[test]
fn test_single_target_with_module() {
    let env = InMemoryEnvironment::from_graph(single_target_graph()).unwrap();
    let (filer, outcome) = run(env);

    assert!(outcome.violations.is_empty(), "{:?}", outcome.violations);
    assert!(outcome.passed());
    assert_eq!(
        outcome.generated,
        [
            class("test.TestFragment_InjectFactory"),
            class("test.FragmentInject_TestModule"),
        ]
    );
    assert_eq!(filer.sources().len(), 2);
    // generating round, settling round, terminal round
    assert_eq!(outcome.rounds, 3);
    assert!(outcome.state.pending.is_empty());
}

#[test]
fn test_empty_program_runs_terminal_round() {
    let (filer, outcome) = run(environment(Vec::new()));
    assert!(filer.sources().is_empty());
    assert_eq!(outcome.rounds, 2);
    assert!(outcome.passed());
}

#[test]
fn test_targets_without_aggregator() {
    let env = environment(vec![
        long_fragment("test.AFragment"),
        long_fragment("test.BFragment"),
    ]);
    let (_, outcome) = run(env);

    assert!(outcome.violations.is_empty());
    assert_eq!(
        outcome.generated,
        [
            class("test.AFragment_InjectFactory"),
            class("test.BFragment_InjectFactory"),
        ]
    );
}

#[test]
fn test_missing_include_fails_compilation() {
    let env = environment(vec![
        long_fragment("test.TestFragment"),
        aggregator("test.TestModule", Vec::new()),
    ]);
    let (filer, outcome) = run(env);

    assert_eq!(filer.sources().len(), 2);
    assert!(!outcome.passed());
    match outcome.violations.as_slice() {
        [InjectViolation::MissingInclude { element, generated }] => {
            assert_eq!(element, &class("test.TestModule"));
            assert_eq!(generated, "FragmentInject_TestModule");
        }
        other => panic!("Expected MissingInclude, got {other:?}"),
    }
}

#[test]
fn test_include_written_as_simple_name_resolves_once_generated() {
    let env = environment(vec![aggregator(
        "test.TestModule",
        vec![AnnotationValue::Error("FragmentInject_TestModule".to_string())],
    )]);
    let (_, outcome) = run(env);
    assert!(outcome.violations.is_empty(), "{:?}", outcome.violations);
}

#[test]
fn test_include_of_other_type_is_missing() {
    let env = environment(vec![
        TypeDeclaration::class(class("test.OtherModule")),
        aggregator(
            "test.TestModule",
            vec![AnnotationValue::class(class("test.OtherModule"))],
        ),
    ]);
    let (_, outcome) = run(env);
    assert_eq!(outcome.violations.len(), 1);
    assert_eq!(outcome.violations[0].id(), "FI008");
}

#[test]
fn test_invalid_targets_are_reported_and_skipped() {
    let env = environment(vec![
        long_fragment("test.GoodFragment"),
        long_fragment("test.BadFragment").with_modifier(Modifier::Private),
        including_aggregator("test.TestModule"),
    ]);
    let (filer, outcome) = run(env);

    assert_eq!(outcome.violations.len(), 1);
    assert_eq!(outcome.violations[0].id(), "FI001");
    let module = filer.source("test.FragmentInject_TestModule").unwrap();
    assert!(module.contains("bind_test_GoodFragment"));
    assert!(!module.contains("BadFragment"));
}

#[test]
fn test_two_aggregators_generate_no_module() {
    let env = environment(vec![
        long_fragment("test.TestFragment"),
        including_aggregator("test.OneModule"),
        including_aggregator("test.TwoModule"),
    ]);
    let (_, outcome) = run(env);

    assert_eq!(outcome.generated, [class("test.TestFragment_InjectFactory")]);
    assert_eq!(outcome.violations.len(), 2);
    assert!(outcome.violations.iter().all(|v| v.id() == "FI006"));
}

#[test]
fn test_round_limit() {
    let env = InMemoryEnvironment::from_graph(single_target_graph()).unwrap();
    let mut filer = MemoryFiler::new();
    let result = Compilation::new(ProcessorOptions::default(), 1).run(env, &mut filer);
    assert!(matches!(result, Err(Error::Internal { .. })));
}

#[test]
fn test_compilation_from_config() {
    let mut config = ConfigBuilder::new().build();
    config.processor.generated_annotation = false;
    config.output.file_comment = String::new();

    let env = InMemoryEnvironment::from_graph(single_target_graph()).unwrap();
    let mut filer = MemoryFiler::new();
    Compilation::from_config(&config)
        .run(env, &mut filer)
        .unwrap();

    let factory = filer.source("test.TestFragment_InjectFactory").unwrap();
    assert!(factory.starts_with("package test;"));
    assert!(!factory.contains("@Generated"));
}

#[test]
fn test_writes_sources_to_disk() {
    let temp_dir = tempfile::tempdir().unwrap();
    let env = InMemoryEnvironment::from_graph(single_target_graph()).unwrap();
    let mut filer = FilesystemFiler::new(temp_dir.path());
    let outcome = Compilation::default().run(env, &mut filer).unwrap();

    assert!(outcome.passed());
    assert_eq!(filer.written_paths().len(), 2);
    assert!(temp_dir
        .path()
        .join("test/TestFragment_InjectFactory.java")
        .is_file());
    assert!(temp_dir
        .path()
        .join("test/FragmentInject_TestModule.java")
        .is_file());
}

#[test]
fn test_report_summarizes_outcome() {
    let env = environment(vec![
        long_fragment("test.TestFragment"),
        aggregator("test.TestModule", Vec::new()),
    ]);
    let (_, outcome) = run(env);
    let report = outcome.report(vec!["program.yaml".into()]);

    assert_eq!(report.rounds, 3);
    assert_eq!(report.summary.generated_count, 2);
    assert_eq!(report.summary.consistency_count, 1);
    assert_eq!(report.summary.error_count, 1);
    assert!(!report.summary.passed);
    assert_eq!(
        report.generated,
        ["test.TestFragment_InjectFactory", "test.FragmentInject_TestModule"]
    );
}
