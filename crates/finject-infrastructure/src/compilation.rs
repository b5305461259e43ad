//! Compilation driver
//!
//! Runs processor rounds the way an annotation-processing compiler does. The first round sees
//! every source declaration; each later round sees only what the previous round generated. Once
//! a round generates nothing, one terminal round runs with the processing-over signal and no
//! roots.

use crate::adapters::InMemoryEnvironment;
use crate::config::AppConfig;
use crate::constants::DEFAULT_MAX_ROUNDS;
use finject_domain::error::{Error, Result};
use finject_domain::{ArtifactWriter, ClassName, JavaFile};
use finject_processor::{
    CollectingSink, FragmentInjectProcessor, InjectViolation, ProcessingReport, ProcessorOptions,
    RoundState, Violation,
};
use std::path::PathBuf;
use tracing::{debug, info};

/// Result of a full compilation
#[derive(Debug, Clone)]
pub struct CompilationOutcome {
    /// Rounds run, the terminal round included
    pub rounds: usize,
    /// Every generated type, in write order
    pub generated: Vec<ClassName>,
    pub violations: Vec<InjectViolation>,
    /// Round state after the terminal round
    pub state: RoundState,
}

impl CompilationOutcome {
    /// No error-level violation was reported
    pub fn passed(&self) -> bool {
        !self.violations.iter().any(Violation::is_error)
    }

    pub fn report(&self, inputs: Vec<PathBuf>) -> ProcessingReport {
        ProcessingReport::new(
            inputs,
            self.rounds,
            &self.generated,
            self.violations.clone(),
        )
    }
}

/// Drives a [`FragmentInjectProcessor`] over an [`InMemoryEnvironment`]
#[derive(Debug, Clone)]
pub struct Compilation {
    processor: FragmentInjectProcessor,
    max_rounds: usize,
}

impl Default for Compilation {
    fn default() -> Self {
        Self::new(ProcessorOptions::default(), DEFAULT_MAX_ROUNDS)
    }
}

impl Compilation {
    pub fn new(options: ProcessorOptions, max_rounds: usize) -> Self {
        Self {
            processor: FragmentInjectProcessor::new(options),
            max_rounds,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.processor_options(), config.processor.max_rounds)
    }

    pub fn processor(&self) -> &FragmentInjectProcessor {
        &self.processor
    }

    /// Run every round over `env`, writing through `writer`
    ///
    /// Fails if the writer fails or if generation does not settle within the round limit.
    pub fn run(
        &self,
        mut env: InMemoryEnvironment,
        writer: &mut dyn ArtifactWriter,
    ) -> Result<CompilationOutcome> {
        let mut state = RoundState::new();
        let mut sink = CollectingSink::new();
        let mut generated = Vec::new();

        loop {
            if state.round >= self.max_rounds {
                return Err(Error::internal(format!(
                    "Generation did not settle within {} rounds",
                    self.max_rounds
                )));
            }
            let mut recorder = RecordingWriter::new(writer);
            let outcome = self
                .processor
                .process(state, &env, false, &mut recorder, &mut sink)?;
            state = outcome.state;
            generated.extend(outcome.generated);

            let written = recorder.into_written();
            debug!(
                round = state.round,
                roots = env.roots().len(),
                generated = written.len(),
                "Round finished"
            );
            if written.is_empty() {
                break;
            }
            let roots = written
                .iter()
                .map(|file| env.register_generated(file))
                .collect::<Result<Vec<_>>>()?;
            env.set_roots(roots);
        }

        env.set_roots(Vec::new());
        let outcome = self
            .processor
            .process(state, &env, true, writer, &mut sink)?;
        generated.extend(outcome.generated);

        let violations = sink.into_violations();
        info!(
            rounds = outcome.state.round,
            generated = generated.len(),
            violations = violations.len(),
            "Compilation finished"
        );
        Ok(CompilationOutcome {
            rounds: outcome.state.round,
            generated,
            violations,
            state: outcome.state,
        })
    }
}

/// Forwards writes and remembers what was written in the current round
struct RecordingWriter<'a> {
    inner: &'a mut dyn ArtifactWriter,
    written: Vec<JavaFile>,
}

impl<'a> RecordingWriter<'a> {
    fn new(inner: &'a mut dyn ArtifactWriter) -> Self {
        Self {
            inner,
            written: Vec::new(),
        }
    }

    fn into_written(self) -> Vec<JavaFile> {
        self.written
    }
}

impl ArtifactWriter for RecordingWriter<'_> {
    fn write(&mut self, file: &JavaFile) -> Result<()> {
        self.inner.write(file)?;
        self.written.push(file.clone());
        Ok(())
    }
}
