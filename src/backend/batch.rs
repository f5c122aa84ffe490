//! Batch orchestration.
//!
//! One batch run validates every discovered declaration independently, synthesizes an
//! artifact for every valid intent, and renders the aggregate registration artifact.
//! Partial-failure isolation is first-class: a fatal problem on one declaration never
//! suppresses another declaration's artifact. The run is a pure function of its input, and
//! artifact ordering is by file key, so the same facts always produce byte-identical
//! output (the host relies on this for caching and incrementality).

use crate::backend::artifact::{GeneratedArtifact, RegistrationArtifact};
use crate::backend::emit::{EmitError, GenConfig, Synthesizer};
use crate::backend::strategy;
use crate::frontend::facts::DeclarationFacts;
use crate::frontend::intent::TypeIntent;
use crate::frontend::problems::Problem;
use crate::frontend::validator;

/// Everything one batch run produces.
#[derive(Debug, Clone)]
pub struct BatchOutput {
    /// One artifact per valid declaration, ordered by file key.
    pub artifacts: Vec<GeneratedArtifact>,
    /// Fatal problems and advisories, in input declaration order then check order.
    pub problems: Vec<Problem>,
    /// The single aggregate registration artifact.
    pub registration: RegistrationArtifact,
}

/// Batch orchestrator.
#[derive(Debug, Default)]
pub struct Batch {
    config: GenConfig,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GenConfig) -> Self {
        Self { config }
    }

    /// Run the full pipeline over one discovery pass.
    #[tracing::instrument(skip_all, fields(declaration_count = all_facts.len()))]
    pub fn run(&self, all_facts: &[DeclarationFacts]) -> Result<BatchOutput, EmitError> {
        let mut problems = Vec::new();
        let mut intents: Vec<TypeIntent> = Vec::new();

        for facts in all_facts {
            let validated = validator::validate(facts);
            problems.extend(validated.problems);
            if let Some(intent) = validated.intent {
                intents.push(intent);
            }
        }

        let synthesizer = Synthesizer::new(&self.config);
        let mut artifacts = Vec::with_capacity(intents.len());
        for intent in &intents {
            let plan = strategy::select(intent);
            artifacts.push(synthesizer.synthesize(intent, &plan)?);
        }
        artifacts.sort_by(|a, b| a.file_key.cmp(&b.file_key));

        let registration =
            synthesizer.synthesize_registration(&intents.iter().collect::<Vec<_>>())?;

        tracing::debug!(
            generated = artifacts.len(),
            excluded = all_facts.len() - intents.len(),
            "batch complete"
        );

        Ok(BatchOutput {
            artifacts,
            problems,
            registration,
        })
    }
}
