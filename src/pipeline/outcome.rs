use crate::article::Section;

use super::context::PipelineEvent;
use super::types::StageKind;

/// Terminal result returned by the pipeline orchestrator.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineOutcome {
    Completed { article: String },
    Failed { stage: StageKind, error: String },
}

impl PipelineOutcome {
    pub fn failed(stage: StageKind, error: impl Into<String>) -> Self {
        Self::Failed {
            stage,
            error: error.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineRun {
    pub outcome: PipelineOutcome,
    pub sections: Vec<Section>,
    pub events: Vec<PipelineEvent>,
}

impl PipelineRun {
    pub fn article(&self) -> Option<&str> {
        match &self.outcome {
            PipelineOutcome::Completed { article } => Some(article),
            PipelineOutcome::Failed { .. } => None,
        }
    }
}
