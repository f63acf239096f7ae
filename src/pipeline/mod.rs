pub mod context;
pub mod orchestrator;
pub mod outcome;
pub mod stages;
pub mod types;

pub use context::{PipelineContext, PipelineEvent, PipelineSettings};
pub use orchestrator::{ArticlePipeline, PipelineBuilder};
pub use outcome::{PipelineOutcome, PipelineRun};
pub use stages::{
    OutlineStage, PipelineStage, SingleCallCompositionStage, StepwiseCompositionStage,
    TalkingPointsStage,
};
pub use types::StageKind;
