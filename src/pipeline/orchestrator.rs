use std::sync::Arc;

use anyhow::Result;

use crate::article::ArticleRequest;
use crate::config::AssemblyStrategy;
use crate::generation::DynTextGenerator;
use crate::review::Reviewer;

use super::context::{PipelineContext, PipelineSettings};
use super::outcome::{PipelineOutcome, PipelineRun};
use super::stages::{
    OutlineStage, PipelineStage, SingleCallCompositionStage, StepwiseCompositionStage,
    TalkingPointsStage,
};

/// Runs the article stages strictly in order. The first failing stage ends the run with a
/// `Failed` outcome; nothing produced before it is kept as output.
pub struct ArticlePipeline {
    generator: Arc<DynTextGenerator>,
    settings: PipelineSettings,
    stages: Vec<Box<dyn PipelineStage>>,
}

impl ArticlePipeline {
    pub fn builder(generator: Arc<DynTextGenerator>, settings: PipelineSettings) -> PipelineBuilder {
        PipelineBuilder::new(generator, settings)
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    pub async fn run(&self, request: ArticleRequest) -> Result<PipelineRun> {
        let mut context = PipelineContext::new(self.generator.clone(), self.settings, request);

        for stage in &self.stages {
            let kind = stage.kind();
            context.record_stage_start(kind);
            match stage.execute(&mut context).await {
                Ok(()) => context.record_stage_end(kind),
                Err(error) => {
                    let message = format!("{error:#}");
                    context.record_stage_failure(kind, &message);
                    let outcome = PipelineOutcome::failed(kind, message);
                    return Ok(context.into_run_with_outcome(outcome));
                }
            }
        }

        Ok(context.into_run())
    }
}

pub struct PipelineBuilder {
    generator: Arc<DynTextGenerator>,
    settings: PipelineSettings,
    reviewer: Option<Arc<dyn Reviewer>>,
    stages: Vec<Box<dyn PipelineStage>>,
}

impl PipelineBuilder {
    pub fn new(generator: Arc<DynTextGenerator>, settings: PipelineSettings) -> Self {
        Self {
            generator,
            settings,
            reviewer: None,
            stages: Vec::new(),
        }
    }

    pub fn with_reviewer<R>(mut self, reviewer: R) -> Self
    where
        R: Reviewer + 'static,
    {
        self.reviewer = Some(Arc::new(reviewer));
        self
    }

    pub fn with_strategy(mut self, strategy: AssemblyStrategy) -> Self {
        self.settings.strategy = strategy;
        self
    }

    /// Custom stages replace the standard outline, talking-points and composition stages.
    pub fn add_stage<S>(mut self, stage: S) -> Self
    where
        S: PipelineStage + 'static,
    {
        self.stages.push(Box::new(stage));
        self
    }

    pub fn build(self) -> ArticlePipeline {
        let stages = if self.stages.is_empty() {
            standard_stages(self.settings.strategy, self.reviewer)
        } else {
            self.stages
        };

        ArticlePipeline {
            generator: self.generator,
            settings: self.settings,
            stages,
        }
    }
}

fn standard_stages(
    strategy: AssemblyStrategy,
    reviewer: Option<Arc<dyn Reviewer>>,
) -> Vec<Box<dyn PipelineStage>> {
    let composition: Box<dyn PipelineStage> = match strategy {
        AssemblyStrategy::Stepwise => Box::new(StepwiseCompositionStage),
        AssemblyStrategy::SingleCall => Box::new(SingleCallCompositionStage),
    };

    vec![
        Box::new(OutlineStage::new(reviewer.clone())),
        Box::new(TalkingPointsStage::new(reviewer)),
        composition,
    ]
}
