use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::article::{self, Section, StepwiseDraft, WrittenSection, response_to_list};
use crate::review::Reviewer;

use super::context::PipelineContext;
use super::types::StageKind;

#[async_trait]
pub trait PipelineStage: Send + Sync {
    fn kind(&self) -> StageKind;

    async fn execute(&self, context: &mut PipelineContext) -> Result<()>;
}

/// Generates and parses the section headers, then hands them to the reviewer if one is set.
pub struct OutlineStage {
    reviewer: Option<Arc<dyn Reviewer>>,
}

impl OutlineStage {
    pub fn new(reviewer: Option<Arc<dyn Reviewer>>) -> Self {
        Self { reviewer }
    }
}

#[async_trait]
impl PipelineStage for OutlineStage {
    fn kind(&self) -> StageKind {
        StageKind::Outline
    }

    async fn execute(&self, context: &mut PipelineContext) -> Result<()> {
        let generator = context.generator();
        let request = &context.request;
        let raw = article::generate_outline(
            generator.as_ref(),
            &request.title,
            &request.tags,
            &request.tone,
            context.settings.sections,
            &context.settings.presets.points,
        )
        .await?;

        let mut headers = response_to_list(&raw);
        if let Some(reviewer) = &self.reviewer {
            reviewer.review("Section headers", &mut headers)?;
        }

        context.record_outline(headers);
        Ok(())
    }
}

/// One talking-points call per header, in header order.
pub struct TalkingPointsStage {
    reviewer: Option<Arc<dyn Reviewer>>,
}

impl TalkingPointsStage {
    pub fn new(reviewer: Option<Arc<dyn Reviewer>>) -> Self {
        Self { reviewer }
    }
}

#[async_trait]
impl PipelineStage for TalkingPointsStage {
    fn kind(&self) -> StageKind {
        StageKind::TalkingPoints
    }

    async fn execute(&self, context: &mut PipelineContext) -> Result<()> {
        let generator = context.generator();
        let tone = context.request.tone.clone();
        let preset = context.settings.presets.points;

        for header in context.headers.clone() {
            let raw =
                article::generate_talking_points(generator.as_ref(), &header, &tone, &preset)
                    .await?;

            let mut points = response_to_list(&raw);
            if let Some(reviewer) = &self.reviewer {
                reviewer.review(&format!("Talking points for \"{header}\""), &mut points)?;
            }

            context.record_section(Section::new(header, points));
        }

        Ok(())
    }
}

/// Introduction, one paragraph per talking point, then a conclusion built from the
/// introduction.
pub struct StepwiseCompositionStage;

#[async_trait]
impl PipelineStage for StepwiseCompositionStage {
    fn kind(&self) -> StageKind {
        StageKind::Composition
    }

    async fn execute(&self, context: &mut PipelineContext) -> Result<()> {
        let generator = context.generator();
        let title = context.request.title.clone();
        let tone = context.request.tone.clone();
        let preset = context.settings.presets.prose;

        let intro = article::generate_intro_paragraph(
            generator.as_ref(),
            &title,
            &context.headers,
            &tone,
            &preset,
        )
        .await?;

        let mut written = Vec::with_capacity(context.sections.len());
        for section in &context.sections {
            let mut paragraphs = Vec::with_capacity(section.points.len());
            for point in &section.points {
                let paragraph =
                    article::generate_main_paragraph(generator.as_ref(), point, &tone, &preset)
                        .await?;
                paragraphs.push(paragraph);
            }
            written.push(WrittenSection {
                header: section.header.clone(),
                paragraphs,
            });
        }

        let conclusion = article::generate_conclusion_paragraph(
            generator.as_ref(),
            &title,
            &intro,
            &tone,
            &preset,
        )
        .await?;

        let draft = StepwiseDraft {
            intro,
            sections: written,
            conclusion,
        };
        context.record_article(draft.render());
        Ok(())
    }
}

/// Writes the complete article in a single call.
pub struct SingleCallCompositionStage;

#[async_trait]
impl PipelineStage for SingleCallCompositionStage {
    fn kind(&self) -> StageKind {
        StageKind::Composition
    }

    async fn execute(&self, context: &mut PipelineContext) -> Result<()> {
        let generator = context.generator();
        let text = article::generate_article(
            generator.as_ref(),
            &context.request.title,
            &context.sections,
            &context.request.tone,
            &context.settings.presets.prose,
        )
        .await?;

        context.record_article(text);
        Ok(())
    }
}
