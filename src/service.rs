use std::sync::Arc;

use anyhow::{Result, anyhow};

use crate::article::{self, ArticleRequest, Section};
use crate::config::Config;
use crate::generation::{ChatGenerator, DynTextGenerator};
use crate::pipeline::{ArticlePipeline, PipelineOutcome, PipelineSettings};

/// Programmatic surface over the article operations. Each call returns the model's raw text.
pub struct ArticleService {
    generator: Arc<DynTextGenerator>,
    settings: PipelineSettings,
}

impl ArticleService {
    pub fn new(generator: Arc<DynTextGenerator>, settings: PipelineSettings) -> Self {
        Self {
            generator,
            settings,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let generator = Arc::new(ChatGenerator::from_config(config)?);
        Ok(Self::new(generator, PipelineSettings::from_config(config)))
    }

    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    pub fn generator(&self) -> Arc<DynTextGenerator> {
        self.generator.clone()
    }

    pub async fn generate_outline(
        &self,
        title: &str,
        keywords: &[String],
        tone: &str,
    ) -> Result<String> {
        article::generate_outline(
            self.generator.as_ref(),
            title,
            keywords,
            tone,
            self.settings.sections,
            &self.settings.presets.points,
        )
        .await
    }

    pub async fn generate_talking_points(&self, header: &str, tone: &str) -> Result<String> {
        article::generate_talking_points(
            self.generator.as_ref(),
            header,
            tone,
            &self.settings.presets.points,
        )
        .await
    }

    pub async fn generate_main_paragraph(&self, point: &str, tone: &str) -> Result<String> {
        article::generate_main_paragraph(
            self.generator.as_ref(),
            point,
            tone,
            &self.settings.presets.prose,
        )
        .await
    }

    pub async fn generate_intro_paragraph(
        &self,
        title: &str,
        headers: &[String],
        tone: &str,
    ) -> Result<String> {
        article::generate_intro_paragraph(
            self.generator.as_ref(),
            title,
            headers,
            tone,
            &self.settings.presets.prose,
        )
        .await
    }

    pub async fn generate_conclusion_paragraph(
        &self,
        title: &str,
        intro: &str,
        tone: &str,
    ) -> Result<String> {
        article::generate_conclusion_paragraph(
            self.generator.as_ref(),
            title,
            intro,
            tone,
            &self.settings.presets.prose,
        )
        .await
    }

    pub async fn generate_article(
        &self,
        title: &str,
        sections: &[Section],
        tone: &str,
    ) -> Result<String> {
        article::generate_article(
            self.generator.as_ref(),
            title,
            sections,
            tone,
            &self.settings.presets.prose,
        )
        .await
    }

    /// Runs the whole pipeline without review and returns the final article text.
    pub async fn generate(&self, title: &str, tone: &str, tags: &[String]) -> Result<String> {
        let request = ArticleRequest::new(title, tone, tags.to_vec());
        let run = ArticlePipeline::builder(self.generator.clone(), self.settings)
            .build()
            .run(request)
            .await?;

        match run.outcome {
            PipelineOutcome::Completed { article } => Ok(article),
            PipelineOutcome::Failed { stage, error } => {
                Err(anyhow!("Article {} stage failed: {}", stage, error))
            }
        }
    }
}
