use std::fmt;
use std::sync::Arc;

use tracing::{info, warn};

use crate::article::{ArticleRequest, Section};
use crate::config::{AssemblyStrategy, Config, PresetSettings};
use crate::generation::DynTextGenerator;

use super::outcome::{PipelineOutcome, PipelineRun};
use super::types::StageKind;

/// Generation knobs for one run, taken from configuration so tests can substitute them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineSettings {
    pub sections: u32,
    pub presets: PresetSettings,
    pub strategy: AssemblyStrategy,
}

impl PipelineSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            sections: config.article.sections,
            presets: config.presets,
            strategy: config.article.strategy,
        }
    }
}

/// Mutable context threaded through the pipeline stages.
pub struct PipelineContext {
    pub request: ArticleRequest,
    pub settings: PipelineSettings,
    pub headers: Vec<String>,
    pub sections: Vec<Section>,
    pub article: Option<String>,
    events: Vec<PipelineEvent>,
    generator: Arc<DynTextGenerator>,
}

impl fmt::Debug for PipelineContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineContext")
            .field("request", &self.request)
            .field("settings", &self.settings)
            .field("headers", &self.headers)
            .field("sections", &self.sections)
            .field("article", &self.article)
            .field("events", &self.events)
            .finish()
    }
}

impl PipelineContext {
    pub fn new(
        generator: Arc<DynTextGenerator>,
        settings: PipelineSettings,
        request: ArticleRequest,
    ) -> Self {
        Self {
            request,
            settings,
            headers: Vec::new(),
            sections: Vec::new(),
            article: None,
            events: Vec::new(),
            generator,
        }
    }

    pub fn generator(&self) -> Arc<DynTextGenerator> {
        self.generator.clone()
    }

    pub fn events(&self) -> &[PipelineEvent] {
        &self.events
    }

    pub fn record_event(&mut self, event: PipelineEvent) {
        self.events.push(event);
    }

    pub fn record_message(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!("{message}");
        self.record_event(PipelineEvent::Message(message));
    }

    pub fn record_stage_start(&mut self, stage: StageKind) {
        info!(%stage, title = %self.request.title, "stage started");
        self.record_event(PipelineEvent::StageStarted(stage));
    }

    pub fn record_stage_end(&mut self, stage: StageKind) {
        info!(%stage, "stage completed");
        self.record_event(PipelineEvent::StageCompleted(stage));
    }

    pub fn record_stage_failure(&mut self, stage: StageKind, error: impl Into<String>) {
        let error = error.into();
        warn!(%stage, %error, "stage failed");
        self.record_event(PipelineEvent::StageFailed { stage, error });
    }

    pub fn record_outline(&mut self, headers: Vec<String>) {
        if headers.is_empty() {
            self.record_message("outline response contained no headers");
        }
        let count = headers.len();
        self.headers = headers;
        self.record_event(PipelineEvent::OutlineReady { headers: count });
    }

    pub fn record_section(&mut self, section: Section) {
        let event = PipelineEvent::PointsReady {
            header: section.header.clone(),
            points: section.points.len(),
        };
        self.sections.push(section);
        self.record_event(event);
    }

    pub fn record_article(&mut self, article: String) {
        let chars = article.chars().count();
        self.article = Some(article);
        self.record_event(PipelineEvent::DraftReady { chars });
    }

    pub fn into_run(self) -> PipelineRun {
        let PipelineContext {
            article,
            sections,
            events,
            ..
        } = self;

        let outcome = match article {
            Some(article) => PipelineOutcome::Completed { article },
            None => PipelineOutcome::failed(StageKind::Composition, "no article was produced"),
        };

        PipelineRun {
            outcome,
            sections,
            events,
        }
    }

    pub fn into_run_with_outcome(self, outcome: PipelineOutcome) -> PipelineRun {
        let PipelineContext {
            sections, events, ..
        } = self;
        PipelineRun {
            outcome,
            sections,
            events,
        }
    }
}

/// Structured audit events emitted while progressing through the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineEvent {
    StageStarted(StageKind),
    StageCompleted(StageKind),
    StageFailed { stage: StageKind, error: String },
    OutlineReady { headers: usize },
    PointsReady { header: String, points: usize },
    DraftReady { chars: usize },
    Message(String),
}
