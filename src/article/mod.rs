//! Article generation operations: prompt assembly, list parsing, and one async call per
//! generation step.

mod parsing;
mod prompt;
mod types;

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::GenerationPreset;
use crate::generation::DynTextGenerator;

pub use parsing::response_to_list;
pub use prompt::{
    POINTS_PER_SECTION, article_prompt, conclusion_prompt, intro_prompt, outline_prompt,
    paragraph_prompt, talking_points_prompt,
};
pub use types::{ArticleRequest, Section, StepwiseDraft, WrittenSection};

/// Requests `sections` headers for the article; returns the raw list response.
pub async fn generate_outline(
    generator: &DynTextGenerator,
    title: &str,
    keywords: &[String],
    tone: &str,
    sections: u32,
    preset: &GenerationPreset,
) -> Result<String> {
    let prompt = outline_prompt(title, keywords, tone, sections);
    debug!(%title, sections, "requesting outline");
    generator
        .generate(&prompt, preset)
        .await
        .with_context(|| format!("Failed to generate outline for '{title}'"))
}

pub async fn generate_talking_points(
    generator: &DynTextGenerator,
    header: &str,
    tone: &str,
    preset: &GenerationPreset,
) -> Result<String> {
    let prompt = talking_points_prompt(header, tone);
    debug!(%header, "requesting talking points");
    generator
        .generate(&prompt, preset)
        .await
        .with_context(|| format!("Failed to generate talking points for '{header}'"))
}

pub async fn generate_main_paragraph(
    generator: &DynTextGenerator,
    point: &str,
    tone: &str,
    preset: &GenerationPreset,
) -> Result<String> {
    let prompt = paragraph_prompt(point, tone);
    debug!(%point, "requesting paragraph");
    generator
        .generate(&prompt, preset)
        .await
        .with_context(|| format!("Failed to generate paragraph for '{point}'"))
}

pub async fn generate_intro_paragraph(
    generator: &DynTextGenerator,
    title: &str,
    headers: &[String],
    tone: &str,
    preset: &GenerationPreset,
) -> Result<String> {
    let prompt = intro_prompt(title, headers, tone);
    generator
        .generate(&prompt, preset)
        .await
        .context("Failed to generate introduction paragraph")
}

pub async fn generate_conclusion_paragraph(
    generator: &DynTextGenerator,
    title: &str,
    intro: &str,
    tone: &str,
    preset: &GenerationPreset,
) -> Result<String> {
    let prompt = conclusion_prompt(title, intro, tone);
    generator
        .generate(&prompt, preset)
        .await
        .context("Failed to generate conclusion paragraph")
}

/// Writes the whole article in a single call from the reviewed sections.
pub async fn generate_article(
    generator: &DynTextGenerator,
    title: &str,
    sections: &[Section],
    tone: &str,
    preset: &GenerationPreset,
) -> Result<String> {
    let prompt = article_prompt(title, sections, tone);
    debug!(%title, sections = sections.len(), "requesting full article");
    generator
        .generate(&prompt, preset)
        .await
        .with_context(|| format!("Failed to generate article '{title}'"))
}
