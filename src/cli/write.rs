use anyhow::{Result, anyhow, bail};
use colored::*;
use std::path::{Path, PathBuf};

use crate::article::ArticleRequest;
use crate::config::Config;
use crate::output;
use crate::pipeline::{ArticlePipeline, PipelineOutcome};
use crate::review::ConsoleReviewer;
use crate::service::ArticleService;

use super::args::WriteArgs;
use super::util::{prompt_line, prompt_required, prompt_string_with_default, resolve_strategy};

const DEFAULT_TONE: &str = "informative";

#[derive(Debug)]
pub(crate) struct DraftedArticle {
    pub path: PathBuf,
    pub sections: usize,
    pub chars: usize,
}

pub(crate) async fn handle_write(args: WriteArgs, config: &Config) -> Result<()> {
    let title = match args.title {
        Some(title) if !title.trim().is_empty() => title.trim().to_string(),
        _ => prompt_required("📰 Article title: ")?,
    };
    let output_dir = args
        .output_dir
        .unwrap_or_else(|| config.article.output_dir.clone());
    output::check_target(&output_dir, &title)?;

    let tone = match args.tone {
        Some(tone) => tone,
        None => prompt_string_with_default("🎙️  Tone", DEFAULT_TONE)?,
    };
    let tags = match args.tags {
        Some(tags) => ArticleRequest::parse_tags(&tags),
        None => ArticleRequest::parse_tags(&prompt_line("🏷️  Tags (comma separated): ")?),
    };
    let strategy = resolve_strategy(args.strategy.as_deref(), config.article.strategy)?;

    let service = ArticleService::from_config(config)?;
    let mut builder = ArticlePipeline::builder(service.generator(), *service.settings())
        .with_strategy(strategy);
    if !args.no_review {
        builder = builder.with_reviewer(ConsoleReviewer::stdio());
    }

    println!(
        "\n✍️  Drafting \"{}\" ({} tone, {} strategy)...",
        title.bold(),
        tone,
        strategy
    );

    let request = ArticleRequest::new(title, tone, tags);
    let drafted = draft_article(&builder.build(), request, &output_dir)
        .await
        .map_err(|err| {
            let message = err.to_string();
            anyhow!("{message}. {}", failure_guidance(&message, config))
        })?;

    println!(
        "\n{} {}",
        "✅ Article saved to".green(),
        drafted.path.display().to_string().bold()
    );
    println!(
        "   {} sections, {} characters",
        drafted.sections, drafted.chars
    );
    Ok(())
}

/// Runs the pipeline and writes `{title}.txt` into `dir`. Nothing is written when a stage fails.
pub(crate) async fn draft_article(
    pipeline: &ArticlePipeline,
    request: ArticleRequest,
    dir: &Path,
) -> Result<DraftedArticle> {
    let title = request.title.clone();
    let run = pipeline.run(request).await?;

    match run.outcome {
        PipelineOutcome::Completed { article } => {
            let path = output::write_article(dir, &title, &article)?;
            Ok(DraftedArticle {
                path,
                sections: run.sections.len(),
                chars: article.chars().count(),
            })
        }
        PipelineOutcome::Failed { stage, error } => {
            bail!("Article {} stage failed: {}", stage, error)
        }
    }
}

fn failure_guidance(message: &str, config: &Config) -> String {
    if message.contains("Invalid item number") || message.contains("out of range") {
        "Enter the number shown next to the item you want to replace.".to_string()
    } else {
        format!(
            "Verify your {} API key (set {} or run 'articlegen --setup') and your network connection. Retry if the service is rate limited.",
            config.llm.provider.display_name(),
            config.llm.provider.api_key_env_var()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::fs;
    use std::sync::Arc;
    use tempfile::TempDir;

    use crate::config::{AssemblyStrategy, PresetSettings};
    use crate::pipeline::PipelineSettings;
    use crate::testing::ScriptedGenerator;

    fn pipeline(generator: ScriptedGenerator, strategy: AssemblyStrategy) -> ArticlePipeline {
        let settings = PipelineSettings {
            sections: 3,
            presets: PresetSettings::default(),
            strategy,
        };
        ArticlePipeline::builder(Arc::new(generator), settings).build()
    }

    fn guide_request() -> ArticleRequest {
        ArticleRequest::new("A Guide to Testing", "informative", vec!["tdd".to_string()])
    }

    #[tokio::test]
    async fn completed_run_is_saved_under_title() {
        let dir = TempDir::new().unwrap();
        let pipeline = pipeline(
            ScriptedGenerator::article_fixture(),
            AssemblyStrategy::Stepwise,
        );

        let drafted = draft_article(&pipeline, guide_request(), dir.path())
            .await
            .unwrap();

        let expected = dir.path().join("A Guide to Testing.txt");
        assert_eq!(drafted.path, expected);
        assert_eq!(drafted.sections, 3);
        let text = fs::read_to_string(&expected).unwrap();
        assert!(!text.is_empty());
        assert!(text.starts_with("Intro paragraph."));
        assert_eq!(drafted.chars, text.chars().count());
    }

    #[tokio::test]
    async fn failed_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let generator = ScriptedGenerator::new(|prompt| {
            if prompt.starts_with("Write a technical article") {
                Err(anyhow!("connection reset"))
            } else {
                Ok("1. A\n2. B".to_string())
            }
        });
        let pipeline = pipeline(generator, AssemblyStrategy::SingleCall);

        let err = draft_article(&pipeline, guide_request(), dir.path())
            .await
            .unwrap_err();

        assert!(err.to_string().starts_with("Article composition stage failed"));
        assert!(err.to_string().contains("connection reset"));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn guidance_points_at_index_or_credentials() {
        let config = Config::builder().build().unwrap();

        assert!(failure_guidance("Item number 4 is out of range (1-3)", &config)
            .starts_with("Enter the number"));
        let credentials = failure_guidance("Invalid OpenRouter API key", &config);
        assert!(credentials.contains(config.llm.provider.api_key_env_var()));
    }
}
