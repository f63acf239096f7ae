use anyhow::Result;

use crate::article::{ArticleRequest, response_to_list};
use crate::config::Config;
use crate::output;
use crate::pipeline::PipelineSettings;
use crate::service::ArticleService;

use super::args::{GenerateArgs, OutlineArgs, ParagraphArgs, PointsArgs};
use super::util::resolve_strategy;

fn print_numbered(items: &[String]) {
    if items.is_empty() {
        println!("   (the model returned no list items)");
    }
    for (idx, item) in items.iter().enumerate() {
        println!("  {}. {}", idx + 1, item);
    }
}

pub(crate) async fn handle_outline(args: OutlineArgs, config: &Config) -> Result<()> {
    let service = ArticleService::from_config(config)?;
    let tags = ArticleRequest::parse_tags(&args.tags);
    let raw = service.generate_outline(&args.title, &tags, &args.tone).await?;

    println!("📋 Outline for \"{}\":", args.title);
    println!("{}", raw.trim());
    println!("\n🔎 Parsed headers:");
    print_numbered(&response_to_list(&raw));
    Ok(())
}

pub(crate) async fn handle_points(args: PointsArgs, config: &Config) -> Result<()> {
    let service = ArticleService::from_config(config)?;
    let raw = service.generate_talking_points(&args.header, &args.tone).await?;

    println!("💬 Talking points for \"{}\":", args.header);
    print_numbered(&response_to_list(&raw));
    Ok(())
}

pub(crate) async fn handle_paragraph(args: ParagraphArgs, config: &Config) -> Result<()> {
    let service = ArticleService::from_config(config)?;
    let paragraph = service.generate_main_paragraph(&args.point, &args.tone).await?;
    println!("{}", paragraph.trim());
    Ok(())
}

pub(crate) async fn handle_generate(args: GenerateArgs, config: &Config) -> Result<()> {
    if args.save {
        output::check_target(&config.article.output_dir, &args.title)?;
    }
    let strategy = resolve_strategy(args.strategy.as_deref(), config.article.strategy)?;
    let mut settings = PipelineSettings::from_config(config);
    settings.strategy = strategy;

    let base = ArticleService::from_config(config)?;
    let service = ArticleService::new(base.generator(), settings);
    let tags = ArticleRequest::parse_tags(&args.tags);
    let article = service.generate(&args.title, &args.tone, &tags).await?;

    println!("{}", article.trim_end());

    if args.save {
        let path = output::write_article(&config.article.output_dir, &args.title, &article)?;
        eprintln!("✅ Article saved to {}", path.display());
    }
    Ok(())
}
