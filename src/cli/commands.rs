use anyhow::Result;

use crate::config::Config;

use super::args::{Cli, Command, WriteArgs};
use super::config_cmd;
use super::operations;
use super::setup;
use super::write;

pub(crate) async fn run(cli: Cli) -> Result<()> {
    if cli.setup {
        return setup::run_setup().await;
    }

    let command = match cli.command {
        Some(command) => command,
        None => {
            if !Config::config_path()?.exists() && Config::load().is_err() {
                show_welcome_message()?;
                return Ok(());
            }
            Command::Write(WriteArgs::default())
        }
    };

    match command {
        Command::Config(args) => {
            let mut config = Config::load_unvalidated()?;
            config_cmd::handle_config(&args, &mut config)
        }
        Command::Write(args) => write::handle_write(args, &Config::load()?).await,
        Command::Outline(args) => operations::handle_outline(args, &Config::load()?).await,
        Command::Points(args) => operations::handle_points(args, &Config::load()?).await,
        Command::Paragraph(args) => operations::handle_paragraph(args, &Config::load()?).await,
        Command::Generate(args) => operations::handle_generate(args, &Config::load()?).await,
    }
}

fn show_welcome_message() -> Result<()> {
    println!("🚀 Welcome to articlegen!");
    println!();
    println!("📖 What articlegen does:");
    println!("   • Asks a language model for an outline of your article");
    println!("   • Lets you edit the headers and talking points");
    println!("   • Writes the paragraphs and saves '<title>.txt'");
    println!();
    println!("⚠️  Configuration not found. Let's get you set up!");
    println!("   Run: articlegen --setup");
    println!("   Config file: {}", Config::config_path()?.display());
    println!();
    println!("💡 How to use articlegen:");
    println!("   articlegen --setup                                    # Interactive first-time setup");
    println!("   articlegen write --title 'A Guide to Testing'          # Draft, review and save");
    println!("   articlegen outline --title 'A Guide to Testing' --tags 'tdd'");
    println!("   articlegen generate --title 'A Guide to Testing' --save");
    println!("   articlegen config --show                              # Print saved settings");
    println!();
    println!("❓ For more help: articlegen --help");
    Ok(())
}
