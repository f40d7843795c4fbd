use clap::Parser;
use eyre::{Context, Result};
use log::info;
use std::process::ExitCode;

use docker_banner_gen::cli::Cli;
use docker_banner_gen::generate::generate;
use docker_banner_gen::renderer::{AsciiRenderer, FigletRenderer};
use docker_banner_gen::templates;

/// Print both built-in templates and the supported placeholders.
fn print_templates() {
    println!("\n--> No subtitle:\n");
    println!("{}", *templates::DEFAULT_TEMPLATE);
    println!("\n--> With subtitle:\n");
    println!("{}", *templates::DEFAULT_TEMPLATE_SUBTITLE);
    println!("\n--> Supported placeholders:");
    println!(" - banner: {}", templates::PH_BANNER);
    println!(" - subtitle: {}", templates::PH_SUBTITLE);
    println!(" - PS1: {}", templates::PH_PS1);
}

/// Print the available fonts, each name followed by an indented description.
fn print_fonts(renderer: &dyn AsciiRenderer) -> Result<()> {
    for font in renderer.list_fonts().context("Failed to list fonts")? {
        println!("{}", font.name);
        println!("    {}", font.description);
    }
    Ok(())
}

/// Print the long description of a single font.
fn print_font_info(renderer: &dyn AsciiRenderer, font: &str) -> Result<()> {
    let info = renderer
        .font_info(font, false)
        .with_context(|| format!("Failed to read font info for '{font}'"))?;
    println!("{info}");
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let renderer = FigletRenderer::new();
    if cli.print_templates {
        print_templates();
    } else if cli.list_fonts {
        print_fonts(&renderer)?;
    } else if let Some(font) = &cli.print_font_info {
        print_font_info(&renderer, font)?;
    } else {
        info!("Generating bash.bashrc for banner '{}'", cli.banner);
        generate(&renderer, &cli.to_request()).context("Failed to generate bash.bashrc")?;
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_default_env().init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // error report goes to stdout, matching the stream the generated
            // output would have used
            println!("{err:?}");
            ExitCode::FAILURE
        }
    }
}
