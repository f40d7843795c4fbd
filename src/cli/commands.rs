//! CLI flag definitions using clap.
//!
//! A single command with flags; `-i`, `-L` and `-F` short-circuit into the
//! informational modes instead of generating output.

use clap::Parser;
use std::path::PathBuf;

use crate::generate::GenerateRequest;

/// Generates bash.bashrc templates for docker with a custom banner (ASCII art via figlet)
#[derive(Parser, Debug)]
#[command(name = "docker-banner-gen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The banner template to use if not using the built-in one; use
    /// placeholders {BANNER} and {PS1} in the template
    #[arg(short, long, value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// The text to use for the banner (processed by figlet). Use the string
    /// '\n' (not the newline character) to signal a line-break in the banner
    /// text
    #[arg(short, long, value_name = "TEXT", default_value = "Banner")]
    pub banner: String,

    /// The subtitle text to use below the banner (regular text), e.g., a
    /// version number
    #[arg(short, long, value_name = "TEXT")]
    pub subtitle: Option<String>,

    /// The figlet font to use for generating the banner
    #[arg(short, long, value_name = "FONT", default_value = "standard")]
    pub font: String,

    /// The text to use in the PS1 environment variable (used in the prompt)
    #[arg(short, long, value_name = "TEXT", default_value = "docker")]
    pub ps1: String,

    /// The maximum width for the banner
    #[arg(short, long, value_name = "COLS", default_value_t = 80)]
    pub width: usize,

    /// The file to store the generated bash.bashrc code in; prints to stdout
    /// if not provided
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Outputs the default templates to stdout
    #[arg(short = 'i', long = "print_templates")]
    pub print_templates: bool,

    /// Outputs the available fonts
    #[arg(short = 'L', long = "list_fonts")]
    pub list_fonts: bool,

    /// Outputs information about the specified font
    #[arg(short = 'F', long = "print_font_info", value_name = "FONT")]
    pub print_font_info: Option<String>,
}

impl Cli {
    /// Build the generation request from the parsed flags.
    pub fn to_request(&self) -> GenerateRequest {
        GenerateRequest {
            banner: self.banner.clone(),
            font: self.font.clone(),
            subtitle: self.subtitle.clone(),
            template: None,
            template_file: self.template.clone(),
            ps1: self.ps1.clone(),
            width: self.width,
            output: self.output.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["docker-banner-gen"]);
        assert_eq!(cli.banner, "Banner");
        assert_eq!(cli.font, "standard");
        assert_eq!(cli.ps1, "docker");
        assert_eq!(cli.width, 80);
        assert!(cli.template.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.print_templates);
        assert!(!cli.list_fonts);
        assert!(cli.print_font_info.is_none());
    }

    #[test]
    fn test_underscored_long_flags() {
        let cli = Cli::parse_from(["docker-banner-gen", "--print_templates"]);
        assert!(cli.print_templates);

        let cli = Cli::parse_from(["docker-banner-gen", "--list_fonts"]);
        assert!(cli.list_fonts);

        let cli = Cli::parse_from(["docker-banner-gen", "--print_font_info", "slant"]);
        assert_eq!(cli.print_font_info.as_deref(), Some("slant"));
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::parse_from([
            "docker-banner-gen",
            "-b",
            "My App",
            "-s",
            "v1.0",
            "-f",
            "slant",
            "-p",
            "myapp",
            "-w",
            "120",
        ]);
        assert_eq!(cli.banner, "My App");
        assert_eq!(cli.subtitle.as_deref(), Some("v1.0"));
        assert_eq!(cli.font, "slant");
        assert_eq!(cli.ps1, "myapp");
        assert_eq!(cli.width, 120);
    }

    #[test]
    fn test_to_request_carries_flags() {
        let cli = Cli::parse_from(["docker-banner-gen", "-b", "X", "-t", "/tmp/tpl", "-o", "/tmp/out"]);
        let request = cli.to_request();
        assert_eq!(request.banner, "X");
        assert_eq!(request.template_file, Some(PathBuf::from("/tmp/tpl")));
        assert_eq!(request.output, Some(PathBuf::from("/tmp/out")));
        assert!(request.template.is_none());
    }
}
