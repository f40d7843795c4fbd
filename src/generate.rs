//! Banner generation pipeline: template resolution, banner assembly and
//! placeholder substitution.
//!
//! The banner text may contain the literal two-character sequence `\n`
//! (backslash + 'n', not a newline); each part is rendered as its own figlet
//! block and the blocks are joined with a single newline. Backticks and
//! backslashes in rendered blocks are escaped so the banner survives the
//! shell here-doc it is embedded in.

use std::fs;
use std::path::PathBuf;

use log::info;

use crate::error::Result;
use crate::renderer::AsciiRenderer;
use crate::templates::{DEFAULT_TEMPLATE, DEFAULT_TEMPLATE_SUBTITLE, PH_BANNER, PH_PS1, PH_SUBTITLE};

/// The literal backslash-n sequence that splits banner text into segments.
const LINE_BREAK: &str = "\\n";

/// Everything needed for one bash.bashrc generation.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Banner text, rendered through the figlet font.
    pub banner: String,

    /// Figlet font name.
    pub font: String,

    /// Subtitle below the banner, e.g. a version number.
    pub subtitle: Option<String>,

    /// Inline template, takes precedence over everything else.
    pub template: Option<String>,

    /// Template file, used when no inline template is given.
    pub template_file: Option<PathBuf>,

    /// Text for the PS1 prompt prefix.
    pub ps1: String,

    /// Maximum banner width in columns.
    pub width: usize,

    /// Output file; stdout when absent.
    pub output: Option<PathBuf>,
}

impl Default for GenerateRequest {
    fn default() -> Self {
        Self {
            banner: "Banner".to_string(),
            font: "standard".to_string(),
            subtitle: None,
            template: None,
            template_file: None,
            ps1: "docker".to_string(),
            width: 80,
            output: None,
        }
    }
}

/// Resolve the template to substitute into: inline template, then template
/// file, then the built-in default matching whether a subtitle was given.
fn resolve_template(request: &GenerateRequest) -> Result<String> {
    if let Some(template) = &request.template {
        return Ok(template.clone());
    }
    if let Some(path) = &request.template_file {
        info!("Reading template from {}", path.display());
        return Ok(fs::read_to_string(path)?);
    }
    if request.subtitle.is_some() {
        Ok(DEFAULT_TEMPLATE_SUBTITLE.clone())
    } else {
        Ok(DEFAULT_TEMPLATE.clone())
    }
}

/// Render the banner text into escaped figlet blocks.
///
/// Splits on the literal `\n` sequence, renders each part independently and
/// joins the escaped blocks with exactly one newline between them.
pub fn render_banner(
    renderer: &dyn AsciiRenderer,
    banner: &str,
    font: &str,
    width: usize,
) -> Result<String> {
    let parts: Vec<&str> = if banner.contains(LINE_BREAK) {
        banner.split(LINE_BREAK).collect()
    } else {
        vec![banner]
    };
    let mut rendered = Vec::with_capacity(parts.len());
    for part in parts {
        rendered.push(escape_heredoc(&renderer.render(part, font, width)?));
    }
    Ok(rendered.join("\n"))
}

/// Prefix every backtick and backslash with a backslash; the banner is
/// embedded in an unquoted here-doc where both are shell-active.
fn escape_heredoc(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '`' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Replace the placeholders: banner, then PS1, then subtitle (only when one
/// was supplied). Unmatched placeholders stay as literal text.
fn substitute(
    template: &str,
    banner_text: &str,
    ps1: &str,
    subtitle: Option<&str>,
) -> String {
    let mut bashrc = template.replace(PH_BANNER, banner_text).replace(PH_PS1, ps1);
    if let Some(subtitle) = subtitle {
        bashrc = bashrc.replace(PH_SUBTITLE, subtitle);
    }
    bashrc
}

/// Produce the fully substituted bash.bashrc text.
///
/// The banner is rendered unconditionally, even when the resolved template
/// contains no banner placeholder, so font errors always surface.
pub fn render(renderer: &dyn AsciiRenderer, request: &GenerateRequest) -> Result<String> {
    let template = resolve_template(request)?;
    let banner_text = render_banner(renderer, &request.banner, &request.font, request.width)?;
    Ok(substitute(
        &template,
        &banner_text,
        &request.ps1,
        request.subtitle.as_deref(),
    ))
}

/// Generate the bash.bashrc and write it to the requested destination.
pub fn generate(renderer: &dyn AsciiRenderer, request: &GenerateRequest) -> Result<()> {
    let bashrc = render(renderer, request)?;
    match &request.output {
        None => println!("{bashrc}"),
        Some(path) => {
            info!("Writing output to {}", path.display());
            fs::write(path, bashrc)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BannerGenError;
    use crate::renderer::MockRenderer;
    use tempfile::TempDir;

    fn request() -> GenerateRequest {
        GenerateRequest::default()
    }

    #[test]
    fn test_banner_without_escape_is_one_segment() {
        let banner = render_banner(&MockRenderer::new(), "AB", "standard", 80).unwrap();
        assert_eq!(banner, "[AB]\n");
    }

    #[test]
    fn test_literal_backslash_n_splits_segments() {
        // "A\nB" with a literal backslash, not a newline character
        let banner = render_banner(&MockRenderer::new(), "A\\nB", "standard", 80).unwrap();
        assert_eq!(banner, "[A]\n\n[B]\n");
    }

    #[test]
    fn test_real_newline_does_not_split() {
        let banner = render_banner(&MockRenderer::new(), "A\nB", "standard", 80).unwrap();
        assert_eq!(banner, "[A\nB]\n");
    }

    #[test]
    fn test_backticks_and_backslashes_are_escaped() {
        let banner = render_banner(&MockRenderer::new(), "a`b", "standard", 80).unwrap();
        assert_eq!(banner, "[a\\`b]\n");

        // lone backslash (not followed by 'n') stays in one segment
        let banner = render_banner(&MockRenderer::new(), "x\\y", "standard", 80).unwrap();
        assert_eq!(banner, "[x\\\\y]\n");
    }

    #[test]
    fn test_default_template_substitution() {
        let output = render(&MockRenderer::new(), &request()).unwrap();
        let expected = DEFAULT_TEMPLATE
            .replace(PH_BANNER, "[Banner]\n")
            .replace(PH_PS1, "docker");
        assert_eq!(output, expected);
        assert!(!output.contains(PH_SUBTITLE));
    }

    #[test]
    fn test_subtitle_selects_subtitle_template() {
        let mut req = request();
        req.subtitle = Some("v1.2.3".to_string());
        let output = render(&MockRenderer::new(), &req).unwrap();
        let expected = DEFAULT_TEMPLATE_SUBTITLE
            .replace(PH_BANNER, "[Banner]\n")
            .replace(PH_PS1, "docker")
            .replace(PH_SUBTITLE, "v1.2.3");
        assert_eq!(output, expected);
    }

    #[test]
    fn test_inline_template_with_only_ps1() {
        let mut req = request();
        req.template = Some("prompt is {PS1}".to_string());
        req.ps1 = "dev".to_string();
        let output = render(&MockRenderer::new(), &req).unwrap();
        assert_eq!(output, "prompt is dev");
    }

    #[test]
    fn test_banner_rendered_even_without_placeholder() {
        // the banner is always rendered, so a bad font fails even when the
        // template has no {BANNER}
        let mut req = request();
        req.template = Some("prompt is {PS1}".to_string());
        let err = render(&MockRenderer::failing(), &req).unwrap_err();
        assert!(matches!(err, BannerGenError::FontNotFound(_)));
    }

    #[test]
    fn test_unmatched_placeholder_stays_literal() {
        let mut req = request();
        req.template = Some("{SUBTITLE} and {UNKNOWN}".to_string());
        let output = render(&MockRenderer::new(), &req).unwrap();
        assert_eq!(output, "{SUBTITLE} and {UNKNOWN}");
    }

    #[test]
    fn test_template_file_is_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("template.txt");
        fs::write(&path, "banner:\n{BANNER}").unwrap();

        let mut req = request();
        req.template_file = Some(path);
        req.banner = "X".to_string();
        let output = render(&MockRenderer::new(), &req).unwrap();
        assert_eq!(output, "banner:\n[X]\n");
    }

    #[test]
    fn test_inline_template_wins_over_template_file() {
        let mut req = request();
        req.template = Some("inline".to_string());
        req.template_file = Some(PathBuf::from("/does/not/exist"));
        let output = render(&MockRenderer::new(), &req).unwrap();
        assert_eq!(output, "inline");
    }

    #[test]
    fn test_missing_template_file_is_an_io_error() {
        let mut req = request();
        req.template_file = Some(PathBuf::from("/does/not/exist"));
        let err = render(&MockRenderer::new(), &req).unwrap_err();
        assert!(matches!(err, BannerGenError::Io(_)));
    }

    #[test]
    fn test_generate_writes_output_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bash.bashrc");

        let mut req = request();
        req.banner = "X".to_string();
        req.output = Some(path.clone());
        generate(&MockRenderer::new(), &req).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let expected = DEFAULT_TEMPLATE
            .replace(PH_BANNER, "[X]\n")
            .replace(PH_PS1, "docker");
        assert_eq!(written, expected);
    }

    #[test]
    fn test_generate_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bash.bashrc");
        fs::write(&path, "previous content").unwrap();

        let mut req = request();
        req.output = Some(path.clone());
        generate(&MockRenderer::new(), &req).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(!written.contains("previous content"));
        assert!(written.contains("[Banner]"));
    }
}
