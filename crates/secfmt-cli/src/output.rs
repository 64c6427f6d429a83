//! Rendering of classification results.

use clap::ValueEnum;
use colored::Colorize;
use secfmt_core::{Classification, Format};
use serde::Serialize;

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn paint(format: Format) -> colored::ColoredString {
    let name = format.name();
    match format {
        Format::Binary => name.dimmed(),
        Format::Dotenv => name.green(),
        Format::Ini => name.cyan(),
        Format::Json => name.yellow(),
        Format::Yaml => name.magenta(),
    }
}

/// Render classifications, one line per path in text mode.
pub fn render_classifications(
    results: &[Classification],
    output: OutputFormat,
    show_source: bool,
) -> anyhow::Result<String> {
    match output {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(results)?),
        OutputFormat::Text => {
            let mut out = String::new();
            for c in results {
                out.push_str(&format!("{}: {}", c.path.display(), paint(c.format)));
                if show_source {
                    let source = format!("({})", c.source);
                    out.push_str(&format!(" {}", source.as_str().dimmed()));
                }
                out.push('\n');
            }
            Ok(out)
        }
    }
}

#[derive(Serialize)]
struct FormatInfo {
    name: &'static str,
    suffixes: &'static [&'static str],
    fallback: bool,
}

/// Render the list of known formats.
pub fn render_formats(output: OutputFormat) -> anyhow::Result<String> {
    let infos: Vec<FormatInfo> = Format::ALL
        .iter()
        .map(|&f| FormatInfo {
            name: f.name(),
            suffixes: f.suffixes(),
            fallback: !f.is_structured(),
        })
        .collect();

    match output {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&infos)?),
        OutputFormat::Text => {
            let mut out = String::new();
            for info in &infos {
                let detail = if info.fallback {
                    "(fallback)".to_string()
                } else {
                    info.suffixes.join(", ")
                };
                out.push_str(&format!("{:<8}{}\n", info.name, detail));
            }
            Ok(out)
        }
    }
}
