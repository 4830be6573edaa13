/*!
plotspec Command Line Interface

Builds plot title and label specifications and prints them as JSON.
*/

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use plotspec::writer::{JsonWriter, Writer};
use plotspec::{ggtitle, labs, validate_labels, xlab, ylab, LabelSpec, PlotSpecError, VERSION};

#[derive(Parser)]
#[command(name = "plotspec")]
#[command(about = "Declarative plot title and label specifications")]
#[command(version = VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json, global = true)]
    pub format: OutputFormat,

    /// Output file path (stdout when omitted)
    #[arg(long, global = true)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Plot title
    Title {
        /// The text for the plot title
        text: String,
    },

    /// Label for the x axis
    Xlab {
        /// The text for the x axis label
        text: String,
    },

    /// Label for the y axis
    Ylab {
        /// The text for the y axis label
        text: String,
    },

    /// Title, axis labels and legend titles from KEY=VALUE pairs
    Labs {
        /// Pairs such as title="My plot" or color="Species", kept in order
        pairs: Vec<String>,
    },

    /// Check KEY=VALUE pairs for unknown aesthetics
    Validate {
        pairs: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Single-line JSON
    Compact,
    /// Rust debug representation
    Debug,
}

/// Split a `KEY=VALUE` argument at the first `=`
fn parse_pair(arg: &str) -> plotspec::Result<(String, String)> {
    let (key, value) = arg.split_once('=').ok_or_else(|| {
        PlotSpecError::ArgumentError(format!("Expected KEY=VALUE, got '{}'", arg))
    })?;
    if key.is_empty() {
        return Err(PlotSpecError::ArgumentError(format!(
            "Missing key in '{}'",
            arg
        )));
    }
    Ok((key.to_string(), value.to_string()))
}

fn parse_pairs(args: &[String]) -> plotspec::Result<Vec<(String, String)>> {
    args.iter().map(|arg| parse_pair(arg)).collect()
}

fn render(spec: &LabelSpec, format: OutputFormat) -> plotspec::Result<String> {
    match format {
        OutputFormat::Json => JsonWriter::new().write(spec),
        OutputFormat::Compact => JsonWriter::compact().write(spec),
        OutputFormat::Debug => Ok(format!("{:#?}", spec)),
    }
}

fn emit(text: &str, output: Option<&Path>) -> plotspec::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, text).map_err(|e| {
                PlotSpecError::IoError(format!(
                    "Failed to write output file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            tracing::info!("Spec written to: {}", path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}

fn run(cli: Cli) -> plotspec::Result<()> {
    let spec = match cli.command {
        Commands::Title { text } => LabelSpec::from(ggtitle(text)),
        Commands::Xlab { text } => LabelSpec::from(xlab(text)),
        Commands::Ylab { text } => LabelSpec::from(ylab(text)),
        Commands::Labs { pairs } => labs(parse_pairs(&pairs)?),
        Commands::Validate { pairs } => {
            let spec = labs(parse_pairs(&pairs)?);
            let warnings = validate_labels(&spec);
            for warning in &warnings {
                tracing::warn!(aesthetic = %warning.aesthetic, "{}", warning.message);
            }

            let text = match cli.format {
                OutputFormat::Json => serde_json::to_string_pretty(&warnings)
                    .map_err(|e| PlotSpecError::WriterError(e.to_string()))?,
                OutputFormat::Compact => serde_json::to_string(&warnings)
                    .map_err(|e| PlotSpecError::WriterError(e.to_string()))?,
                OutputFormat::Debug => format!("{:#?}", warnings),
            };
            return emit(&text, cli.output.as_deref());
        }
    };

    let text = render(&spec, cli.format)?;
    emit(&text, cli.output.as_deref())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "plotspec=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    run(cli)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair() {
        assert_eq!(
            parse_pair("title=My plot").unwrap(),
            ("title".to_string(), "My plot".to_string())
        );
        // Only the first '=' separates key from value
        assert_eq!(
            parse_pair("x=a=b").unwrap(),
            ("x".to_string(), "a=b".to_string())
        );
        assert_eq!(parse_pair("y=").unwrap(), ("y".to_string(), String::new()));
    }

    #[test]
    fn test_parse_pair_errors() {
        assert!(matches!(
            parse_pair("title"),
            Err(PlotSpecError::ArgumentError(_))
        ));
        assert!(matches!(
            parse_pair("=value"),
            Err(PlotSpecError::ArgumentError(_))
        ));
    }

    #[test]
    fn test_cli_parses_labs_in_order() {
        let cli = Cli::try_parse_from(["plotspec", "labs", "title=T", "x=X", "--format", "compact"])
            .unwrap();
        assert_eq!(cli.format, OutputFormat::Compact);
        match cli.command {
            Commands::Labs { pairs } => assert_eq!(pairs, vec!["title=T", "x=X"]),
            _ => panic!("expected labs command"),
        }
    }

    #[test]
    fn test_render_formats() {
        let spec = LabelSpec::from(ggtitle("T"));
        assert_eq!(
            render(&spec, OutputFormat::Compact).unwrap(),
            r#"{"kind":"ggtitle","text":"T"}"#
        );
        assert!(render(&spec, OutputFormat::Json).unwrap().contains("\"text\": \"T\""));
        assert!(render(&spec, OutputFormat::Debug).unwrap().starts_with("Single("));
    }

    #[test]
    fn test_run_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labels.json");
        let cli = Cli::try_parse_from([
            "plotspec",
            "labs",
            "title=Iris",
            "color=Species",
            "--format",
            "compact",
            "--output",
            path.to_str().unwrap(),
        ])
        .unwrap();

        run(cli).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {"kind": "ggtitle", "text": "Iris"},
                {"kind": "scale", "name": "Species", "aesthetic": "color"}
            ])
        );
    }

    #[test]
    fn test_run_validate_writes_warnings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("warnings.json");
        let cli = Cli::try_parse_from([
            "plotspec",
            "validate",
            "x=X",
            "colr=C",
            "--output",
            path.to_str().unwrap(),
        ])
        .unwrap();

        run(cli).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(1));
        assert_eq!(value[0]["aesthetic"], "colr");
        assert_eq!(value[0]["index"], 1);
    }

    #[test]
    fn test_run_rejects_malformed_pair() {
        let cli = Cli::try_parse_from(["plotspec", "labs", "title"]).unwrap();
        assert!(matches!(run(cli), Err(PlotSpecError::ArgumentError(_))));
    }

    #[test]
    fn test_emit_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");
        assert!(matches!(
            emit("{}", Some(&path)),
            Err(PlotSpecError::IoError(_))
        ));
    }
}
