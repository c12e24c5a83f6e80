//! Report rendering for analysis results

use portfolio_analyzer_core::AnalysisResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per portfolio
    #[default]
    Text,
    /// A JSON array of result objects
    Json,
}

pub fn render_report(
    results: &[AnalysisResult],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(results
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => serde_json::to_string_pretty(results),
    }
}
