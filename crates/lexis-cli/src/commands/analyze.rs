//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use lexis_analyzer::{AnalysisError, AnalysisOrchestrator, DocumentAnalysis};
use lexis_nlp::NlpCapability;
use std::sync::Arc;
use tracing::info;

/// Execute the analyze command.
///
/// Documents are analyzed concurrently on blocking threads; output follows
/// argument order. Failed documents are reported on stderr and make the
/// command fail once every document has been tried.
pub async fn execute_analyze(
    args: AnalyzeArgs,
    capability: Arc<NlpCapability>,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let analyzer_config = args.apply(config.analyzer.clone());
    let orchestrator = Arc::new(AnalysisOrchestrator::new(capability, analyzer_config)?);

    let outcomes = analyze_all(orchestrator, args.paths).await?;
    let total = outcomes.len();

    let mut analyses = Vec::with_capacity(total);
    let mut failed = 0;
    for (path, outcome) in outcomes {
        match outcome {
            Ok(analysis) => analyses.push(analysis),
            Err(e) => {
                failed += 1;
                eprintln!("{}", formatter.error(&format!("{}: {}", path, e)));
            }
        }
    }

    if !analyses.is_empty() {
        println!("{}", formatter.format_analyses(&analyses)?);
    }

    info!("Analyzed {} of {} document(s)", total - failed, total);

    if failed > 0 {
        return Err(CliError::BatchFailed { failed, total });
    }

    Ok(())
}

/// Analyze every path on the blocking pool, returning results in input order.
pub async fn analyze_all(
    orchestrator: Arc<AnalysisOrchestrator<NlpCapability>>,
    paths: Vec<String>,
) -> Result<Vec<(String, std::result::Result<DocumentAnalysis, AnalysisError>)>> {
    let handles: Vec<_> = paths
        .into_iter()
        .map(|path| {
            let orchestrator = Arc::clone(&orchestrator);
            tokio::task::spawn_blocking(move || {
                let outcome = orchestrator.analyze_document(&path);
                (path, outcome)
            })
        })
        .collect();

    let mut outcomes = Vec::with_capacity(handles.len());
    for handle in handles {
        let outcome = handle
            .await
            .map_err(|e| CliError::Task(e.to_string()))?;
        outcomes.push(outcome);
    }

    Ok(outcomes)
}
