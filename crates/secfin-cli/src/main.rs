//! Command-line interface for SEC EDGAR data
//!
//! ```bash
//! export SEC_USER_AGENT="MyResearchApp ops@example.com"
//! secfin resolve gme
//! secfin metrics AAPL --metric NetIncomeLoss --metric Revenues
//! secfin filing AAPL --form 10-Q
//! secfin search "game stop" --form 8-K
//! secfin concept TSLA Revenues
//! secfin call get_available_metrics '{"ticker": "AAPL", "search_term": "Depreciation"}'
//! ```

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use secfin_edgar::service::{ApiHealth, DEFAULT_OWNERSHIP_LIMIT, DEFAULT_SEARCH_LIMIT, FilingSearch};
use secfin_edgar::{EdgarConfig, EdgarService, FilingQuery, FilingType, MetricRequest};
use secfin_tools::ToolRegistry;
use serde::Serialize;
use serde_json::Value;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "secfin")]
#[command(about = "SEC EDGAR filings and XBRL metrics as JSON", long_about = None)]
struct Args {
    /// User-Agent sent to SEC, "<app> <contact email>" (overrides SEC_USER_AGENT)
    #[arg(long, global = true)]
    user_agent: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a ticker to its CIK
    Resolve { ticker: String },

    /// List recent filings
    Filings {
        ticker: String,
        /// Form type, e.g. 10-K, 10-Q, 8-K
        #[arg(long)]
        form: Option<FilingType>,
        /// Maximum number of filings
        #[arg(long, default_value_t = secfin_edgar::service::DEFAULT_FILING_LIMIT)]
        limit: usize,
        /// Earliest filing date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<NaiveDate>,
        /// Latest filing date (YYYY-MM-DD)
        #[arg(long)]
        end: Option<NaiveDate>,
    },

    /// Financial metrics: the essential set, or the concepts given with --metric
    Metrics {
        ticker: String,
        #[arg(long = "metric")]
        metrics: Vec<String>,
    },

    /// Every metric the company reports, optionally filtered
    Discover {
        ticker: String,
        #[arg(long)]
        search: Option<String>,
    },

    /// Latest filing of a form with metrics and, when under 1 MB, its text
    Filing {
        ticker: String,
        #[arg(long, default_value = "10-K")]
        form: FilingType,
        #[arg(long = "metric")]
        metrics: Vec<String>,
    },

    /// One concept's annual and quarterly history
    Concept { ticker: String, concept: String },

    /// Schedule 13D and 13G reports about a company
    Ownership {
        ticker: String,
        #[arg(long, default_value_t = DEFAULT_OWNERSHIP_LIMIT)]
        limit: usize,
    },

    /// Find companies by name or ticker and list their filings
    Search {
        query: String,
        #[arg(long)]
        form: Option<FilingType>,
        #[arg(long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: usize,
        /// Earliest filing date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<NaiveDate>,
        /// Latest filing date (YYYY-MM-DD)
        #[arg(long)]
        end: Option<NaiveDate>,
    },

    /// Check that SEC EDGAR is reachable
    Status,

    /// Print the assistant tool definitions
    Tools,

    /// Run an assistant tool with JSON parameters
    Call { tool: String, params: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    secfin_utils::init_tracing();

    let args = Args::parse();

    let mut config = EdgarConfig::from_env();
    if let Some(user_agent) = args.user_agent {
        config.user_agent = user_agent;
    }
    let service = Arc::new(EdgarService::from_config(config).context("invalid SEC client configuration")?);

    info!(command = ?args.command, "running");

    let output = match args.command {
        Command::Resolve { ticker } => render(service.resolve(&ticker).await)?,
        Command::Filings {
            ticker,
            form,
            limit,
            start,
            end,
        } => {
            let mut query = FilingQuery::new(ticker).limit(limit);
            query.form_type = form;
            query.start_date = start;
            query.end_date = end;
            render(service.company_filings(&query).await)?
        }
        Command::Metrics { ticker, metrics } => {
            let request = MetricRequest::from_concepts(Some(metrics));
            render(service.financial_metrics(&ticker, &request).await)?
        }
        Command::Discover { ticker, search } => {
            render(service.available_metrics(&ticker, search.as_deref()).await)?
        }
        Command::Filing {
            ticker,
            form,
            metrics,
        } => {
            let request = MetricRequest::from_concepts(Some(metrics));
            render(service.filing_content(&ticker, form, &request).await)?
        }
        Command::Concept { ticker, concept } => {
            render(service.company_concept(&ticker, &concept).await)?
        }
        Command::Ownership { ticker, limit } => {
            render(service.beneficial_ownership(&ticker, limit).await)?
        }
        Command::Search {
            query,
            form,
            limit,
            start,
            end,
        } => {
            let mut search = FilingSearch::new(query).limit(limit);
            search.form_type = form;
            search.start_date = start;
            search.end_date = end;
            render(service.search_filings(&search).await)?
        }
        Command::Status => {
            let status = service.api_status().await;
            let value = serde_json::to_value(&status)?;
            match status.status {
                ApiHealth::Operational => Output::Found(value),
                ApiHealth::Error => Output::NotFound(value),
            }
        }
        Command::Tools => {
            let registry = registry(service);
            Output::Found(serde_json::to_value(registry.definitions())?)
        }
        Command::Call { tool, params } => {
            let params: Value = serde_json::from_str(&params).context("tool parameters must be JSON")?;
            let registry = registry(service);
            let result = registry.execute(&tool, params).await?;
            if result.get("error").is_some() {
                Output::NotFound(result)
            } else {
                Output::Found(result)
            }
        }
    };

    let (value, code) = match output {
        Output::Found(value) => (value, ExitCode::SUCCESS),
        Output::NotFound(value) => (value, ExitCode::from(2)),
    };
    println!("{}", serde_json::to_string_pretty(&value)?);

    Ok(code)
}

enum Output {
    Found(Value),
    NotFound(Value),
}

fn registry(service: Arc<EdgarService>) -> ToolRegistry {
    let registry = ToolRegistry::new();
    secfin_edgar::register_all(&registry, service);
    registry
}

/// Lookup failures are printed like the assistant sees them; anything else aborts
fn render<T: Serialize>(outcome: secfin_edgar::Result<T>) -> anyhow::Result<Output> {
    match outcome {
        Ok(report) => Ok(Output::Found(serde_json::to_value(report)?)),
        Err(e) if e.is_lookup_failure() => Ok(Output::NotFound(e.to_payload())),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_filing_defaults() {
        let args = Args::try_parse_from(["secfin", "filing", "aapl"]).unwrap();
        match args.command {
            Command::Filing { ticker, form, metrics } => {
                assert_eq!(ticker, "aapl");
                assert_eq!(form, FilingType::Form10K);
                assert!(metrics.is_empty());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_filings_filters() {
        let args = Args::try_parse_from([
            "secfin", "filings", "GME", "--form", "8-k", "--start", "2024-01-01", "--limit", "3",
        ])
        .unwrap();
        match args.command {
            Command::Filings { form, start, limit, .. } => {
                assert_eq!(form, Some(FilingType::Form8K));
                assert_eq!(start, NaiveDate::from_ymd_opt(2024, 1, 1));
                assert_eq!(limit, 3);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_search() {
        let args = Args::try_parse_from(["secfin", "search", "game stop", "--form", "13d"]).unwrap();
        match args.command {
            Command::Search { query, form, limit, .. } => {
                assert_eq!(query, "game stop");
                assert_eq!(form, Some(FilingType::Schedule13D));
                assert_eq!(limit, DEFAULT_SEARCH_LIMIT);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_concept_requires_both_arguments() {
        assert!(Args::try_parse_from(["secfin", "concept", "TSLA"]).is_err());
        let args = Args::try_parse_from(["secfin", "concept", "TSLA", "Revenues"]).unwrap();
        assert!(matches!(args.command, Command::Concept { .. }));
    }

    #[test]
    fn test_rejects_unknown_form() {
        assert!(Args::try_parse_from(["secfin", "filing", "AAPL", "--form", "10-X"]).is_err());
    }
}
