//! Price command implementation
//!
//! Loads a JSON portfolio and a TOML or JSON market snapshot, prices every
//! trade in parallel and prints one row per trade. A trade that fails to
//! price gets its error message in place of a PV; it never aborts the run.

use std::path::Path;

use pricer_core::market_data::MarketState;
use pricer_models::instruments::{PortfolioEntry, Trade};
use pricer_pricing::{price_portfolio, PricerAdapter};
use serde::Serialize;
use tracing::info;

use super::format_amount;
use crate::config::OutputFormat;
use crate::{CliError, Result};

/// Outcome of pricing one portfolio entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricedTrade {
    /// Entry id, or its 1-based position when the file gives none
    pub id: String,
    /// Trade kind name
    pub kind: String,
    /// Present value, when pricing succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pv: Option<f64>,
    /// Error message, when pricing failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Run the price command
pub fn run(
    adapter: &PricerAdapter,
    portfolio: &Path,
    market: &Path,
    format: OutputFormat,
) -> Result<()> {
    info!(portfolio = %portfolio.display(), market = %market.display(), %format, "Starting pricing");

    let entries = load_portfolio(portfolio)?;
    let market = load_market(market)?;
    let priced = price_entries(adapter, entries, &market);

    let failures = priced.iter().filter(|p| p.error.is_some()).count();
    println!("{}", render(&priced, format)?);

    info!(trades = priced.len(), failures, "Pricing complete");
    Ok(())
}

/// Reads a JSON array of portfolio entries.
pub fn load_portfolio(path: &Path) -> Result<Vec<PortfolioEntry>> {
    let content = read(path)?;
    serde_json::from_str(&content).map_err(|e| parse_error(path, e))
}

/// Reads a market snapshot, as TOML for `.toml` files and JSON otherwise.
pub fn load_market(path: &Path) -> Result<MarketState> {
    let content = read(path)?;
    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    if is_toml {
        toml::from_str(&content).map_err(|e| parse_error(path, e))
    } else {
        serde_json::from_str(&content).map_err(|e| parse_error(path, e))
    }
}

/// Prices `entries` against `market`, keeping input order.
pub fn price_entries(
    adapter: &PricerAdapter,
    entries: Vec<PortfolioEntry>,
    market: &MarketState,
) -> Vec<PricedTrade> {
    let mut labels = Vec::with_capacity(entries.len());
    let mut trades: Vec<Box<dyn Trade>> = Vec::with_capacity(entries.len());
    for (i, entry) in entries.into_iter().enumerate() {
        let id = entry.id.unwrap_or_else(|| (i + 1).to_string());
        labels.push((id, entry.trade.kind().name().to_string()));
        trades.push(entry.trade.into_trade());
    }

    price_portfolio(adapter, &trades, market)
        .into_iter()
        .zip(labels)
        .map(|(result, (id, kind))| match result {
            Ok(pv) => PricedTrade {
                id,
                kind,
                pv: Some(pv),
                error: None,
            },
            Err(err) => PricedTrade {
                id,
                kind,
                pv: None,
                error: Some(err.to_string()),
            },
        })
        .collect()
}

/// Renders priced trades in the requested format.
pub fn render(priced: &[PricedTrade], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(priced)?),
        OutputFormat::Table => Ok(render_table(priced)),
    }
}

fn render_table(priced: &[PricedTrade]) -> String {
    let rows: Vec<[String; 3]> = priced
        .iter()
        .map(|p| {
            let result = match (&p.pv, &p.error) {
                (Some(pv), _) => format_amount(*pv),
                (None, Some(error)) => error.clone(),
                (None, None) => String::new(),
            };
            [p.id.clone(), p.kind.clone(), result]
        })
        .collect();

    let headers = ["Trade ID", "Kind", "PV"];
    let mut widths = headers.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}", left, segments.join(mid), right)
    };
    let line = |cells: [&str; 3]| {
        format!(
            "│ {:<w0$} │ {:<w1$} │ {:>w2$} │",
            cells[0],
            cells[1],
            cells[2],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2]
        )
    };

    let mut out = vec![border("┌", "┬", "┐"), line(headers), border("├", "┼", "┤")];
    if rows.is_empty() {
        out.push(line(["(no data)", "", ""]));
    }
    for row in &rows {
        out.push(line([&row[0], &row[1], &row[2]]));
    }
    out.push(border("└", "┴", "┘"));
    out.join("\n")
}

fn read(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

fn parse_error(path: &Path, err: impl std::fmt::Display) -> CliError {
    CliError::Parse {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}
