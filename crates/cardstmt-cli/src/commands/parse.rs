//! Parse command - extract data from a single statement.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use rust_decimal::Decimal;
use tracing::{debug, info};

use cardstmt_core::invoice::{ExtractionResult, InvoiceParser, StatementParser};
use cardstmt_core::models::invoice::Invoice;

use super::{load_config, read_document};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input file (PDF statement or JSON token file)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Run consistency checks even if disabled in the configuration
    #[arg(long)]
    validate: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output, one row per transaction
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub async fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    info!("Parsing file: {}", args.input.display());

    let doc = read_document(&args.input, &config)?;
    debug!("Read {} pages, {} tokens", doc.page_count(), doc.token_count());

    let parser = StatementParser::from_config(&config.extraction)
        .with_validation(args.validate || config.extraction.validate);
    let result = parser.parse(&doc.pages)?;

    print_warnings(&result);

    let output = format_invoice(&result.invoice, args.format, args.pretty)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn print_warnings(result: &ExtractionResult) {
    if result.warnings.is_empty() {
        return;
    }
    eprintln!("{}", style("Validation issues:").yellow());
    for warning in &result.warnings {
        eprintln!("  - {}", warning);
    }
}

pub fn format_invoice(invoice: &Invoice, format: OutputFormat, pretty: bool) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(invoice)?),
        OutputFormat::Json => Ok(serde_json::to_string(invoice)?),
        OutputFormat::Csv => format_csv(invoice),
        OutputFormat::Text => Ok(format_text(invoice)),
    }
}

fn format_csv(invoice: &Invoice) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    for transaction in &invoice.transactions {
        wtr.serialize(transaction)?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

pub fn format_text(invoice: &Invoice) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Statement: {} to {}\n",
        invoice.statement_start_date, invoice.statement_end_date
    ));
    output.push_str(&format!(
        "Customer: {} <{}>\n",
        invoice.customer.name, invoice.customer.email
    ));
    output.push('\n');

    output.push_str("Balance:\n");
    output.push_str(&format!("  Previous month: ${}\n", invoice.balance.previous_month));
    output.push_str(&format!("  Previous total: ${}\n", invoice.balance.previous_total));
    output.push_str(&format!("  Total:          ${}\n", invoice.balance.total));
    output.push('\n');

    output.push_str(&format!(
        "Minimum payment: ${} due {}\n",
        invoice.minimum_payment.total, invoice.payment_due_on
    ));
    let apr = (invoice.interest.apr * Decimal::ONE_HUNDRED).normalize();
    output.push_str(&format!("APR: {}%\n", apr));
    output.push('\n');

    let spent: Decimal = invoice.transactions.iter().map(|t| t.amount).sum();
    output.push_str(&format!(
        "Transactions: {} (${})\n",
        invoice.transactions.len(),
        spent
    ));
    output.push_str(&format!("Payments: {}\n", invoice.payments.len()));

    if let Some(plan) = &invoice.monthly_installments {
        output.push_str(&format!(
            "Installments: {} (${} remaining)\n",
            plan.items.len(),
            plan.totals.remaining
        ));
    }

    output.push_str(&format!("Daily Cash: ${}\n", invoice.cash_back.total));

    output
}
