use cartcalc::application::checkout::Checkout;
use cartcalc::domain::catalog::Catalog;
use cartcalc::domain::cost::Fees;
use cartcalc::domain::money::Fee;
use cartcalc::domain::ports::{OrderSourceBox, ReceiptSinkBox};
use cartcalc::interfaces::csv::catalog_reader::read_catalog;
use cartcalc::interfaces::csv::order_reader::OrderReader;
use cartcalc::interfaces::prompt::PromptOrderSource;
use cartcalc::interfaces::receipt_writer::{JsonReceiptWriter, TextReceiptWriter};
use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::{debug, trace};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Catalog CSV file (`product, price`). Defaults to the built-in catalog.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Order CSV file (`product, quantity, gift_wrap`). Prompts on stdin if omitted.
    #[arg(long)]
    order: Option<PathBuf>,

    /// Fee per gift-wrapped product line
    #[arg(long, default_value = "1", value_parser = parse_fee)]
    gift_wrap_fee: Fee,

    /// Fee per shipping package of up to 10 items
    #[arg(long, default_value = "5", value_parser = parse_fee)]
    shipping_fee: Fee,

    /// Receipt format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_fee(raw: &str) -> std::result::Result<Fee, String> {
    let value: Decimal = raw.trim().parse().map_err(|e| format!("{e}"))?;
    Fee::new(value).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(io::stderr)
        .with_target(cli.verbose >= 2)
        .init();

    debug!("cartcalc started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let catalog = if let Some(path) = &cli.catalog {
        let file = File::open(path).into_diagnostic()?;
        read_catalog(file).into_diagnostic()?
    } else {
        Catalog::default()
    };

    let checkout = Checkout::new(
        catalog,
        Fees {
            gift_wrap: cli.gift_wrap_fee,
            shipping_per_package: cli.shipping_fee,
        },
    );

    let mut source: OrderSourceBox = if let Some(path) = &cli.order {
        let file = File::open(path).into_diagnostic()?;
        Box::new(OrderReader::new(file))
    } else {
        Box::new(PromptOrderSource::new(io::stdin().lock(), io::stdout()))
    };

    let mut sink: ReceiptSinkBox = match cli.format {
        Format::Text => Box::new(TextReceiptWriter::new(io::stdout())),
        Format::Json => Box::new(JsonReceiptWriter::new(io::stdout())),
    };

    checkout
        .run(source.as_mut(), sink.as_mut())
        .into_diagnostic()?;

    Ok(())
}
