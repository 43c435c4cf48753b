use bitcoinus::application::adapter::GatewayAdapter;
use bitcoinus::application::engine::PaymentProcessor;
use bitcoinus::domain::callback::CallbackPayload;
use bitcoinus::domain::ports::{OrderStore, TransactionStore};
use bitcoinus::domain::settings::GatewaySettings;
use bitcoinus::infrastructure::in_memory::{InMemoryOrderStore, InMemoryTransactionStore};
use bitcoinus::infrastructure::return_urls::HostReturnUrls;
use bitcoinus::interfaces::json::outcome_writer::{OutcomeWriter, ReturnReport};
use bitcoinus::interfaces::json::snapshot_reader::{CheckoutSnapshot, SnapshotReader};
use clap::{Args, Parser, Subcommand};
use miette::{IntoDiagnostic, Result, miette};
use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct Inputs {
    /// Payment method settings as a flat JSON object (projectid, secretkey, mode, discount, info)
    #[arg(long)]
    settings: PathBuf,

    /// Checkout snapshot: transaction, order and storefront context
    #[arg(long)]
    snapshot: PathBuf,
}

#[derive(Subcommand)]
enum Command {
    /// Print the gateway redirect URL for the snapshot's transaction
    Redirect {
        #[command(flatten)]
        inputs: Inputs,
    },
    /// Apply a gateway callback to the snapshot's transaction and print the result
    Callback {
        #[command(flatten)]
        inputs: Inputs,

        /// Callback parameters as a query string (cancel, data, signature)
        #[arg(long)]
        query: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut writer = OutcomeWriter::new(stdout.lock());

    match cli.command {
        Command::Redirect { inputs } => {
            let (processor, snapshot) = load(&inputs).await?;
            let url = processor
                .checkout(&snapshot.transaction.public_id, &snapshot.context())
                .await
                .into_diagnostic()?;
            writer.write_line(url.as_str()).into_diagnostic()?;
        }
        Command::Callback { inputs, query } => {
            let (processor, snapshot) = load(&inputs).await?;
            let txn_id = &snapshot.transaction.public_id;
            let payload = CallbackPayload::from_query(&query);

            let outcome = processor
                .process_return(txn_id, &payload, &snapshot.context())
                .await
                .into_diagnostic()?;

            let tx = processor
                .transaction(txn_id)
                .await
                .into_diagnostic()?
                .ok_or_else(|| miette!("transaction {txn_id} disappeared"))?;
            let order = processor
                .order(&tx.order_id)
                .await
                .into_diagnostic()?
                .ok_or_else(|| miette!("order {} disappeared", tx.order_id))?;

            writer
                .write_report(&ReturnReport::new(&outcome, &tx, &order))
                .into_diagnostic()?;
        }
    }

    Ok(())
}

/// Seeds in-memory host stores from the snapshot and wires up the processor.
async fn load(inputs: &Inputs) -> Result<(PaymentProcessor, CheckoutSnapshot)> {
    let raw = fs::read_to_string(&inputs.settings).into_diagnostic()?;
    let settings = GatewaySettings::from_json(&raw).into_diagnostic()?;

    let file = File::open(&inputs.snapshot).into_diagnostic()?;
    let snapshot = SnapshotReader::new(file).read().into_diagnostic()?;

    let urls = HostReturnUrls::parse(&snapshot.return_base).into_diagnostic()?;
    let adapter = GatewayAdapter::new(settings, Arc::new(urls));

    let orders = InMemoryOrderStore::new();
    orders
        .store(snapshot.order.clone())
        .await
        .into_diagnostic()?;
    let transactions = InMemoryTransactionStore::new();
    transactions
        .store(snapshot.transaction.clone())
        .await
        .into_diagnostic()?;

    let processor = PaymentProcessor::new(adapter, Box::new(orders), Box::new(transactions));
    Ok((processor, snapshot))
}
