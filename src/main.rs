use anyhow::Context;
use clap::{Parser, Subcommand};
use knawat_suppliers::{config, Config, Credentials, ListSuppliersQuery, SupplierClient};
use serde_json::Value;
use std::{io, io::Write};
use tracing_subscriber::EnvFilter;

/// Manage suppliers on the Knawat marketplace.
#[derive(Parser)]
#[command(name = "suppliersctl", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Save credentials to the keyring for later use
    Login,
    #[command(flatten)]
    Api(ApiCommand),
}

#[derive(Subcommand)]
enum ApiCommand {
    /// List suppliers
    List {
        #[arg(long, default_value_t = ListSuppliersQuery::DEFAULT_LIMIT)]
        limit: u32,
        #[arg(long, default_value_t = ListSuppliersQuery::DEFAULT_PAGE)]
        page: u32,
        #[arg(long)]
        sort: Option<String>,
    },
    /// Create a supplier from a JSON object, e.g. '{"name": "john"}'
    Create { supplier: String },
    /// Show the keys of a supplier
    Keys { id: String },
    /// Show a supplier
    Get { id: String },
    /// Show the users of a supplier, looked up by URL-encoded email
    ByEmail { email: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match Cli::parse().command {
        Command::Login => login(),
        Command::Api(command) => run(command).await,
    }
}

async fn run(command: ApiCommand) -> anyhow::Result<()> {
    let config = Config::load().context(
        "no credentials found; set BASIC_USER and BASIC_PASS or run `suppliersctl login`",
    )?;
    let client = SupplierClient::from_config(&config);

    let response = match command {
        ApiCommand::List { limit, page, sort } => {
            let query = ListSuppliersQuery { limit, page, sort };
            client.list_suppliers(query).await?
        }
        ApiCommand::Create { supplier } => {
            let supplier: Value =
                serde_json::from_str(&supplier).context("supplier must be a JSON object")?;
            client.create_supplier(&supplier).await?
        }
        ApiCommand::Keys { id } => client.get_supplier_keys(&id).await?,
        ApiCommand::Get { id } => client.get_supplier_by_id(&id).await?,
        ApiCommand::ByEmail { email } => client.get_supplier_by_email(&email).await?,
    };

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

/// Quick and dirty function to read input from the user.
fn interactive_prompt(prompt_type: &str) -> io::Result<String> {
    let mut response = String::new();
    print!("Please enter {prompt_type} for your Knawat supplier account: ");
    io::stdout().flush()?;
    io::stdin().read_line(&mut response)?;

    Ok(response.trim_end_matches(['\r', '\n']).to_string())
}

fn login() -> anyhow::Result<()> {
    let credentials = Credentials::new(
        interactive_prompt("your username")?,
        interactive_prompt("your password")?,
    )?;
    config::store_credentials(&credentials)?;
    println!("Saved credentials for {}.", credentials.username());
    Ok(())
}
