use anyhow::Result;
use clap::{Parser, Subcommand};
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing::Level;

use rolodex::database::{Customer, Store};
use rolodex::server::{start_server, AppState, ServerConfig};
use rolodex::RolodexConfig;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
struct Cli {
    /// configuration file path, by default $HOME/.rolodex/rolodex.toml is used
    #[clap(short, long)]
    config: Option<String>,

    /// Print debug information
    #[clap(long)]
    debug: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web interface
    Serve {
        /// Bind address, overriding the configuration file
        #[clap(long)]
        address: Option<String>,

        /// Listen port, overriding the configuration file
        #[clap(short, long)]
        port: Option<u16>,
    },

    /// Create or refresh the database schema
    Init,

    /// Print all customers, newest first
    List {
        /// Output as JSON instead of a table
        #[clap(long)]
        json: bool,
    },
}

#[derive(Tabled)]
struct CustomerRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "First name")]
    first_name: String,
    #[tabled(rename = "Last name")]
    last_name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Gender")]
    gender: String,
}

impl From<Customer> for CustomerRow {
    fn from(c: Customer) -> Self {
        Self {
            id: c.id,
            first_name: c.first_name,
            last_name: c.last_name,
            email: c.email,
            location: c.location,
            gender: c.gender.as_str().to_string(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            // filter spans/events with level DEBUG or higher.
            .with_max_level(Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(Level::INFO)
            .init();
    }

    let config = RolodexConfig::new(&cli.config)?;

    match cli.command {
        Commands::Serve { address, port } => {
            let store = Store::open(&config.db_path)?;
            let state = AppState::new(store);

            let server_config = ServerConfig::new()
                .with_address(address.unwrap_or_else(|| config.listen_address.clone()))
                .with_port(port.unwrap_or(config.listen_port));

            start_server(state, server_config).await?;
        }
        Commands::Init => {
            Store::open(&config.db_path)?;
            println!("Database ready at {}", config.db_path);
        }
        Commands::List { json } => {
            let store = Store::open(&config.db_path)?;
            let customers = store.list_customers()?;

            if json {
                println!("{}", serde_json::to_string_pretty(&customers)?);
            } else if customers.is_empty() {
                println!("No customers yet.");
            } else {
                let rows: Vec<CustomerRow> = customers.into_iter().map(Into::into).collect();
                println!("{}", Table::new(rows).with(Style::markdown()));
            }
        }
    }

    Ok(())
}
