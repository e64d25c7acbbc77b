//! CLI entry point for the roster person store.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use roster_core::{PersonId, PersonRepository};
use roster_graph::{GraphClient, GraphConfig, Neo4jPersonRepository};

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Manage Person records in the roster graph")]
struct Cli {
    /// Config file prefix (default: roster).
    #[arg(short, long, default_value = "roster")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all people, sorted by name.
    List,
    /// Add a new person.
    Add { name: String },
    /// Show a person by id.
    Show { id: String },
    /// Rename a person.
    Rename { id: String, name: String },
    /// Remove a person. Succeeds even if the id does not exist.
    Remove { id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).json().init();

    let cli = Cli::parse();

    let graph_config = load_graph_config(&cli.config);
    let client = GraphClient::connect(&graph_config).await?;
    let repo = Neo4jPersonRepository::new(client);

    match cli.command {
        Command::List => {
            for person in repo.all().await? {
                println!("{}  {}", person.id, person.name);
            }
        }
        Command::Add { name } => {
            let person = repo.create(&name).await?;
            println!("{}  {}", person.id, person.name);
        }
        Command::Show { id } => {
            match repo.find(&PersonId::from(id.as_str())).await? {
                Some(person) => println!("{}  {}", person.id, person.name),
                None => anyhow::bail!("No person with id {id}"),
            }
        }
        Command::Rename { id, name } => {
            match repo.update(&PersonId::from(id.as_str()), &name).await? {
                Some(person) => println!("{}  {}", person.id, person.name),
                None => anyhow::bail!("No person with id {id}"),
            }
        }
        Command::Remove { id } => {
            repo.delete(&PersonId::from(id.as_str())).await?;
        }
    }

    Ok(())
}

/// Load Neo4j settings from `<prefix>.toml` and `ROSTER__`-prefixed
/// environment variables, falling back to defaults.
fn load_graph_config(file_prefix: &str) -> GraphConfig {
    let cfg = config::Config::builder()
        .add_source(config::File::with_name(file_prefix).required(false))
        .add_source(
            config::Environment::with_prefix("ROSTER")
                .separator("__")
                .try_parsing(true),
        )
        .build();

    match cfg {
        Ok(c) => GraphConfig {
            uri: c
                .get_string("neo4j.uri")
                .unwrap_or_else(|_| "bolt://localhost:7687".to_string()),
            user: c
                .get_string("neo4j.user")
                .unwrap_or_else(|_| "neo4j".to_string()),
            password: c
                .get_string("neo4j.password")
                .unwrap_or_else(|_| "roster-dev".to_string()),
            ..Default::default()
        },
        Err(_) => GraphConfig::default(),
    }
}
