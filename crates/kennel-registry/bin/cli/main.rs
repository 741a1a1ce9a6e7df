mod cli;

use crate::cli::{Command, CLI};
use clap::Parser;
use kennel_core::{PuppyId, PuppyPayload, Registry};
use kennel_registry::{RegistryService, SlugGenerator};
use kennel_storage::{MySqlStore, MySqlStoreOptions};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = CLI::try_parse()?;

    let store = MySqlStore::connect(
        MySqlStoreOptions::builder().dsn(config.mysql_dsn).build(),
    )
    .await?;
    let registry = RegistryService::new(store, SlugGenerator::new());

    match config.command {
        Command::List => {
            let records = registry.list().await?;
            info!(count = records.len(), "listed records");
            print_json(&records)?;
        }
        Command::Get { id } => match registry.get(&PuppyId::new(id)).await? {
            Some(record) => print_json(&record)?,
            None => println!("not found"),
        },
        Command::Create {
            breed,
            name,
            birth_date,
            image,
            info,
        } => {
            let payload = PuppyPayload {
                breed: Some(breed),
                name: Some(name),
                birth_date: Some(birth_date),
                image,
                info,
            };
            print_json(&registry.create(payload).await?)?;
        }
        Command::Update {
            id,
            breed,
            name,
            birth_date,
            image,
            info,
        } => {
            let patch = PuppyPayload {
                breed,
                name,
                birth_date,
                image,
                info,
            };
            match registry.update(&PuppyId::new(id), patch).await? {
                Some(record) => print_json(&record)?,
                None => println!("not found"),
            }
        }
        Command::Delete { id } => {
            let removed = registry.delete(&PuppyId::new(id)).await?;
            println!("{removed}");
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
