use clap::{Parser, Subcommand};

pub const MYSQL_DSN_ENV: &str = "KENNEL_MYSQL_DSN";

#[derive(Debug, Parser)]
#[command(name = "kennel", about = "Operate a persistent Kennel record store")]
pub struct CLI {
    /// MySQL DSN of the record store.
    #[arg(long, env = MYSQL_DSN_ENV)]
    pub mysql_dsn: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all records.
    List,
    /// Fetch one record by id.
    Get { id: String },
    /// Create a record.
    Create {
        #[arg(long)]
        breed: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        birth_date: String,
        #[arg(long)]
        image: Option<String>,
        #[arg(long)]
        info: Option<String>,
    },
    /// Apply a partial update; omitted fields stay unchanged.
    Update {
        id: String,
        #[arg(long)]
        breed: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        birth_date: Option<String>,
        #[arg(long)]
        image: Option<String>,
        /// Pass an empty string to clear the stored info.
        #[arg(long)]
        info: Option<String>,
    },
    /// Delete a record by id.
    Delete { id: String },
}
