//! Command line and environment configuration shared by the binaries.

use std::{path::PathBuf, time::Duration};

use clap::Args;

use crate::{
    Error,
    store::{SupabaseStore, TableNames},
};

/// Where the remote store lives and how to talk to it.
#[derive(Args, Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the Supabase project, e.g. `https://<project>.supabase.co`.
    #[arg(long, env = "PROFIT_STORE_URL")]
    pub store_url: String,

    /// API key for the Supabase project.
    #[arg(long, env = "PROFIT_STORE_KEY", hide_env_values = true)]
    pub store_key: String,

    /// How long to wait for the store to answer a request, in seconds.
    #[arg(long, default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// Name of the table holding users.
    #[arg(long, default_value = "usuarios")]
    pub users_table: String,

    /// Name of the table holding transactions.
    #[arg(long, default_value = "transacciones")]
    pub transactions_table: String,

    /// Name of the table holding savings goals.
    #[arg(long, default_value = "metas_ahorro")]
    pub goals_table: String,
}

impl StoreConfig {
    /// Create the store client described by this config.
    ///
    /// # Errors
    /// Returns [Error::Config] if the URL or key is empty or the HTTP client
    /// cannot be built.
    pub fn connect(&self) -> Result<SupabaseStore, Error> {
        SupabaseStore::new(
            &self.store_url,
            &self.store_key,
            TableNames {
                users: self.users_table.clone(),
                transactions: self.transactions_table.clone(),
                goals: self.goals_table.clone(),
            },
            Duration::from_secs(self.request_timeout_secs),
        )
    }
}

/// How to serve the API and the frontend.
#[derive(Args, Debug, Clone)]
pub struct ServeConfig {
    /// The port to serve the API from.
    #[arg(short, long, env = "PROFIT_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Directory with the built frontend. Only the API is served if it does not exist.
    #[arg(long, default_value = "frontend/dist")]
    pub static_dir: PathBuf,

    /// File to append debug logs to.
    #[arg(long, default_value = "debug.log")]
    pub log_path: PathBuf,
}
