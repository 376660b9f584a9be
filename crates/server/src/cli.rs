use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[clap(name = "exercise tracker server")]
pub struct Cli {
    /// Connection string for the document store, e.g.
    /// mongodb://localhost:27017/exercise_tracker
    #[clap(long, env)]
    pub mongo_url: String,
    #[clap(long, env, default_value = "public")]
    pub static_dir: PathBuf,
    #[clap(long, env, default_value = "8080")]
    pub port: u16,
    #[clap(long, env, default_value = "127.0.0.1")]
    pub bind_addr: String,
    /// Cap applied to log queries that don't carry their own limit
    #[clap(long, env, default_value = "500")]
    pub default_log_limit: i64,
}
