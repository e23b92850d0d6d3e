//! Command-line interface definition.

use clap::Parser;

/// Default number of entries shown per list page.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Backlot admin console.
#[derive(Debug, Parser)]
#[command(name = "backlotctl", version, about = "Backlot streaming admin console")]
pub struct Cli {
    /// Base origin of the admin API.
    #[arg(long, env = "BACKLOT_API_URL", default_value = "https://api.backlot.tv")]
    pub api_url: String,

    /// Access token for protected admin calls.
    ///
    /// Issued out of band; without it the console refuses to start.
    #[arg(long, env = "BACKLOT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Entries per page on listing screens.
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,
}
