use clap::{Parser, Subcommand};
use package_sorting::DEFAULT_CONFIG_FILE;

#[derive(Parser)]
#[command(name = "package-sorter")]
#[command(
    author,
    version,
    about = "Classify shipping packages as STANDARD, SPECIAL or REJECTED"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the package sorting HTTP API
    Serve {
        /// Configuration file path (defaults are used if it does not exist)
        #[clap(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: String,

        /// Override the configured listen host
        #[clap(long)]
        host: Option<String>,

        /// Override the configured listen port
        #[clap(short, long)]
        port: Option<u16>,

        /// Override the configured log level (trace, debug, info, warn, error)
        #[clap(long)]
        log_level: Option<String>,
    },

    /// Classify a single package locally without starting the server
    Classify {
        /// Width of the package
        #[clap(long, allow_negative_numbers = true)]
        width: Option<f64>,

        /// Height of the package
        #[clap(long, allow_negative_numbers = true)]
        height: Option<f64>,

        /// Length of the package
        #[clap(long, allow_negative_numbers = true)]
        length: Option<f64>,

        /// Mass of the package
        #[clap(long, allow_negative_numbers = true)]
        mass: Option<f64>,

        /// Print the result as JSON, the way the API returns it
        #[clap(long, default_value_t = false)]
        json: bool,
    },

    /// Classify a set of sample packages and show how each result is reached
    Demo,

    /// Write a default configuration file
    Init {
        /// Configuration file path to create
        #[clap(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: String,

        /// Overwrite the file if it already exists
        #[clap(long, default_value_t = false)]
        force: bool,
    },
}
