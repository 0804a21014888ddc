use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "folio", bin_name = "folio", version = get_version())]
#[command(about = "Titled pages of ordered paragraphs, kept locally", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding pages.json and config.json
    #[arg(long, global = true, env = "FOLIO_DATA_DIR", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a page from the command line
    #[command(alias = "n")]
    New {
        /// Title words (joined with spaces)
        title: Vec<String>,

        /// A paragraph; repeat for more, in order
        #[arg(short = 'p', long = "paragraph", value_name = "TEXT")]
        paragraphs: Vec<String>,
    },

    /// Compose a page interactively, line by line from stdin
    #[command(alias = "c")]
    Compose {
        /// Title words (joined with spaces)
        title: Vec<String>,
    },

    /// List pages
    #[command(alias = "ls")]
    List,

    /// Show a page
    #[command(alias = "v")]
    View {
        /// Page id
        id: String,
    },

    /// Delete one or more pages
    #[command(alias = "rm")]
    Delete {
        /// Page ids (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Print where the page table is stored
    Path,

    /// Get or set configuration
    Config {
        /// Configuration key (preview-width, log-level)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
