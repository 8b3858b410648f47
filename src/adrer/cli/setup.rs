use clap::{Parser, Subcommand};

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "adr-er", bin_name = "adr-er", version = get_version())]
#[command(about = "A friendly little thing for managing architectural decision records", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding ADR files.
    ///
    /// When omitted, "architectural-decision-records", "adr" and ".adr" in the
    /// current directory are checked, and the first that is empty or holds only
    /// ADR files (subdirectories allowed) is used. A directory given here is
    /// trusted as is. "-" writes to stdout.
    #[arg(short, long, global = true, allow_hyphen_values = true)]
    pub dir: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new ADR document
    #[command(alias = "new")]
    Create {
        /// Name your decision (3-128 characters)
        #[arg(short, long)]
        title: String,

        /// Relevant context
        #[arg(long, default_value = "")]
        context: String,

        /// What was decided
        #[arg(long, default_value = "")]
        decision: String,

        /// Current status (defaults to the configured default status)
        #[arg(short, long)]
        status: Option<String>,

        /// Consequences of the decision
        #[arg(long, default_value = "")]
        consequences: String,

        /// Output format (defaults to the configured format)
        #[arg(long)]
        format: Option<String>,

        /// Replace an existing file with the same name
        #[arg(long)]
        force: bool,
    },

    /// List ADRs in the store directory
    #[command(alias = "ls")]
    List,

    /// Show one ADR
    #[command(alias = "v")]
    View {
        /// Sequence number (e.g. 3 or 0003) or filename
        selector: String,

        /// Print the file as is, without terminal styling
        #[arg(long)]
        raw: bool,
    },

    /// List available templates
    Templates,

    /// Create a store directory in the current directory
    Init {
        /// One of: architectural-decision-records, adr, .adr
        #[arg(long)]
        name: Option<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (format, default-status, template-dir)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
