use clap::{CommandFactory, Parser, Subcommand};

/// Returns the version string, with the git hash appended for non-release builds.
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
#[command(
    name = "saitama",
    bin_name = "saitama",
    version = get_version(),
    disable_help_subcommand = true
)]
#[command(about = "Track your coding problems and pick what to train next", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Core,
    Problem,
    Data,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Core => "Core Commands:",
            CommandGroup::Problem => "Per-Problem Commands:",
            CommandGroup::Data => "Data Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "add" | "list" | "pick" | "search" => Some(CommandGroup::Core),
            "edit" | "solve" | "delete" => Some(CommandGroup::Problem),
            "tags" | "stats" | "import" | "export" => Some(CommandGroup::Data),
            "config" | "path" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Core,
            CommandGroup::Problem,
            CommandGroup::Data,
            CommandGroup::Misc,
        ]
    }
}

pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("saitama {version}\n"));
    output.push_str("Your coding problem training partner\n");
    output.push('\n');
    output.push_str("Usage: saitama [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();
    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<10} {}\n", sc.get_name(), about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("  -v, --verbose    Verbose output\n");
    output.push_str("  -h, --help       Print help\n");
    output.push_str("  -V, --version    Print version\n");
    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new coding problem
    #[command(alias = "a", display_order = 1)]
    Add {
        /// Problem ID (e.g. LC1, CF123), stored upper-cased
        id: String,

        /// Problem name
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        /// Comma separated tags (e.g. array,hashmap)
        #[arg(short, long)]
        tags: Option<String>,

        /// easy, medium or hard
        #[arg(short, long)]
        difficulty: Option<String>,

        /// Where the problem lives (leetcode, codeforces, ...)
        #[arg(short, long)]
        platform: Option<String>,

        #[arg(short, long)]
        url: Option<String>,

        #[arg(short, long)]
        notes: Option<String>,
    },

    /// List all saved problems
    #[command(alias = "ls", display_order = 2)]
    List,

    /// Pick random problems to solve
    #[command(display_order = 3)]
    Pick {
        /// How many problems (defaults to pick-count from config)
        count: Option<usize>,

        /// Only pick problems with this tag
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Search problems by name or tag
    #[command(display_order = 4)]
    Search { query: String },

    /// Edit a problem by ID
    #[command(alias = "e", display_order = 10)]
    Edit {
        id: String,

        #[arg(long)]
        name: Option<String>,

        /// Replace all tags (comma separated, empty string clears)
        #[arg(short, long)]
        tags: Option<String>,

        #[arg(short, long)]
        difficulty: Option<String>,

        #[arg(short, long)]
        platform: Option<String>,

        #[arg(short, long)]
        url: Option<String>,

        #[arg(short, long)]
        notes: Option<String>,
    },

    /// Record that you solved a problem
    #[command(display_order = 11)]
    Solve { id: String },

    /// Delete a problem by ID
    #[command(alias = "rm", display_order = 12)]
    Delete {
        id: String,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List all tags with problem counts
    #[command(display_order = 20)]
    Tags,

    /// Show statistics
    #[command(display_order = 21)]
    Stats,

    /// Merge problems from a JSON file
    #[command(display_order = 22)]
    Import {
        file: String,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Export all problems to a JSON file
    #[command(display_order = 23)]
    Export { file: String },

    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// Configuration key (max-backups, pick-count)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print where data, backups and config are stored
    #[command(display_order = 31)]
    Path,
}
