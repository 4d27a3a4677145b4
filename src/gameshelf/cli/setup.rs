use clap::{CommandFactory, Parser, Subcommand};
use std::fmt::Write as _;

#[derive(Parser, Debug)]
#[command(
    name = "gameshelf",
    bin_name = "gameshelf",
    version,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Catalogue your video game collection", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Sections of the top-level help, in display order. Commands are listed in
/// the order given here rather than clap's declaration order.
pub const HELP_SECTIONS: &[(&str, &[&str])] = &[
    ("Your collection", &["list", "add", "search", "stats"]),
    ("A single game", &["view", "edit", "image", "delete"]),
    ("Moving data", &["export", "import", "seed"]),
    ("Setup", &["platforms", "config", "init", "paths", "help"]),
];

pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "gameshelf {}",
        cmd.get_version().unwrap_or(env!("CARGO_PKG_VERSION"))
    );
    out.push_str("Catalogue your video game collection\n\n");
    out.push_str("Usage: gameshelf [OPTIONS] [COMMAND]\n");

    for (title, names) in HELP_SECTIONS {
        let _ = writeln!(out, "\n{}:", title);
        for sub in names.iter().filter_map(|n| cmd.find_subcommand(n)) {
            let about = sub.get_about().map(|a| a.to_string()).unwrap_or_default();
            let _ = writeln!(out, "  {:<12} {}", sub.get_name(), about);
        }
    }

    out.push_str("\nPick games by the number shown in `list`, by `id:<id>`, or by title.\n");
    out.push_str("Running gameshelf with no command lists the collection.\n\n");
    out.push_str("Options:\n");
    out.push_str("  -v, --verbose    Debug logging on stderr\n");
    out.push_str("  -h, --help       Print help\n");
    out.push_str("  -V, --version    Print version\n");
    out
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Clap's own help for one subcommand, or the grouped help when `name` is
/// not a subcommand.
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();
    match cmd.find_subcommand_mut(name) {
        Some(sub) => print!("{}", sub.render_help()),
        None => {
            eprintln!("Unknown command: {}\n", name);
            print_grouped_help();
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Core(CoreCommands),

    #[command(flatten)]
    Game(GameCommands),

    #[command(flatten)]
    Data(DataCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum CoreCommands {
    /// Add a game to the collection
    #[command(alias = "a", display_order = 1)]
    Add {
        /// Platform, e.g. "Super Nintendo" (see `gameshelf platforms`)
        #[arg(short, long, default_value = "")]
        platform: String,

        /// Free-form notes
        #[arg(short, long, default_value = "")]
        notes: String,

        /// Cover image URL
        #[arg(long, default_value = "")]
        image_url: String,

        /// The manual is included
        #[arg(long)]
        manual: bool,

        /// The box is included
        #[arg(long = "box")]
        boxed: bool,

        /// Title words (joined with spaces)
        #[arg(trailing_var_arg = true)]
        title: Vec<String>,
    },

    /// List games, grouped by platform
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Only show games for this platform
        #[arg(short, long)]
        platform: Option<String>,
    },

    /// Search games by title
    #[command(display_order = 3)]
    Search {
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,
    },

    /// Show collection statistics
    #[command(display_order = 4)]
    Stats,
}

#[derive(Subcommand, Debug)]
pub enum GameCommands {
    /// Show one or more games in full
    #[command(alias = "v", display_order = 10)]
    View {
        /// Games to show (e.g. 1 3, id:<id>, or a title)
        #[arg(required = true, num_args = 1..)]
        games: Vec<String>,
    },

    /// Change fields of a game
    #[command(alias = "e", display_order = 11)]
    Edit {
        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New platform
        #[arg(short, long)]
        platform: Option<String>,

        /// New notes (pass "" to clear)
        #[arg(short, long)]
        notes: Option<String>,

        /// New cover image URL (pass "" to clear)
        #[arg(long)]
        image_url: Option<String>,

        /// Whether the manual is included
        #[arg(long, value_name = "BOOL")]
        manual: Option<bool>,

        /// Whether the box is included
        #[arg(long = "box", value_name = "BOOL")]
        boxed: Option<bool>,

        /// Game to edit (index, id:<id>, or title)
        #[arg(required = true, num_args = 1..)]
        game: Vec<String>,
    },

    /// Delete one or more games
    #[command(alias = "rm", display_order = 12)]
    Delete {
        /// Games to delete (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        games: Vec<String>,
    },

    /// Find cover art for a game
    #[command(display_order = 13)]
    Image {
        /// Store the Nth result as the game's image
        #[arg(long, value_name = "N")]
        pick: Option<usize>,

        /// Game to search for (index, id:<id>, or title)
        #[arg(required = true, num_args = 1..)]
        game: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum DataCommands {
    /// Replace the collection with the games in a JSON file
    #[command(display_order = 20)]
    Import {
        /// File previously written by `export`
        path: String,
    },

    /// Write the collection to a JSON file
    #[command(display_order = 21)]
    Export {
        /// Target file (defaults to the export-file setting)
        path: Option<String>,
    },

    /// Load the bundled starter games
    #[command(display_order = 22)]
    Seed {
        /// Replace a non-empty collection
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// List known platforms and how many games you own on each
    #[command(display_order = 30)]
    Platforms,

    /// Get or set configuration
    #[command(display_order = 31)]
    Config {
        /// Configuration key (e.g., export-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create the data directory and default config
    #[command(display_order = 32)]
    Init,

    /// Print where gameshelf keeps its files
    #[command(display_order = 33)]
    Paths,

    /// Print help for gameshelf or a subcommand
    #[command(display_order = 34)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}
