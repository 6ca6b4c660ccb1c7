use clap::{Parser, Subcommand};

/// Command-line interface definition for weekcal
/// CLI weekly calendar backed by a local SQLite store
#[derive(Parser)]
#[command(
    name = "weekcal",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple weekly calendar CLI: plan, view and edit timed events from the terminal",
    long_about = None
)]
pub struct Cli {
    /// Override store path (useful for tests or a custom calendar file)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the local store
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Create a new event
    Add {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Start time (HH:MM)
        start: String,

        /// End time (HH:MM)
        end: String,

        /// Event title
        title: String,

        /// Color: blue, violet, emerald/green, amber or rose
        #[arg(long = "color", short = 'c')]
        color: Option<String>,

        /// Free-form note attached to the event
        #[arg(long = "comment")]
        comment: Option<String>,
    },

    /// Edit an existing event (only the given fields change)
    Edit {
        /// Event id, as printed by `add` and `list`
        id: String,

        #[arg(long = "title")]
        title: Option<String>,

        #[arg(long = "date", help = "New date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long = "start", help = "New start time (HH:MM)")]
        start: Option<String>,

        #[arg(long = "end", help = "New end time (HH:MM)")]
        end: Option<String>,

        #[arg(long = "color", short = 'c')]
        color: Option<String>,

        #[arg(long = "comment")]
        comment: Option<String>,
    },

    /// Delete an event by id
    Del {
        /// Event id, as printed by `add` and `list`
        id: String,

        /// Skip the confirmation prompt
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// List events for one day, or the whole calendar
    List {
        /// Date (YYYY-MM-DD); omit to list every stored event
        date: Option<String>,
    },

    /// Render the week grid
    Week {
        /// Anchor date (YYYY-MM-DD); defaults to today
        date: Option<String>,

        /// Go back N weeks from the anchor
        #[arg(long = "prev", value_name = "N", default_value_t = 0)]
        prev: u32,

        /// Go forward N weeks from the anchor
        #[arg(long = "next", value_name = "N", default_value_t = 0)]
        next: u32,
    },

    /// Print the selectable start/end time options
    Times,

    /// Show or change the color theme
    Theme {
        /// Theme to activate: light or dark
        theme: Option<String>,

        /// Switch to the other theme
        #[arg(long = "toggle", conflicts_with = "theme")]
        toggle: bool,
    },

    /// Print rows from the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal audit log")]
        print: bool,
    },
}
