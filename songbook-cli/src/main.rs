//! songbook CLI
//!
//! Command-line interface for querying the music catalog database.

mod commands;
mod error;
mod settings;

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use songbook_catalog::SortOrder;

pub(crate) use error::CliError;

#[derive(Parser)]
#[command(name = "songbook")]
#[command(about = "Query the music catalog database", long_about = None)]
struct Cli {
    /// Database file (defaults to the saved setting, then ./music.db)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Log the SQL text of each query
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full query walkthrough (the default with no subcommand)
    Demo,

    /// Create empty artists, albums and songs tables
    Init,

    /// List all artists
    Artists {
        /// Ordering: none, asc or desc
        #[arg(short, long, default_value_t = SortOrder::Ascending)]
        order: SortOrder,
    },

    /// List the albums of one artist (exact name)
    Albums {
        artist: String,

        /// Ordering: none, asc or desc
        #[arg(short, long, default_value_t = SortOrder::Ascending)]
        order: SortOrder,
    },

    /// Show every artist and album containing a song (exact title)
    Song {
        title: String,

        /// Ordering: none, asc or desc
        #[arg(short, long, default_value_t = SortOrder::Ascending)]
        order: SortOrder,
    },

    /// Count the rows of a table
    Count { table: String },

    /// Show the column names of the songs table
    Metadata,

    /// Manage the artist_list view
    View {
        #[command(subcommand)]
        action: ViewAction,
    },

    /// Rebuild and query the contacts exercise table (defaults to ./testjava.db)
    Contacts,

    /// Inspect the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ViewAction {
    /// Create the view if it does not exist
    Create,

    /// Query the view for a song title
    Song { title: String },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the settings file path
    Path,

    /// Show the settings file and the resolved database path
    Show,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let db_override = cli.db;
    let db_path = || settings::resolve_db_path(db_override.clone());

    let result = match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => commands::demo::run_demo(&db_path()),
        Commands::Init => commands::init::run_init(&db_path()),
        Commands::Artists { order } => commands::query::run_artists(&db_path(), order),
        Commands::Albums { artist, order } => {
            commands::query::run_albums(&db_path(), &artist, order)
        }
        Commands::Song { title, order } => commands::query::run_song(&db_path(), &title, order),
        Commands::Count { table } => commands::query::run_count(&db_path(), &table),
        Commands::Metadata => commands::query::run_metadata(&db_path()),
        Commands::View { action } => match action {
            ViewAction::Create => commands::view::run_view_create(&db_path()),
            ViewAction::Song { title } => commands::view::run_view_song(&db_path(), &title),
        },
        Commands::Contacts => {
            let path = db_override
                .clone()
                .unwrap_or_else(|| PathBuf::from(songbook_db::CONTACTS_DB_NAME));
            commands::contacts::run_contacts(&path)
        }
        Commands::Config { action } => match action {
            ConfigAction::Path => commands::config::run_config_path(),
            ConfigAction::Show => commands::config::run_config_show(db_override.clone()),
        },
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

/// Route log output to stdout; `info` lines print bare, as program output.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stdout)
        .format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            log::Level::Warn => writeln!(
                buf,
                "{} {}",
                "warning:".if_supports_color(Stdout, |t| t.yellow()),
                record.args()
            ),
            log::Level::Error => writeln!(
                buf,
                "{} {}",
                "error:".if_supports_color(Stdout, |t| t.red()),
                record.args()
            ),
            _ => writeln!(
                buf,
                "{}",
                record.args().if_supports_color(Stdout, |t| t.dimmed())
            ),
        })
        .init();
}

pub(crate) fn log_blank() {
    log::info!("");
}
