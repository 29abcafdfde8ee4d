use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

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
#[command(
    name = "stockpile",
    bin_name = "stockpile",
    version = get_version(),
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Track stock levels of electronics, groceries and everything else", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use the global inventory instead of the nearest .stockpile
    #[arg(short, long, global = true, help_heading = "Options")]
    pub global: bool,

    /// Read and write this inventory file
    #[arg(short, long, global = true, value_name = "PATH", help_heading = "Options")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Items,
    Reports,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Items => "Item Commands:",
            CommandGroup::Reports => "Reports:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "add" | "stock" | "remove" => Some(CommandGroup::Items),
            "list" | "search" | "low" => Some(CommandGroup::Reports),
            "menu" | "config" | "init" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[CommandGroup::Items, CommandGroup::Reports, CommandGroup::Misc]
    }
}

pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("stockpile {version}\n"));
    output.push_str("Track stock levels of electronics, groceries and everything else\n");
    output.push('\n');
    output.push_str("Usage: stockpile [OPTIONS] [COMMAND]\n");

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
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("  -g, --global       Use the global inventory\n");
    output.push_str("  -f, --file <PATH>  Read and write this inventory file\n");
    output.push_str("  -v, --verbose      Verbose output\n");
    output.push_str("  -h, --help         Print help\n");
    output.push_str("  -V, --version      Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints help for a command by name, falling back to the grouped help.
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name {
            let help = subcmd.render_help();
            print!("{}", help);
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new item
    #[command(subcommand)]
    Add(AddCommands),

    /// Add or remove stock for an item
    #[command(display_order = 2)]
    Stock {
        /// Item ID
        id: u64,

        #[arg(value_enum)]
        action: StockAction,

        /// How many units to add or remove
        amount: u64,
    },

    /// Remove an item
    #[command(alias = "rm", display_order = 3)]
    Remove {
        /// Item ID
        id: u64,
    },

    /// List every item
    #[command(alias = "ls", display_order = 10)]
    List,

    /// Find items by ID, name, brand or category
    #[command(display_order = 11)]
    Search {
        /// Search words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        terms: Vec<String>,
    },

    /// Report items running low
    #[command(display_order = 12)]
    Low {
        /// Report quantities below this (defaults to low-stock-threshold)
        #[arg(short, long)]
        threshold: Option<i64>,
    },

    /// Interactive numbered menu
    #[command(display_order = 20)]
    Menu,

    /// Get or set configuration
    #[command(display_order = 21)]
    Config {
        /// Configuration key (data-file, low-stock-threshold)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create the .stockpile directory here
    #[command(display_order = 22)]
    Init,

    /// Print help for stockpile or a subcommand
    #[command(display_order = 23)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Add(_) => "add",
            Commands::Stock { .. } => "stock",
            Commands::Remove { .. } => "remove",
            Commands::List => "list",
            Commands::Search { .. } => "search",
            Commands::Low { .. } => "low",
            Commands::Menu => "menu",
            Commands::Config { .. } => "config",
            Commands::Init => "init",
            Commands::Help { .. } => "help",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StockAction {
    Add,
    Remove,
}

#[derive(Subcommand, Debug)]
pub enum AddCommands {
    /// Add an electronics item
    #[command(alias = "e")]
    Electronics {
        /// Item name words
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        #[arg(long, allow_negative_numbers = true)]
        price: f64,

        #[arg(long = "qty", allow_negative_numbers = true)]
        quantity: i64,

        #[arg(long)]
        brand: String,

        /// Warranty period in months
        #[arg(long, default_value_t = 12)]
        warranty: i64,
    },

    /// Add a grocery item
    #[command(alias = "g")]
    Grocery {
        /// Item name words
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        #[arg(long, allow_negative_numbers = true)]
        price: f64,

        #[arg(long = "qty", allow_negative_numbers = true)]
        quantity: i64,

        #[arg(long)]
        category: String,

        /// Expiry date as YYYY-MM-DD
        #[arg(long)]
        expires: String,
    },

    /// Add any other item
    Generic {
        /// Item name words
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        #[arg(long, allow_negative_numbers = true)]
        price: f64,

        #[arg(long = "qty", allow_negative_numbers = true)]
        quantity: i64,

        /// Defaults to General
        #[arg(long)]
        category: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("stockpile").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_subcommand_is_none() {
        assert!(parse(&[]).command.is_none());
    }

    #[test]
    fn add_joins_name_words() {
        let cli = parse(&[
            "add", "electronics", "Gaming", "Laptop", "--price", "999.99", "--qty", "4", "--brand",
            "Acme",
        ]);
        match cli.command {
            Some(Commands::Add(AddCommands::Electronics {
                name,
                price,
                quantity,
                warranty,
                ..
            })) => {
                assert_eq!(name, vec!["Gaming", "Laptop"]);
                assert_eq!(price, 999.99);
                assert_eq!(quantity, 4);
                assert_eq!(warranty, 12);
            }
            other => panic!("unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn stock_parses_action() {
        let cli = parse(&["stock", "3", "remove", "2"]);
        match cli.command {
            Some(Commands::Stock { id, action, amount }) => {
                assert_eq!((id, action, amount), (3, StockAction::Remove, 2));
            }
            other => panic!("unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["ls", "--file", "inv.txt", "-v"]);
        assert_eq!(cli.file, Some(PathBuf::from("inv.txt")));
        assert!(cli.verbose);
        assert_eq!(cli.command.map(|c| c.name()), Some("list"));
    }

    #[test]
    fn every_command_is_grouped() {
        let cmd = Cli::command();
        for sc in cmd.get_subcommands() {
            assert!(
                CommandGroup::for_command(sc.get_name()).is_some(),
                "{} has no help group",
                sc.get_name()
            );
        }
        assert!(get_grouped_help().contains("Item Commands:"));
    }
}
