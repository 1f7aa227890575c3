//! CLI argument definitions using clap

use clap::Parser;
use clap_complete::Shell;

const LONG_ABOUT: &str = "\
Simple tool for managing unix-like command aliases.
  Without arguments, `ally` prints the list of aliases in the reusable form `ally <name> <value>`.
  Otherwise, if <VALUE> is given, an alias is defined for <NAME> and <VALUE>,
  and if <VALUE> is not given, any existing alias corresponding to <NAME> is removed.
  By default, all parameters given when calling an alias are forwarded to <VALUE>.
  To disable parameter forwarding, append %! at the end of <VALUE> when defining the alias.
  Additionally, you may use a preceding ! to escape environment variables in aliases.
  Ex. ally show-profile \"echo !%USERPROFILE!%\"
  Now, the environment variable will be evaluated when the alias is called.";

/// Simple tool for managing unix-like command aliases
#[derive(Parser, Debug)]
#[command(name = "ally")]
#[command(author, version, about, long_about = LONG_ABOUT)]
pub struct Cli {
    /// The alias to be defined for the given value
    pub name: Option<String>,

    /// The value to be bound to the given alias
    pub value: Option<String>,

    /// Display all aliases that contain <QUERY> in the reusable form `ally <name> <value>`
    #[arg(short, long, value_name = "QUERY")]
    pub search: Option<String>,

    /// Clear all currently set aliases
    #[arg(short, long)]
    pub clear: bool,

    /// Enable debug logging, multiple flags (-d -d) for more verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Print author and version information
    #[arg(long)]
    pub info: bool,

    /// Generate shell completions
    #[arg(long = "generate", value_enum, value_name = "SHELL")]
    pub generator: Option<Shell>,
}
