//! Core CLI definitions

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "itemdata")]
#[command(about = "Ship, module, suit and weapon reference data", long_about = None)]
pub struct Cli {
    /// Output format (defaults to the configured format, then text)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Log lookups of unknown ids
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up a ship module by journal id
    #[command(visible_alias = "m")]
    Module {
        /// Module id (e.g. "Hpt_MultiCannon_Fixed_Medium")
        id: String,
    },

    /// Show hull properties
    Ship {
        /// Journal id (e.g. "krait_mkii") or display name (e.g. "Krait Mk II")
        name: String,

        /// Show only this property (e.g. hull_mass, manufacturer)
        #[arg(short, long)]
        property: Option<String>,
    },

    /// Look up an on-foot suit
    Suit {
        /// Suit id (e.g. "utilitysuit_class1")
        id: String,
    },

    /// Look up an on-foot weapon
    Weapon {
        /// Weapon id (e.g. "wpn_m_assaultrifle_kinetic_fauto")
        id: String,
    },

    /// Look up an on-foot actor
    Actor {
        /// Actor id (e.g. "assaultsuitai_class1")
        id: String,
    },

    /// Classify one or more ids
    #[command(visible_alias = "c")]
    Classify {
        /// Ids to classify
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// List module categories
    Types {
        /// Include categories that cannot be bought
        #[arg(short, long)]
        all: bool,
    },

    /// List the modules in one category
    ListModules {
        /// Category name (e.g. "Fuel Scoop")
        category: String,
    },

    /// Configure default settings
    Configure {
        /// Set default output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Set default log filter (e.g. "info", "itemdata=trace")
        #[arg(long)]
        log_level: Option<String>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = ["itemdata", "module", "int_codex", "--format", "json", "-v"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Module { ref id } if id == "int_codex"));
    }

    #[test]
    fn test_classify_requires_ids() {
        assert!(Cli::try_parse_from(["itemdata", "classify"]).is_err());
        let cli = Cli::try_parse_from(["itemdata", "classify", "adder", "testbuggy"]).unwrap();
        assert!(matches!(cli.command, Commands::Classify { ref ids } if ids.len() == 2));
    }

    #[test]
    fn test_list_modules_kebab_case() {
        let cli = Cli::try_parse_from(["itemdata", "list-modules", "Fuel Scoop"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::ListModules { ref category } if category == "Fuel Scoop"
        ));
    }
}
