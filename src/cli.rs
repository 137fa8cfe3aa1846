use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Plan a road trip from a free-text description.
#[derive(Debug, Parser)]
#[command(name = "roadtrip", version, propagate_version = true, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the route and narration endpoints
    Serve {
        /// Host to bind to
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Plan a trip against a running server
    Plan {
        /// Trip description, e.g. "Drive from Seattle to Portland through scenic coastal views"
        prompt: String,

        /// Server URL
        #[arg(long, value_name = "URL")]
        server: Option<String>,

        /// Write the route and markers as GeoJSON
        #[arg(long, value_name = "PATH")]
        geojson: Option<PathBuf>,

        /// Generate a narration and write the audio
        #[arg(long, value_name = "PATH")]
        narration: Option<PathBuf>,
    },

    /// Show or edit past prompts
    History {
        #[command(subcommand)]
        command: HistoryCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum HistoryCommand {
    /// List past prompts, newest first
    List,

    /// Delete a past prompt
    Delete {
        /// Id of the prompt
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn verifies_the_command_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_a_plan_with_outputs() {
        let cli = Cli::parse_from(["roadtrip", "plan", "Seattle to Portland", "--geojson", "route.json", "--narration", "trip.mp3"]);

        match cli.command {
            Command::Plan { prompt, geojson, narration, server } => {
                assert_eq!(prompt, "Seattle to Portland");
                assert_eq!(geojson, Some(PathBuf::from("route.json")));
                assert_eq!(narration, Some(PathBuf::from("trip.mp3")));
                assert_eq!(server, None);
            }
            other => panic!("Expected a plan command, found {:?}", other),
        }
    }

    #[test]
    fn parses_a_history_delete() {
        let cli = Cli::parse_from(["roadtrip", "--verbose", "history", "delete", "42"]);

        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::History { command: HistoryCommand::Delete { id } } if id == "42"));
    }
}
