use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "clickup-agent",
    version,
    about = "A command-line interface to manage your ClickUp account."
)]
pub struct Cli {
    /// Override the API root (also read from CLICKUP_BASE_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List all teams (workspaces).
    ListTeams,
    /// List all spaces in a team.
    ListSpaces {
        /// The ID of the team.
        team_id: String,
    },
    /// Create a new space.
    CreateSpace {
        /// The ID of the team to create the space in.
        team_id: String,
        /// The name of the new space.
        space_name: String,
    },
    /// Get details for a specific space.
    GetSpace {
        /// The ID of the space.
        space_id: String,
    },
    /// Rename a space.
    UpdateSpace {
        /// The ID of the space to update.
        space_id: String,
        /// The new name for the space.
        new_name: String,
    },
    /// Delete a space.
    DeleteSpace {
        /// The ID of the space to delete.
        space_id: String,
    },
}
