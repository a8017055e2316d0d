use std::io::Write;
use std::process::ExitCode;

use clap::CommandFactory;
use tracing::{debug, error, info};

use crate::cli::{Cli, Command};
use crate::client::ClickUpClient;
use crate::config::Settings;
use crate::error::{AgentError, Result};
use crate::logging::LogHandle;
use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Usage,
    NotConfigured,
    Failed,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Failed => ExitCode::from(1),
            _ => ExitCode::SUCCESS,
        }
    }
}

/// Runs one subcommand against ClickUp and reports the result on `out`.
pub struct Dispatcher<W: Write> {
    settings: Settings,
    out: W,
    // held for its Drop
    #[allow(dead_code)]
    log: Option<LogHandle>,
}

impl<W: Write> Dispatcher<W> {
    pub fn new(settings: Settings, out: W) -> Self {
        Self {
            settings,
            out,
            log: None,
        }
    }

    pub fn with_log(mut self, log: LogHandle) -> Self {
        self.log = Some(log);
        self
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub fn dispatch(&mut self, command: Option<Command>) -> Outcome {
        info!("Starting ClickUp Agent CLI");

        let command = match command {
            Some(command) => command,
            None => {
                let help = Cli::command().render_help();
                let _ = writeln!(self.out, "{}", help);
                return Outcome::Usage;
            }
        };

        let token = match self.settings.token() {
            Ok(token) => token.to_string(),
            Err(err) => {
                error!("{}", err);
                let _ = render::not_configured(&mut self.out);
                return Outcome::NotConfigured;
            }
        };

        let result = ClickUpClient::with_base_url(&token, &self.settings.base_url)
            .and_then(|client| self.execute(&client, command));

        match result {
            Ok(()) => Outcome::Completed,
            Err(err) => {
                self.report(&err);
                Outcome::Failed
            }
        }
    }

    fn execute(&mut self, client: &ClickUpClient, command: Command) -> Result<()> {
        debug!(base_url = client.base_url(), "client ready");
        let out: &mut dyn Write = &mut self.out;
        match command {
            Command::ListTeams => {
                info!("Fetching teams.");
                let teams = client.get_teams()?;
                render::teams(out, &teams)?;
            }
            Command::ListSpaces { team_id } => {
                info!("Fetching spaces for team {}.", team_id);
                let spaces = client.get_spaces(&team_id)?;
                render::spaces(out, &team_id, &spaces)?;
            }
            Command::CreateSpace {
                team_id,
                space_name,
            } => {
                info!("Creating space '{}' in team {}.", space_name, team_id);
                let space = client.create_space(&team_id, &space_name)?;
                render::created(out, &space)?;
                info!(id = %space["id"], "Successfully created space: '{}'", space_name);
            }
            Command::GetSpace { space_id } => {
                info!("Fetching details for space {}.", space_id);
                let space = client.get_space(&space_id)?;
                render::space(out, &space)?;
            }
            Command::UpdateSpace { space_id, new_name } => {
                info!("Updating space {} with new name '{}'.", space_id, new_name);
                let space = client.update_space(&space_id, &new_name)?;
                render::updated(out, &space)?;
                info!("Successfully updated space {}", space_id);
            }
            Command::DeleteSpace { space_id } => {
                info!("Deleting space with ID: {}", space_id);
                client.delete_space(&space_id)?;
                render::deleted(out, &space_id)?;
                info!("Successfully deleted space with ID: {}", space_id);
            }
        }
        Ok(())
    }

    fn report(&mut self, err: &AgentError) {
        match err {
            AgentError::Http {
                method,
                url,
                status,
                reason,
                body,
            } => {
                error!(%method, %url, status, %reason, %body, "API error occurred");
            }
            AgentError::Decode { body, .. } => {
                error!(error = %err, %body, "malformed response");
            }
            _ => error!(error = %err, "request failed"),
        }
        let _ = render::error(&mut self.out, err);
    }
}
