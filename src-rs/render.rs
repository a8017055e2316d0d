use std::io::{self, Write};

use serde_json::Value;

use crate::error::AgentError;

pub fn teams(out: &mut dyn Write, body: &Value) -> io::Result<()> {
    writeln!(out, "Your ClickUp teams (workspaces):")?;
    listing(out, body, "teams")
}

pub fn spaces(out: &mut dyn Write, team_id: &str, body: &Value) -> io::Result<()> {
    writeln!(out, "Spaces in team {}:", team_id)?;
    listing(out, body, "spaces")
}

pub fn created(out: &mut dyn Write, space: &Value) -> io::Result<()> {
    writeln!(
        out,
        "Successfully created space: '{}' (ID: {})",
        field(space, "name"),
        field(space, "id")
    )
}

pub fn space(out: &mut dyn Write, space: &Value) -> io::Result<()> {
    writeln!(out, "Space details:")?;
    let pretty = serde_json::to_string_pretty(space).unwrap_or_else(|_| space.to_string());
    writeln!(out, "{}", pretty)
}

pub fn updated(out: &mut dyn Write, space: &Value) -> io::Result<()> {
    writeln!(out, "Successfully updated space to '{}'", field(space, "name"))
}

pub fn deleted(out: &mut dyn Write, space_id: &str) -> io::Result<()> {
    writeln!(out, "Successfully deleted space with ID: {}", space_id)
}

pub fn not_configured(out: &mut dyn Write) -> io::Result<()> {
    writeln!(
        out,
        "Please configure your CLICKUP_API_TOKEN in the environment or a .env file."
    )
}

pub fn error(out: &mut dyn Write, err: &AgentError) -> io::Result<()> {
    match err {
        AgentError::Http { status, reason, .. } => {
            writeln!(out, "An API error occurred: {} {}", status, reason)?
        }
        AgentError::Transport(source) => {
            writeln!(out, "Could not reach the ClickUp API: {}", source)?
        }
        AgentError::Decode { url, source, .. } => {
            writeln!(out, "Received a malformed response from {}: {}", url, source)?
        }
        AgentError::Config(msg) => writeln!(out, "Configuration error: {}", msg)?,
        AgentError::Output(source) => writeln!(out, "Output error: {}", source)?,
    }
    if let Some(body) = err.body() {
        writeln!(out, "Response body: {}", body)?;
    }
    Ok(())
}

fn listing(out: &mut dyn Write, body: &Value, key: &str) -> io::Result<()> {
    let items = body.get(key).and_then(Value::as_array);
    for item in items.into_iter().flatten() {
        writeln!(out, "- Name: {}, ID: {}", field(item, "name"), field(item, "id"))?;
    }
    Ok(())
}

/// ClickUp ids are usually strings but some endpoints hand back numbers.
fn field(value: &Value, key: &str) -> String {
    match value.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => "unknown".to_string(),
        Some(other) => other.to_string(),
    }
}
