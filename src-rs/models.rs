use serde::Serialize;

/// Body shared by space creation and rename.
#[derive(Debug, Serialize)]
pub struct NamePayload<'a> {
    pub name: &'a str,
}
