use funnel_core::FunnelResult;
use funnel_domain::commands::{Command, Outcome};
use funnel_domain::BoardStore;
use funnel_persistence::{JsonFileStore, Workspace};

/// One CLI invocation's view of the data file.
///
/// Each command is saved as soon as it applies, so a later failure in the
/// same invocation never loses earlier changes.
pub struct CliContext {
    workspace: Workspace<JsonFileStore>,
}

impl CliContext {
    pub async fn load(file_path: &str) -> FunnelResult<Self> {
        let workspace = Workspace::open(JsonFileStore::new(file_path)).await?;
        Ok(Self { workspace })
    }

    pub fn store(&self) -> &BoardStore {
        self.workspace.boards()
    }

    pub async fn execute(&mut self, command: Box<dyn Command>) -> FunnelResult<Outcome> {
        self.workspace.execute(command).await
    }

    /// Run a command and exit with an error response if anything it
    /// references is missing.
    pub async fn apply(&mut self, command: Box<dyn Command>) -> anyhow::Result<Outcome> {
        let description = command.description();
        let outcome = self.execute(command).await?;
        if outcome.is_not_found() {
            crate::output::output_error(&format!("Not found: {}", description));
        }
        Ok(outcome)
    }

    /// Id of the entity the command created
    pub async fn create(&mut self, command: Box<dyn Command>) -> anyhow::Result<String> {
        let outcome = self.apply(command).await?;
        outcome
            .created_id()
            .map(str::to_string)
            .ok_or_else(|| anyhow::anyhow!("Command did not create anything"))
    }
}
