use lexa_server::dto::StringResponse;

/// Input parameters for the Analyze command strategy.
#[derive(Debug, Clone)]
pub struct AnalyzeInput {
    pub value: String,
}

/// Strategy for analyzing a single string without a server.
///
/// Prints the record exactly as the HTTP API would render it.
#[derive(Debug, Clone, Copy)]
pub struct AnalyzeStrategy;

impl super::CommandStrategy for AnalyzeStrategy {
    type Input = AnalyzeInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let record = lexa_core::analyze(&input.value);
        let rendered = serde_json::to_string_pretty(&StringResponse::from(&record))?;
        println!("{rendered}");
        Ok(())
    }
}
