use lexa_core::QueryTranslator;

/// Input parameters for the Parse command strategy.
#[derive(Debug, Clone)]
pub struct ParseInput {
    pub query: String,
}

/// Strategy for showing how a free-text query is translated into filters.
#[derive(Debug, Clone, Copy)]
pub struct ParseStrategy;

impl super::CommandStrategy for ParseStrategy {
    type Input = ParseInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        if input.query.trim().is_empty() {
            anyhow::bail!("Query must not be empty");
        }

        let spec = QueryTranslator::new().translate(&input.query);
        println!("{}", serde_json::to_string_pretty(&spec.applied())?);

        if spec.is_empty() {
            println!("(no rule matched: every string would be returned)");
        }
        if spec.has_length_conflict() {
            println!("warning: min_length is greater than max_length, the API rejects this query");
        }
        Ok(())
    }
}
