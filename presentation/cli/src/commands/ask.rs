use std::io::Write;

use anyhow::Context;

use business::domain::conversation::use_cases::ask::{AskParams, AskUseCase};

/// Runs one single-turn request and prints the reply.
pub async fn run<W: Write>(
    use_case: &dyn AskUseCase,
    params: AskParams,
    output: &mut W,
) -> anyhow::Result<()> {
    let reply = use_case
        .execute(params)
        .await
        .context("single-turn request failed")?;

    writeln!(output, "{}", reply.trim_end())?;
    Ok(())
}
