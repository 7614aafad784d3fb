use std::io::{BufRead, Write};

use anyhow::Context;
use tracing::{debug, info};

use business::domain::conversation::use_cases::open_chat::{OpenChatParams, OpenChatUseCase};
use business::domain::conversation::use_cases::send_message::{
    SendMessageParams, SendMessageUseCase,
};

/// Typing this (any case) ends the session.
pub const QUIT_SENTINEL: &str = "quit";

/// Opens a conversation and relays lines from `input` until `quit` or EOF.
///
/// Failing to open the conversation aborts; a failed turn is printed and the
/// loop goes on with the same conversation.
pub async fn run<R: BufRead, W: Write>(
    open_chat: &dyn OpenChatUseCase,
    send_message: &dyn SendMessageUseCase,
    params: OpenChatParams,
    mut input: R,
    output: &mut W,
) -> anyhow::Result<()> {
    let mut conversation = open_chat
        .execute(params)
        .await
        .context("could not open chat session")?;

    writeln!(
        output,
        "Chatting with {}. Type '{}' to leave.",
        conversation.model(),
        QUIT_SENTINEL
    )?;
    writeln!(output, "model> {}", conversation.opening_reply().trim())?;

    loop {
        write!(output, "you> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            debug!("input closed");
            writeln!(output)?;
            break;
        }

        let message = line.trim_end_matches(['\r', '\n']);
        if message.trim().is_empty() {
            continue;
        }
        if message.trim().eq_ignore_ascii_case(QUIT_SENTINEL) {
            writeln!(output, "Bye.")?;
            break;
        }

        let params = SendMessageParams {
            message: message.to_string(),
        };
        match send_message.execute(&mut conversation, params).await {
            Ok(reply) => writeln!(output, "model> {}", reply.trim())?,
            Err(err) => writeln!(output, "error> {}", err)?,
        }
    }

    info!(model = %conversation.model(), "chat session closed");
    Ok(())
}
