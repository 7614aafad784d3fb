use clap::{Parser, Subcommand};

pub const DEFAULT_CHAT_PROMPT: &str = "You are a professional translator. Translate between Korean and English as the user asks. Example: translate 'Hello' into Korean -> 안녕하세요";

#[derive(Parser, Debug)]
#[command(name = "gemini-cli", version, about = "Send prompts to Gemini and print the replies")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a context prompt and a question as one request
    Ask {
        question: String,

        /// Context prompt sent in front of the question
        #[arg(short, long)]
        prompt: String,

        /// Overrides GEMINI_MODEL
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Start an interactive chat session; type `quit` to leave
    Chat {
        /// Initial prompt that frames the whole conversation
        #[arg(short, long, default_value = DEFAULT_CHAT_PROMPT)]
        prompt: String,

        /// Overrides GEMINI_MODEL
        #[arg(short, long)]
        model: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_ask_command() {
        let cli = Cli::try_parse_from([
            "gemini-cli",
            "ask",
            "--prompt",
            "You are a news reporter.",
            "Report today's weather.",
        ])
        .unwrap();

        match cli.command {
            Commands::Ask {
                question,
                prompt,
                model,
            } => {
                assert_eq!(question, "Report today's weather.");
                assert_eq!(prompt, "You are a news reporter.");
                assert!(model.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn should_require_prompt_for_ask() {
        let result = Cli::try_parse_from(["gemini-cli", "ask", "question only"]);

        assert!(result.is_err());
    }

    #[test]
    fn should_use_translator_prompt_by_default_for_chat() {
        let cli = Cli::try_parse_from(["gemini-cli", "chat", "-m", "gemini-1.5-pro"]).unwrap();

        match cli.command {
            Commands::Chat { prompt, model } => {
                assert_eq!(prompt, DEFAULT_CHAT_PROMPT);
                assert_eq!(model.as_deref(), Some("gemini-1.5-pro"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
