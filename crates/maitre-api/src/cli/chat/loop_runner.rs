//! The interactive chat loop.
//!
//! Wires the webhook sender, the optional language-model client, and
//! the terminal UI into a [`ConversationController`], then pumps input
//! events until the user exits.

use std::sync::Arc;

use console::style;
use tracing::warn;

use maitre_core::controller::ConversationController;
use maitre_core::formatter::FollowupGenerator;
use maitre_core::ui::ChatUi;
use maitre_infra::language_model::LanguageModelClient;
use maitre_infra::webhook::WebhookSender;
use maitre_types::chat::{ConversationTurn, TurnRole};
use maitre_types::config::WidgetConfig;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::terminal_ui::TerminalUi;

/// Run the chat session until EOF, interrupt, or /exit.
pub async fn run_chat_loop(config: WidgetConfig) -> anyhow::Result<()> {
    print_welcome_banner(&config);

    let sender = WebhookSender::new(config.webhook_url.clone())?;
    let ui = Arc::new(TerminalUi::new(config.restaurant_name.clone()));
    let language_model = LanguageModelClient::from_config(&config);
    // The same client serves /suggest; the controller owns its own copy.
    let suggester = language_model.clone();

    let mut controller =
        ConversationController::new(sender, Arc::clone(&ui)).with_formatter(language_model);
    controller.start_session();

    let (mut input, _writer) = ChatInput::new("> ".to_string())?;

    loop {
        match input.read_line().await {
            InputEvent::Eof => break,
            InputEvent::Interrupted => {
                println!();
                break;
            }
            InputEvent::Message(message) => {
                if message.is_empty() {
                    continue;
                }

                if let Some(command) = commands::parse(&message) {
                    match command {
                        ChatCommand::Help => commands::print_help(),
                        ChatCommand::Clear => input.clear(),
                        ChatCommand::History => print_history(controller.history()),
                        ChatCommand::Suggest => {
                            suggest_followups(&suggester, controller.history(), &ui).await;
                        }
                        ChatCommand::Exit => break,
                        ChatCommand::Unknown(cmd) => {
                            println!(
                                "{}",
                                style(format!("Unknown command: {cmd} (try /help)")).dim()
                            );
                        }
                    }
                    continue;
                }

                // A bare number picks the matching quick reply.
                let text = message
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| ui.option(n))
                    .unwrap_or(message);

                controller.submit(&text).await;
            }
        }
    }

    println!("{}", style("Goodbye!").dim());
    Ok(())
}

/// Print the conversation so far, one line per turn.
fn print_history(history: &[ConversationTurn]) {
    if history.is_empty() {
        println!("{}", style("No messages yet.").dim());
        println!();
        return;
    }

    println!();
    for turn in history {
        let label = match turn.role {
            TurnRole::User => style("you      ").green(),
            TurnRole::Assistant => style("assistant").cyan(),
        };
        let preview: String = turn.content.chars().take(97).collect();
        if preview.len() < turn.content.len() {
            println!("  {} {}...", label, preview);
        } else {
            println!("  {} {}", label, preview);
        }
    }
    println!();
}

/// Ask the language model for fresh quick replies based on the last
/// user message.
async fn suggest_followups(
    suggester: &Option<LanguageModelClient>,
    history: &[ConversationTurn],
    ui: &Arc<TerminalUi>,
) {
    let Some(client) = suggester else {
        println!(
            "{}",
            style("Suggestions need a language_model_key in the config.").dim()
        );
        return;
    };

    let Some(last_user_turn) = history
        .iter()
        .rev()
        .find(|turn| turn.role == TurnRole::User)
    else {
        println!("{}", style("Ask a question first.").dim());
        return;
    };

    match client.suggest(&last_user_turn.content).await {
        Ok(followups) if !followups.is_empty() => {
            ui.render_quick_replies(&followups);
        }
        Ok(_) => {
            println!("{}", style("No suggestions this time.").dim());
        }
        Err(err) => {
            warn!(error = %err, "follow-up suggestion failed");
            println!("{}", style("Suggestions are unavailable right now.").dim());
        }
    }
}
