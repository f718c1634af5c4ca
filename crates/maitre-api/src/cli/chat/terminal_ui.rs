//! Terminal implementation of the controller's render callbacks.

use std::sync::Mutex;
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use maitre_core::ui::ChatUi;
use maitre_types::chat::TurnRole;

/// Renders turns, quick replies, and the busy spinner to the terminal.
pub struct TerminalUi {
    assistant_label: String,
    /// Quick replies currently on screen, so a typed number can be
    /// resolved back to its option text.
    options: Mutex<Vec<String>>,
    spinner: Mutex<Option<ProgressBar>>,
}

impl TerminalUi {
    pub fn new(assistant_label: String) -> Self {
        Self {
            assistant_label,
            options: Mutex::new(Vec::new()),
            spinner: Mutex::new(None),
        }
    }

    /// Look up a displayed quick reply by its 1-based number.
    pub fn option(&self, index: usize) -> Option<String> {
        if index == 0 {
            return None;
        }
        self.options
            .lock()
            .ok()
            .and_then(|options| options.get(index - 1).cloned())
    }
}

impl ChatUi for TerminalUi {
    fn render_turn(&self, content: &str, role: TurnRole) {
        match role {
            TurnRole::User => {
                println!("{} {}", style("You >").green().bold(), content);
            }
            TurnRole::Assistant => {
                println!(
                    "{} {}",
                    style(format!("{} >", self.assistant_label)).cyan().bold(),
                    content
                );
            }
        }
        println!();
    }

    fn render_quick_replies(&self, options: &[String]) {
        if let Ok(mut current) = self.options.lock() {
            *current = options.to_vec();
        }
        if options.is_empty() {
            return;
        }
        for (i, option) in options.iter().enumerate() {
            println!("  {} {}", style(format!("[{}]", i + 1)).yellow(), option);
        }
        println!();
    }

    fn set_busy(&self, busy: bool) {
        let Ok(mut spinner) = self.spinner.lock() else {
            return;
        };
        if busy {
            let pb = ProgressBar::new_spinner();
            if let Ok(spinner_style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
                pb.set_style(spinner_style);
            }
            pb.set_message("thinking...");
            pb.enable_steady_tick(Duration::from_millis(80));
            *spinner = Some(pb);
        } else if let Some(pb) = spinner.take() {
            pb.finish_and_clear();
        }
    }
}
