//! Welcome banner shown when the widget starts.

use console::style;

use maitre_types::config::WidgetConfig;

/// Print the styled welcome banner.
pub fn print_welcome_banner(config: &WidgetConfig) {
    println!();
    println!(
        "  {}",
        style(format!("{} Assistant", config.restaurant_name))
            .cyan()
            .bold()
    );
    println!("  {}", style(&config.restaurant_url).dim());
    if let Some(host) = webhook_host(&config.webhook_url) {
        println!("  {}", style(format!("connected via {host}")).dim());
    }
    println!();
    println!(
        "  {}",
        style("Pick an option by number, or just type a question.").dim()
    );
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}

/// Host portion of the webhook URL, for display only.
fn webhook_host(url: &str) -> Option<&str> {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    let host = rest.split(['/', '?']).next().unwrap_or(rest);
    if host.is_empty() { None } else { Some(host) }
}
