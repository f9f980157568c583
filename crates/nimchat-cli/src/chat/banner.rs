//! Welcome banner display for chat sessions.

use console::style;

use nimchat_core::chat::input::TERMINATION_KEYWORDS;

/// Title line shown at the top of the banner.
pub const TITLE: &str = "NVIDIA NIM Chat";

/// Subtitle naming the model behind the session.
pub fn subtitle(model: &str) -> String {
    format!("Powered by {model} via NVIDIA NIM")
}

/// Hint listing the words that end the session.
pub fn exit_hint() -> String {
    let quoted: Vec<String> = TERMINATION_KEYWORDS
        .iter()
        .map(|w| format!("'{w}'"))
        .collect();
    match quoted.split_last() {
        Some((last, rest)) if !rest.is_empty() => {
            format!("Type {}, or {last} to end.", rest.join(", "))
        }
        _ => format!("Type {} to end.", quoted.concat()),
    }
}

/// Print the framed welcome banner and exit hint.
pub fn print_welcome_banner(model: &str) {
    let subtitle = subtitle(model);
    let width = TITLE.len().max(subtitle.len()) + 2;
    let rule = "\u{2500}".repeat(width);

    println!();
    println!("  {}", style(format!("\u{256d}{rule}\u{256e}")).green());
    println!(
        "  {} {} {}",
        style("\u{2502}").green(),
        style(format!("{TITLE:<w$}", w = width - 2)).green().bold(),
        style("\u{2502}").green()
    );
    println!(
        "  {} {} {}",
        style("\u{2502}").green(),
        style(format!("{subtitle:<w$}", w = width - 2)).dim(),
        style("\u{2502}").green()
    );
    println!("  {}", style(format!("\u{2570}{rule}\u{256f}")).green());
    println!("  {}", style(exit_hint()).dim());
    println!();
}
