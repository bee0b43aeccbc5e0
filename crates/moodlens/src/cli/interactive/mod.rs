//! Interactive CLI mode — guided experience for bare `moodlens` invocation.
//!
//! When `moodlens` is invoked with no subcommand on a TTY, this module
//! provides a menu-driven interface that delegates to the same pipeline as
//! the flag-based CLI.

pub mod classify;
pub mod theme;

use console::Style;
use dialoguer::Select;
use moodlens_core::{Config, RecordStore};

/// Convert a dialoguer result into `Ok(Some(value))` on success, `Ok(None)` on
/// interrupt (Ctrl+C / terminal disconnect), and `Err` for other I/O failures.
///
/// Use this to wrap `interact_text()` / `interact()` calls that lack an `_opt`
/// variant, so interrupts exit the current flow cleanly instead of panicking.
fn handle_interrupt<T>(result: dialoguer::Result<T>) -> anyhow::Result<Option<T>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(dialoguer::Error::IO(e)) if e.kind() == std::io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Main menu options presented to the user.
const MENU_ITEMS: &[&str] = &[
    "Classify image & text",
    "Show past records",
    "View configuration",
    "Exit",
];

/// Entry point for interactive mode. Called when `moodlens` is invoked with no
/// subcommand on a TTY.
pub async fn run(config: &Config) -> anyhow::Result<()> {
    theme::print_banner();

    let theme = theme::moodlens_theme();

    loop {
        let selection = Select::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .items(MENU_ITEMS)
            .default(0)
            .interact_opt()?;

        match selection {
            Some(0) => classify::guided_classify(config).await?,
            Some(1) => show_records(config)?,
            Some(2) => show_config(config)?,
            Some(3) | None => break, // Exit or Ctrl+C / Esc
            _ => unreachable!(),
        }
    }

    Ok(())
}

/// Print the stored record table, or a hint when it is empty.
fn show_records(config: &Config) -> anyhow::Result<()> {
    let store = RecordStore::new(config.records_path());
    let records = store.load_all()?;

    if records.is_empty() {
        let dim = Style::new().for_stderr().dim();
        eprintln!("  {}", dim.apply_to("No records yet — classify something first."));
        return Ok(());
    }

    println!();
    super::records::print_table(&records);
    println!();
    Ok(())
}

/// Interactive config viewer — shows a summary of current settings and offers
/// to display the full TOML or the config file path.
fn show_config(config: &Config) -> anyhow::Result<()> {
    let theme = theme::moodlens_theme();
    let dim = Style::new().for_stderr().dim();
    let cyan = Style::new().for_stderr().cyan();
    let label = Style::new().for_stderr().bold();

    loop {
        // Config summary
        eprintln!();
        eprintln!("  {}", cyan.apply_to("Current configuration:"));
        eprintln!();

        let config_path = Config::default_path();
        let path_note = if config_path.exists() {
            "(exists)"
        } else {
            "(using defaults)"
        };

        eprintln!(
            "    {:<20} {} {}",
            label.apply_to("Config file:"),
            config_path.display(),
            dim.apply_to(path_note)
        );
        eprintln!(
            "    {:<20} {}",
            label.apply_to("Records file:"),
            config.records_path().display()
        );
        eprintln!(
            "    {:<20} {}",
            label.apply_to("Sentiment model:"),
            config.inference.sentiment_model
        );
        eprintln!(
            "    {:<20} {}",
            label.apply_to("Caption model:"),
            config.inference.caption_model
        );
        eprintln!(
            "    {:<20} {}px longest edge",
            label.apply_to("Image downscale:"),
            config.caption.max_dimension
        );
        eprintln!(
            "    {:<20} {}",
            label.apply_to("Log level:"),
            config.logging.level
        );
        eprintln!();

        // Action menu
        let items = &["View full config (TOML)", "Show config file path", "Back"];

        let selection = Select::with_theme(&theme)
            .with_prompt("Configuration")
            .items(items)
            .default(0)
            .interact_opt()?;

        match selection {
            Some(0) => match config.to_toml() {
                Ok(toml) => {
                    eprintln!();
                    eprintln!("{}", dim.apply_to("─".repeat(50)));
                    eprintln!("{toml}");
                    eprintln!("{}", dim.apply_to("─".repeat(50)));
                    eprintln!();
                }
                Err(e) => {
                    let err = Style::new().for_stderr().red();
                    eprintln!("  {} Failed to serialize config: {e}", err.apply_to("✗"));
                    eprintln!();
                }
            },
            Some(1) => {
                eprintln!();
                eprintln!("  {}", Config::default_path().display());
                eprintln!();
            }
            Some(2) | None => break, // Back or Esc / Ctrl+C
            _ => unreachable!(),
        }
    }

    Ok(())
}
