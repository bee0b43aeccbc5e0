//! Guided classify flow.
//!
//! Walks the user through: image path or manual caption → additional text →
//! pipeline run → rendered result → optional record table. Delegates to the
//! same pipeline as the flag-based `classify` command.

use console::Style;
use dialoguer::{Confirm, Input, Select};
use moodlens_core::{build_pipeline, Config, PipelineError};
use std::path::PathBuf;

use super::theme::moodlens_theme;

/// Walk the user through one full classification.
pub async fn guided_classify(config: &Config) -> anyhow::Result<()> {
    let theme = moodlens_theme();

    // ── Step 1: caption source ─────────────────────────────────────────────

    let source_items = &["Use an image file", "Type a caption manually"];
    let source = Select::with_theme(&theme)
        .with_prompt("Where should the caption come from?")
        .items(source_items)
        .default(0)
        .interact_opt()?;

    let caption_input = match source {
        Some(0) => {
            // Re-prompts until the path exists.
            loop {
                let Some(raw_path) = super::handle_interrupt(
                    Input::<String>::with_theme(&theme)
                        .with_prompt("Path to image")
                        .interact_text(),
                )?
                else {
                    return Ok(());
                };

                let path = PathBuf::from(shellexpand::tilde(&raw_path).into_owned());

                if !path.exists() {
                    let warn = Style::new().for_stderr().yellow();
                    eprintln!(
                        "  {}",
                        warn.apply_to(format!("Path not found: {}", path.display()))
                    );
                    continue;
                }

                break path.to_string_lossy().into_owned();
            }
        }
        Some(1) => {
            let Some(caption) = super::handle_interrupt(
                Input::<String>::with_theme(&theme)
                    .with_prompt("Image caption")
                    .interact_text(),
            )?
            else {
                return Ok(());
            };
            caption
        }
        None => return Ok(()), // Esc
        _ => unreachable!(),
    };

    // ── Step 2: additional text ────────────────────────────────────────────

    let Some(user_text) = super::handle_interrupt(
        Input::<String>::with_theme(&theme)
            .with_prompt("Additional text")
            .interact_text(),
    )?
    else {
        return Ok(());
    };

    // ── Step 3: run the pipeline ───────────────────────────────────────────

    let pipeline = build_pipeline(config);
    match pipeline.run(&caption_input, &user_text).await {
        Ok(outcome) => {
            let ok = Style::new().for_stderr().green();
            println!();
            crate::cli::classify::render_outcome(&outcome);
            println!();
            eprintln!(
                "  {} Saved to {}",
                ok.apply_to("✓"),
                pipeline.records_path().display()
            );
        }
        Err(e @ PipelineError::EmptyInput { .. }) => {
            let warn = Style::new().for_stderr().yellow();
            eprintln!("  {}", warn.apply_to(e.to_string()));
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    // ── Step 4: optionally show the table ──────────────────────────────────

    let show = Confirm::with_theme(&theme)
        .with_prompt("Show past records?")
        .default(false)
        .interact_opt()?;

    if show == Some(true) {
        super::show_records(config)?;
    }

    Ok(())
}
