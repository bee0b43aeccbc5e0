//! The `moodlens records` command — display the stored table.

use clap::Args;
use moodlens_core::store::HEADERS;
use moodlens_core::{Config, RecordStore, SentimentRecord};

/// Arguments for the `records` command.
#[derive(Args, Debug)]
pub struct RecordsArgs {
    /// Emit records as a JSON array instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Execute the records command.
pub fn execute(args: RecordsArgs, config: &Config) -> anyhow::Result<()> {
    let store = RecordStore::new(config.records_path());
    let records = store.load_all()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No records yet.");
        return Ok(());
    }

    print_table(&records);
    Ok(())
}

/// Width cap per column; longer fields are truncated with an ellipsis.
const MAX_FIELD_WIDTH: usize = 40;

/// Print records as an aligned table, oldest first.
pub(crate) fn print_table(records: &[SentimentRecord]) {
    let rows: Vec<[String; 5]> = records
        .iter()
        .map(|r| {
            [
                truncate(&r.image_caption),
                truncate(&r.user_text),
                truncate(&r.combined_input),
                r.label.clone(),
                format!("{:.4}", r.score),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (i, field) in row.iter().enumerate() {
            widths[i] = widths[i].max(field.chars().count());
        }
    }

    let header_line: Vec<String> = HEADERS
        .iter()
        .zip(widths.iter().copied())
        .map(|(h, w)| format!("{h:<w$}"))
        .collect();
    println!("{}", header_line.join("  "));

    for row in &rows {
        let line: Vec<String> = row
            .iter()
            .zip(widths.iter().copied())
            .map(|(field, w)| format!("{field:<w$}"))
            .collect();
        println!("{}", line.join("  "));
    }
}

/// Collapse newlines and cap the field width for table display.
fn truncate(field: &str) -> String {
    let flat = field.replace('\n', " ");
    if flat.chars().count() <= MAX_FIELD_WIDTH {
        return flat;
    }
    let cut: String = flat.chars().take(MAX_FIELD_WIDTH - 1).collect();
    format!("{cut}…")
}
