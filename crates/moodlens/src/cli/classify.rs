//! The `moodlens classify` command — one full pipeline run.

use clap::Args;
use console::Style;
use moodlens_core::{build_pipeline, Config, PipelineOutcome};
use std::path::PathBuf;

/// Arguments for the `classify` command.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Path to an image to caption automatically
    #[arg(long, conflicts_with = "caption")]
    pub image: Option<PathBuf>,

    /// Manually supplied caption (instead of an image)
    #[arg(long)]
    pub caption: Option<String>,

    /// Additional free-form text
    #[arg(long)]
    pub text: String,
}

/// Execute the classify command.
pub async fn execute(args: ClassifyArgs, config: &Config) -> anyhow::Result<()> {
    let caption_input = match (&args.image, &args.caption) {
        (Some(path), _) => shellexpand::tilde(&path.to_string_lossy().into_owned())
            .into_owned(),
        (None, Some(caption)) => caption.clone(),
        (None, None) => anyhow::bail!("Provide either --image or --caption."),
    };

    let pipeline = build_pipeline(config);
    let outcome = pipeline.run(&caption_input, &args.text).await?;

    render_outcome(&outcome);
    println!("Saved to {}", pipeline.records_path().display());
    Ok(())
}

/// Print the result of one pipeline run.
pub(crate) fn render_outcome(outcome: &PipelineOutcome) {
    let label_style = if outcome.classification.is_error() {
        Style::new().red().bold()
    } else {
        Style::new().green().bold()
    };

    println!("Caption:  {}", outcome.record.image_caption);
    println!("Combined: {}", outcome.record.combined_input);
    println!(
        "Label:    {}",
        label_style.apply_to(&outcome.record.label)
    );
    println!("Score:    {:.2}%", outcome.record.score * 100.0);

    if let Some(ref error) = outcome.classification.error {
        let warn = Style::new().yellow();
        println!("{}", warn.apply_to(format!("Classifier error: {error}")));
    }
}
