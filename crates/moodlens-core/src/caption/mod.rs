//! Caption resolution: manual passthrough or image downscale + remote caption.
//!
//! Inputs naming a file with a recognized image extension are downscaled and
//! sent to the captioning model; everything else passes through unchanged.

use crate::config::CaptionConfig;
use crate::error::PipelineError;
use crate::inference::Captioner;
use image::ImageFormat;
use std::path::Path;
use std::sync::Arc;

/// Resolves a raw input string into a caption.
pub struct CaptionResolver {
    captioner: Arc<dyn Captioner>,
    config: CaptionConfig,
}

impl CaptionResolver {
    pub fn new(captioner: Arc<dyn Captioner>, config: CaptionConfig) -> Self {
        Self { captioner, config }
    }

    /// Check whether the input names a file with a recognized image extension
    /// (case-insensitive). Decided on the name alone, not file contents.
    pub fn is_image_path(&self, input: &str) -> bool {
        Path::new(input)
            .extension()
            .and_then(|e| e.to_str())
            .map(|ext| {
                let ext = ext.to_ascii_lowercase();
                self.config.image_extensions.iter().any(|known| *known == ext)
            })
            .unwrap_or(false)
    }

    /// Resolve an input into a caption.
    ///
    /// Never fails past this boundary: any error while opening, decoding, or
    /// captioning the image is folded into a human-readable string beginning
    /// with "Error processing image:". Callers always receive a caption.
    pub async fn resolve(&self, input: &str) -> String {
        if !self.is_image_path(input) {
            return input.to_string();
        }

        match self.caption_image(Path::new(input)).await {
            Ok(caption) => caption,
            Err(e) => {
                tracing::warn!("Caption generation failed for {input}: {e}");
                format!("Error processing image: {e}")
            }
        }
    }

    /// Downscale the image and run it through the captioning model.
    async fn caption_image(&self, path: &Path) -> Result<String, PipelineError> {
        let bytes = self.downscale_to_scratch(path)?;
        tracing::debug!(
            "Captioning {} via {} ({} bytes after downscale)",
            path.display(),
            self.captioner.name(),
            bytes.len()
        );
        self.captioner.caption(&bytes, "image/png").await
    }

    /// Decode the image, downscale so neither dimension exceeds the configured
    /// bound (aspect ratio preserved), and round-trip the resized copy through
    /// a scratch file that is removed on every exit path.
    fn downscale_to_scratch(&self, path: &Path) -> Result<Vec<u8>, PipelineError> {
        if !path.exists() {
            return Err(PipelineError::FileNotFound(path.to_path_buf()));
        }

        let image = image::open(path).map_err(|e| PipelineError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let resized = image.thumbnail(self.config.max_dimension, self.config.max_dimension);

        // NamedTempFile deletes the scratch copy on drop, error paths included.
        let scratch = tempfile::Builder::new()
            .prefix("moodlens-resize-")
            .suffix(".png")
            .tempfile()
            .map_err(|e| PipelineError::Scratch {
                message: e.to_string(),
            })?;

        resized
            .save_with_format(scratch.path(), ImageFormat::Png)
            .map_err(|e| PipelineError::Scratch {
                message: format!("Failed to write resized copy: {e}"),
            })?;

        std::fs::read(scratch.path()).map_err(|e| PipelineError::Scratch {
            message: format!("Failed to read resized copy: {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use image::GenericImageView;
    use std::sync::Mutex;

    /// Captioner fake that records the bytes it was handed.
    struct MockCaptioner {
        reply: String,
        received: Mutex<Option<Vec<u8>>>,
    }

    impl MockCaptioner {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                received: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl Captioner for MockCaptioner {
        fn name(&self) -> &str {
            "mock"
        }

        async fn caption(&self, image: &[u8], _media_type: &str) -> Result<String, PipelineError> {
            *self.received.lock().unwrap() = Some(image.to_vec());
            Ok(self.reply.clone())
        }
    }

    fn resolver_with(captioner: Arc<MockCaptioner>) -> CaptionResolver {
        CaptionResolver::new(captioner, CaptionConfig::default())
    }

    #[tokio::test]
    async fn test_manual_caption_passes_through() {
        let captioner = Arc::new(MockCaptioner::new("unused"));
        let resolver = resolver_with(captioner.clone());

        let caption = resolver.resolve("a dog playing fetch").await;
        assert_eq!(caption, "a dog playing fetch");
        // The captioner is never consulted on the manual path
        assert!(captioner.received.lock().unwrap().is_none());
    }

    #[test]
    fn test_is_image_path_case_insensitive() {
        let resolver = resolver_with(Arc::new(MockCaptioner::new("")));
        assert!(resolver.is_image_path("photo.JPG"));
        assert!(resolver.is_image_path("photo.png"));
        assert!(resolver.is_image_path("dir/photo.JpEg"));
        assert!(!resolver.is_image_path("notes.txt"));
        assert!(!resolver.is_image_path("no_extension"));
    }

    #[tokio::test]
    async fn test_missing_image_becomes_error_string() {
        let resolver = resolver_with(Arc::new(MockCaptioner::new("unused")));
        let caption = resolver.resolve("/nonexistent/cat.jpg").await;
        assert!(
            caption.starts_with("Error processing image:"),
            "Got: {caption}"
        );
    }

    #[tokio::test]
    async fn test_corrupt_image_becomes_error_string() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let resolver = resolver_with(Arc::new(MockCaptioner::new("unused")));
        let caption = resolver.resolve(&path.to_string_lossy()).await;
        assert!(caption.starts_with("Error processing image:"));
    }

    #[tokio::test]
    async fn test_image_is_downscaled_before_captioning() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.png");
        image::DynamicImage::new_rgb8(1024, 512)
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();

        let captioner = Arc::new(MockCaptioner::new("a wide test image"));
        let resolver = resolver_with(captioner.clone());

        let caption = resolver.resolve(&path.to_string_lossy()).await;
        assert_eq!(caption, "a wide test image");

        // The captioner saw a PNG whose longest edge fits the 256px bound,
        // with aspect ratio preserved.
        let bytes = captioner.received.lock().unwrap().clone().unwrap();
        let sent = image::load_from_memory(&bytes).unwrap();
        let (w, h) = sent.dimensions();
        assert_eq!((w, h), (256, 128));
    }
}
