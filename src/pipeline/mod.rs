//! Load → grayscale → thumbnail → save, once per run.

pub mod types;

pub use types::*;

use crate::config::Config;
use crate::data::{load_image_file, output_path, save_image, save_image_or_log, SaveErrorPolicy};
use crate::error::{ManipulatorError, Result};
use crate::processing::{make_grayscale, make_thumbnail_with_filter, ThumbnailSize};
use image::GrayImage;
use std::path::Path;
use std::time::Instant;
use tracing::info_span;
use uuid::Uuid;

pub const GRAYSCALE_SUFFIX: &str = "grayscale";
pub const THUMBNAIL_SUFFIX: &str = "thumbnail";

pub struct Pipeline {
    config: Config,
    thumbnail_size: ThumbnailSize,
}

impl Pipeline {
    /// Validate `config` and resolve the thumbnail size before anything touches disk.
    pub fn new(config: Config) -> Result<Self> {
        config.validate().map_err(ManipulatorError::InvalidConfig)?;
        let thumbnail_size = config.thumbnail.size()?;
        Ok(Self {
            config,
            thumbnail_size,
        })
    }

    pub fn thumbnail_size(&self) -> ThumbnailSize {
        self.thumbnail_size
    }

    pub fn run(&self) -> Result<PipelineReport> {
        let run_id = Uuid::new_v4();
        let span = info_span!("pipeline", run_id = %run_id);
        let _enter = span.enter();
        let start = Instant::now();

        tracing::info!(
            input = %self.config.input.display(),
            output = %self.config.output.display(),
            "Loading image"
        );
        let file = load_image_file(&self.config.input)?;
        let source_size = file.image.dimensions();

        let grayscale = make_grayscale(&file.image);
        // The thumbnail is taken from the grayscale image, not the colour original.
        let thumbnail =
            make_thumbnail_with_filter(&grayscale, self.thumbnail_size, self.config.thumbnail.filter)?;

        let grayscale_path = output_path(&self.config.output, &file.name, GRAYSCALE_SUFFIX, file.format);
        let thumbnail_path = output_path(&self.config.output, &file.name, THUMBNAIL_SUFFIX, file.format);

        let grayscale_report = self.write(&grayscale_path, &grayscale)?;
        let thumbnail_report = self.write(&thumbnail_path, &thumbnail)?;

        let report = PipelineReport {
            run_id,
            name: file.name,
            format: file.format,
            source_size,
            grayscale: grayscale_report,
            thumbnail: thumbnail_report,
        };

        tracing::info!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            all_saved = report.all_saved(),
            "Pipeline finished"
        );
        Ok(report)
    }

    fn write(&self, path: &Path, image: &GrayImage) -> Result<OutputReport> {
        let saved = match self.config.save.on_error {
            SaveErrorPolicy::Log => save_image_or_log(path, image),
            SaveErrorPolicy::Fail => {
                save_image(path, image)?;
                true
            }
        };

        Ok(OutputReport {
            path: path.to_path_buf(),
            width: image.width(),
            height: image.height(),
            saved,
        })
    }
}

/// Run the pipeline once with `config`.
pub fn run(config: Config) -> Result<PipelineReport> {
    Pipeline::new(config)?.run()
}
