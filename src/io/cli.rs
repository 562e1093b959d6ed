//! Command-line interface and the sequential per-file processing loop

use crate::analysis::quadrants::{
    PixelRect, PixelSource, QuadrantBounds, average_quadrants, centered_square,
};
use crate::analysis::record::{ImageRecord, build_record};
use crate::io::configuration::DEFAULT_OUTPUT_FILE;
use crate::io::error::{QuadrantError, Result};
use crate::io::image::load_raster;
use crate::io::progress::ProgressManager;
use crate::io::sink::{JsonSink, RecordSink};
use clap::Parser;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "quadcolor")]
#[command(
    author,
    version,
    about = "Record the average colour of each image quadrant as JSON"
)]
/// Command-line arguments for quadrant colour extraction
pub struct Cli {
    /// Image files to process, in order
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Output file for the JSON records (truncated if it exists)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Crop each image to its centred square before splitting
    #[arg(short, long)]
    pub square: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Outcome of a complete run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessSummary {
    /// Number of records written
    pub processed: usize,
    /// Inputs that were reported and skipped, in argument order
    pub skipped: Vec<PathBuf>,
}

/// Runs every input through decode, averaging and output in argument order
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process all inputs into the configured output file
    ///
    /// # Errors
    ///
    /// Returns an error if the output file cannot be created or a record cannot be
    /// written. Failures confined to one input are logged and skipped instead.
    pub fn process(&mut self) -> Result<ProcessSummary> {
        let mut sink = JsonSink::create(&self.cli.output)?;
        let summary = self.process_into(&mut sink)?;
        sink.finish()?;

        info!(
            "Wrote {} record(s) to '{}', skipped {}",
            summary.processed,
            self.cli.output.display(),
            summary.skipped.len()
        );
        Ok(summary)
    }

    /// Process all inputs into `sink`
    ///
    /// # Errors
    ///
    /// Returns the first fatal error; the sink should not be used afterwards.
    pub fn process_into<S: RecordSink + ?Sized>(&mut self, sink: &mut S) -> Result<ProcessSummary> {
        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.files.len());
        }

        let mut summary = ProcessSummary::default();

        for path in &self.cli.files {
            if let Some(ref pm) = self.progress_manager {
                pm.start_file(path);
            }

            match self.analyze_file(path) {
                Ok(record) => {
                    if let Err(error) = sink.accept(&record) {
                        self.finish_progress();
                        return Err(error);
                    }
                    self.report(|| info!("Processed '{}'", path.display()));
                    summary.processed += 1;
                }
                Err(error) if error.is_fatal() => {
                    self.finish_progress();
                    return Err(error);
                }
                Err(error) => {
                    self.report(|| warn!("Skipping '{}': {error}", path.display()));
                    summary.skipped.push(path.clone());
                }
            }

            if let Some(ref pm) = self.progress_manager {
                pm.complete_file();
            }
        }

        self.finish_progress();
        Ok(summary)
    }

    /// Decode one file and build its record
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or decoded, or is too small
    /// to split into four non-empty quadrants.
    pub fn analyze_file(&self, path: &Path) -> Result<ImageRecord> {
        let raster = load_raster(path)?;
        analyze_raster(path, &raster, self.cli.square)
    }

    /// Progress display, absent in quiet mode
    pub const fn progress(&self) -> Option<&ProgressManager> {
        self.progress_manager.as_ref()
    }

    // Clears the bar so an early return leaves no half-drawn line behind
    fn finish_progress(&self) {
        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }
    }

    fn report<F: FnOnce()>(&self, log: F) {
        match self.progress_manager {
            Some(ref pm) => pm.suspend(log),
            None => log(),
        }
    }
}

/// Compute the record for an already decoded image
///
/// With `square` set only the centred square of the image is considered.
///
/// # Errors
///
/// Returns an error if any quadrant would be empty, which happens when the
/// considered area is narrower or shorter than two pixels.
pub fn analyze_raster<S: PixelSource + ?Sized>(
    path: &Path,
    source: &S,
    square: bool,
) -> Result<ImageRecord> {
    let (width, height) = source.dimensions();
    let area = if square {
        centered_square(width, height)
    } else {
        PixelRect::from_dimensions(width, height)
    };

    let bounds = QuadrantBounds::split(area);
    if bounds.has_empty_quadrant() {
        return Err(QuadrantError::DegenerateImage {
            path: path.to_path_buf(),
            width,
            height,
        });
    }

    let regions = average_quadrants(&bounds, source)?;
    debug!("'{}' quadrants {area}: {regions:?}", path.display());

    Ok(build_record(path.to_string_lossy(), regions))
}
