use anyhow::Result;
use tracing::debug;

use vax_cli::logging::PipelineLogger;
use vax_cli::pipeline::{EtlPipeline, PipelineConfig, RunOutcome, load_source};
use vax_model::QualityReport;
use vax_validate::validate_quality;

use crate::cli::{QualityArgs, RunArgs};

pub fn run_etl<L: PipelineLogger>(args: &RunArgs, logger: L) -> Result<RunOutcome> {
    let pipeline = EtlPipeline::new(PipelineConfig::from(args), logger);
    pipeline.run()
}

pub fn run_quality(args: &QualityArgs) -> Result<QualityReport> {
    let source = load_source(&args.raw_dir, args.input_file.as_deref())?;
    debug!(path = %source.path().display(), "building quality report");
    Ok(validate_quality(&source.data))
}
