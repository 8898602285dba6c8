//! Library side of the `vax-etl` command: logging setup and the pipeline.

pub mod logging;
pub mod pipeline;
