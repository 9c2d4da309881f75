pub mod engine;
pub mod fastq;
pub mod io;
pub mod locate;
pub mod metrics;
pub mod model;
pub mod n50;
pub mod stats;
