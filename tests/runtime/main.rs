//! Integration tests for Layer 4: Runtime
//!
//! Tests the compile driver's parser chain, batch compilation, bundling,
//! and the command line.

mod batch;
mod cli;
mod pipeline;
