//! fixvec demonstration driver.
//!
//! Walks a `FixedVector` through every value-semantic operation —
//! default and sized construction, deep copy, copy-assignment, move
//! transfer, mutation through iteration, rendering, and element-wise
//! addition — then deliberately triggers the one recoverable failure
//! (a length mismatch) and reports it.
//!
//! # Quick Start
//!
//! ```bash
//! # Run the demonstration (exits non-zero after the deliberate mismatch)
//! fixvec-demo
//!
//! # Surface the per-operation trace events from the library
//! fixvec-demo --verbose
//! ```

use anyhow::Result;
use clap::Parser;
use fixvec::{FixedVector, elementwise_add};

/// Demonstrates the value semantics of a fixed-length vector.
#[derive(Parser)]
#[command(name = "fixvec-demo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Length of the demonstration vectors.
    #[arg(short, long, default_value = "5")]
    len: usize,

    /// Show TRACE-level events for each special operation that fires.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose {
        tracing::Level::TRACE
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_level.into()),
        )
        .init();

    run(cli.len)
}

fn run(len: usize) -> Result<()> {
    println!("default construction:");
    let v0: FixedVector<i64> = FixedVector::default();
    println!("v0.len() = {}", v0.len());

    println!("\nsized construction:");
    let mut v1: FixedVector<f64> = FixedVector::new(len);
    println!("v1.len() = {}", v1.len());

    println!("\ndeep copy:");
    let mut v2 = v1.clone();
    println!("v2.len() = {}", v2.len());

    println!("\nmove assignment from a temporary:");
    v2 = FixedVector::new(len + 2);
    println!("v2.len() = {}", v2.len());

    println!("\nmove transfer (v1 is left empty):");
    let mut v3 = v1.take();
    println!("v1.len() = {}, v3.len() = {}", v1.len(), v3.len());

    println!("\ncopy assignment:");
    v3.clone_from(&v2);
    println!("v3.len() = {}", v3.len());

    // Fill v3 in place through mutable iteration.
    let mut c = 0.0;
    for x in &mut v3 {
        *x = c;
        c += 1.0;
    }

    println!("\nv2 = {v2}");
    println!("v3 = {v3}");

    println!("\nsingle sum:");
    let mut v4 = elementwise_add(&v3, &v2)?;
    println!("v4 = {v4}");

    println!("\nchained sum (each `+` consumes the previous temporary):");
    v4 = &v3 + &v3 + &v2 + &v3;
    println!("v4 = {v4}");

    println!("\ndeliberate length mismatch:");
    let a: FixedVector<i64> = FixedVector::new(len);
    let b: FixedVector<i64> = FixedVector::new(len + 2);
    match elementwise_add(&a, &b) {
        Ok(sum) => anyhow::bail!("mismatched addition unexpectedly succeeded: {sum}"),
        Err(e) => {
            // The one recoverable failure: report it and exit non-zero.
            Err(e.into())
        }
    }
}
