//! Headless runner (default binary).
//!
//! Plays one autoplay session with random inputs and prints the outcome.
//! Rendering and keyboard input are left to real frontends.

use anyhow::Result;

use blockfall::sim::{describe, init_logging, parse_sim_args, run_sim, USAGE};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(config) = parse_sim_args(&args)? else {
        println!("{}", USAGE);
        return Ok(());
    };

    init_logging(config.log_level)?;

    let (summary, snapshot) = run_sim(&config)?;

    if config.json {
        print_json(&snapshot)?;
    } else {
        print!("{}", snapshot.to_ascii());
        println!("{}", describe(&summary));
    }

    Ok(())
}

#[cfg(feature = "serde")]
fn print_json(snapshot: &blockfall::core::GameSnapshot) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(snapshot)?);
    Ok(())
}

#[cfg(not(feature = "serde"))]
fn print_json(_snapshot: &blockfall::core::GameSnapshot) -> Result<()> {
    Err(anyhow::anyhow!(
        "blockfall: --json needs the `serde` feature"
    ))
}
