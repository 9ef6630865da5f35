use anyhow::{bail, Result};
use claimscraper::{extract, process, render};
use std::env;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env_filter).init();

    // ─── 2) locate the export ────────────────────────────────────────
    let path = match env::args().nth(1) {
        Some(p) => p,
        None => bail!("usage: claimscraper <export.html>"),
    };
    info!(path = %path, "loading unclaimed property export");

    // ─── 3) extract the raw table ────────────────────────────────────
    let mut table = extract::table_from_file(&path)?;
    println!("Raw extract:\n{}", render::render_table(&table));

    // ─── 4) run the transformation stages, showing each step ─────────
    process::run_pipeline(&mut table, |stage, table| {
        println!("{stage}:\n{}", render::render_table(table));
    })?;

    info!("all done");
    Ok(())
}
