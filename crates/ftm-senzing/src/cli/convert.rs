use anyhow::{Context, Result};
use console::style;

use ftm_senzing_core::{load_records, map_records, write_jsonl, LoadOptions, MapperConfig};

use super::Cli;

pub fn run(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli)?;
    let options = LoadOptions::default().with_sample_limit(cli.sample);

    eprintln!("Loading FTM records from: {}", cli.input.display());
    if let Some(limit) = options.sample_limit {
        eprintln!("  Sample limit: {limit} entity records");
    }

    let loaded = load_records(&cli.input, &options).context("failed to load records")?;
    eprintln!("Loaded {} FTM records", loaded.records.len());
    if loaded.stats.malformed_lines > 0 {
        eprintln!(
            "  {} skipped {} malformed lines",
            style("warning:").yellow(),
            loaded.stats.malformed_lines
        );
    }

    let mapped = map_records(&loaded.records, &config);
    tracing::info!(
        "Relationship indexes: {} sanctioned, {} identifier holders, {} owners, {} directors",
        mapped.stats.sanctioned_entities,
        mapped.stats.identifier_holders,
        mapped.stats.owners,
        mapped.stats.directors
    );
    eprintln!(
        "Mapped {} Senzing records ({} persons, {} organizations)",
        mapped.records.len(),
        mapped.stats.persons,
        mapped.stats.organizations
    );

    eprintln!("Writing output to: {}", cli.output.display());
    let written = write_jsonl(&mapped.records, &cli.output).context("failed to write output")?;

    eprintln!(
        "{} Wrote {written} records to {}",
        style("✓").green(),
        cli.output.display()
    );

    Ok(())
}

/// Config file (or environment) first, then command line overrides.
fn resolve_config(cli: &Cli) -> Result<MapperConfig> {
    let mut config = match &cli.config {
        Some(path) => MapperConfig::load(path)
            .with_context(|| format!("failed to read config {}", path.display()))?,
        None => MapperConfig::from_env(),
    };

    if let Some(source) = &cli.person_source {
        config = config.with_person_data_source(source);
    }
    if let Some(source) = &cli.org_source {
        config = config.with_organization_data_source(source);
    }

    config.validate()?;
    Ok(config)
}
