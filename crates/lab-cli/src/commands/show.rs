//! Show command - print a single topic

use anyhow::Result;
use lab_config::Config;

use crate::cli::OutputFormat;

pub async fn handle(id: &str, format: OutputFormat, config: &Config) -> Result<()> {
    let service = super::build_service(config)?;
    let record = service.get_record(id).await?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&record)?),
        OutputFormat::Text => print!("{}", super::query::render_card(&record)),
    }

    Ok(())
}
