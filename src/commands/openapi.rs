//! Openapi command - Prints the generated OpenAPI document.

use std::io::Write;

use crate::api::openapi;
use crate::cli::args::OpenapiArgs;
use crate::errors::{AppError, AppResult};

/// Execute the openapi command
pub async fn execute(args: OpenapiArgs) -> AppResult<()> {
    let document = openapi::render()?;

    match args.output {
        Some(path) => {
            tokio::fs::write(&path, document.as_bytes())
                .await
                .map_err(|e| {
                    AppError::internal(format!("Failed to write {}: {}", path.display(), e))
                })?;
            tracing::info!("OpenAPI document written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", document)
                .map_err(|e| AppError::internal(format!("Failed to write stdout: {}", e)))?;
        }
    }

    Ok(())
}
