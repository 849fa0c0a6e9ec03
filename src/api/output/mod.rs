mod structured;
mod table;

pub use structured::StructuredFormatter;
pub use table::TableFormatter;

use std::fmt;
use std::io::Write;

use chrono::{DateTime, Utc};

use crate::core::persistence::meta::meta_entity::MetaEntity;
use crate::domain::get::service::reconstruct_service::{reconstruct_complete, reconstruct_summaries};
use crate::errors::{output_error, AppError, AppResult};

/// Output format selected with `-o`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Wide,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Accepts "", "wide", "json" and "yaml", case-insensitively.
    pub fn parse(raw: &str) -> AppResult<Self> {
        match raw.to_lowercase().as_str() {
            "" => Ok(OutputFormat::Table),
            "wide" => Ok(OutputFormat::Wide),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            _ => Err(AppError::InvalidOutputFormat(raw.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Table => "table",
            OutputFormat::Wide => "wide",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub namespace: String,
    pub all_namespaces: bool,
    pub now: DateTime<Utc>,
}

/// Writes `records` to `out` in the requested format and flushes it.
pub fn render<W: Write>(records: &[MetaEntity], options: &RenderOptions, out: &mut W) -> AppResult<()> {
    if records.is_empty() {
        writeln!(out, "No resources found in {} namespace.", options.namespace)
            .map_err(output_error)?;
        return out.flush().map_err(output_error);
    }

    let text = match options.format {
        OutputFormat::Table | OutputFormat::Wide => {
            let groups = reconstruct_summaries(records)?;
            TableFormatter::format(&groups, options.all_namespaces, options.now)
        }
        OutputFormat::Json => StructuredFormatter::json(&reconstruct_complete(records)?)?,
        OutputFormat::Yaml => StructuredFormatter::yaml(&reconstruct_complete(records)?)?,
    };

    out.write_all(text.as_bytes()).map_err(output_error)?;
    out.flush().map_err(output_error)
}
