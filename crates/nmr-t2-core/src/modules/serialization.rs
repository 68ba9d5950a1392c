use super::engine::EngineOutput;
use crate::domain::{NmrError, NmrResult};
use std::fs;
use std::path::Path;

pub fn format_fixed_f64(value: f64, width: usize, precision: usize) -> String {
    format!(
        "{value:>width$.precision$}",
        width = width,
        precision = precision
    )
}

pub fn normalize_text_artifact(content: &str) -> String {
    let mut normalized = content.replace("\r\n", "\n").replace('\r', "\n");
    if !normalized.is_empty() && !normalized.ends_with('\n') {
        normalized.push('\n');
    }
    normalized
}

pub fn write_text_artifact(path: &Path, content: &str) -> NmrResult<()> {
    let export_error = |source| NmrError::ExportWrite {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(export_error)?;
    }
    fs::write(path, normalize_text_artifact(content)).map_err(export_error)
}

pub fn render_csv(output: &EngineOutput) -> String {
    output.table.to_csv(&output.units, output.time_unit)
}

pub fn render_json(output: &EngineOutput) -> NmrResult<String> {
    serde_json::to_string_pretty(output).map_err(|source| NmrError::Serialize { source })
}

pub fn write_csv_export(path: &Path, output: &EngineOutput) -> NmrResult<()> {
    write_text_artifact(path, &render_csv(output))
}

pub fn write_json_export(path: &Path, output: &EngineOutput) -> NmrResult<()> {
    write_text_artifact(path, &render_json(output)?)
}
