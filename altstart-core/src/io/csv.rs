use crate::config::ExportConfig;
use crate::error::{AltStartError, AltStartResult};
use crate::scan::OutputRow;
use csv::{Writer, WriterBuilder};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const OUTPUT_COLUMNS: [&str; 8] = [
    "gene",
    "GeneID",
    "protein",
    "protein_id",
    "Total Length",
    "Substring",
    "Position",
    "Exon",
];

/// Write the header line and every row to `writer`.
pub fn write_rows<W: Write>(
    writer: W,
    rows: &[OutputRow],
    config: &ExportConfig,
) -> Result<(), csv::Error> {
    let mut wtr: Writer<W> = WriterBuilder::new()
        .delimiter(config.delimiter)
        .from_writer(writer);
    wtr.write_record(OUTPUT_COLUMNS)?;
    for row in rows {
        wtr.write_record(row_fields(row))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the table to `path` through a temporary sibling file.
///
/// The destination only appears once every row has been flushed; on failure
/// the temporary file is removed and `path` is left untouched.
pub fn write_rows_to_path(
    path: impl AsRef<Path>,
    rows: &[OutputRow],
    config: &ExportConfig,
) -> AltStartResult<()> {
    let path_ref = path.as_ref();
    let path_str = path_ref.display().to_string();
    let tmp = temp_path(path_ref);

    let result = fs::File::create(&tmp)
        .map_err(|e| AltStartError::OutputIo {
            path: tmp.display().to_string(),
            source: e,
        })
        .and_then(|file| {
            write_rows(file, rows, config).map_err(|e| AltStartError::CsvWrite {
                path: path_str.clone(),
                source: e,
            })
        })
        .and_then(|()| {
            fs::rename(&tmp, path_ref).map_err(|e| AltStartError::OutputIo {
                path: path_str.clone(),
                source: e,
            })
        });

    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".partial");
    path.with_file_name(name)
}

fn row_fields(row: &OutputRow) -> [String; 8] {
    [
        row.gene.to_string(),
        row.gene_id.to_string(),
        row.protein.to_string(),
        row.protein_id.to_string(),
        row.total_length.to_string(),
        row.substring.to_string(),
        row.position.to_string(),
        row.exon.to_string(),
    ]
}
