use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::classify::classify;
use crate::document::read_document;
use crate::emit::{ConversionSummary, write_stems};
use crate::error::CoreError;

/// Converts two JSON documents, given in either order, into a stem file.
///
/// Both inputs are read and classified before `output` is created, so a
/// read, parse or classification failure leaves any existing output file
/// untouched. On success `output` is overwritten.
pub fn convert_files(
    first: impl AsRef<Path>,
    second: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<ConversionSummary, CoreError> {
    let first = read_document(first)?;
    let second = read_document(second)?;
    let (meta, netlist) = classify(first, second)?;

    let output = output.as_ref();
    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(output)?);
    let summary = write_stems(&meta, &netlist, &mut writer)?;
    writer.flush()?;

    log::info!(
        "wrote {} module and {} component records to {}",
        summary.modules,
        summary.components,
        output.display()
    );
    if summary.modules_without_path > 0 || summary.unresolved_components > 0 {
        log::info!(
            "{} modules had no resolvable file path, {} cells had an unresolved type",
            summary.modules_without_path,
            summary.unresolved_components
        );
    }
    Ok(summary)
}
