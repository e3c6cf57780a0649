//! Walks the netlist and produces stem records in input order.
//!
//! Records are handed to a sink one at a time as the walk reaches them, so
//! `write_stems` streams straight to its writer.

use std::io::Write;

use crate::document::{MetadataDocument, Module, NetlistDocument};
use crate::error::CoreError;
use crate::index::{AddressIndex, FileIndex};
use crate::location::parse_location;
use crate::stem::{StemRecord, UNRESOLVED_TYPE};

/// Counts gathered while emitting one stem stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Module records written.
    pub modules: usize,
    /// Modules with a name and location whose file id had no path.
    pub modules_without_path: usize,
    /// Module records written with the `0 - 0` range.
    pub unknown_line_ranges: usize,
    /// Component records written.
    pub components: usize,
    /// Component records written with the `UNKNOWN` type.
    pub unresolved_components: usize,
}

impl ConversionSummary {
    pub fn records(&self) -> usize {
        self.modules + self.components
    }
}

pub fn stem_records<'doc>(
    meta: &'doc MetadataDocument,
    netlist: &'doc NetlistDocument,
) -> Vec<StemRecord<'doc>> {
    let mut records = Vec::new();
    let Ok(_) = walk(meta, netlist, |record| {
        records.push(record);
        Ok::<(), std::convert::Infallible>(())
    });
    records
}

/// Writes every record followed by a newline, in walk order.
pub fn write_stems<W: Write>(
    meta: &MetadataDocument,
    netlist: &NetlistDocument,
    out: &mut W,
) -> Result<ConversionSummary, CoreError> {
    walk(meta, netlist, |record| {
        writeln!(out, "{record}").map_err(CoreError::from)
    })
}

fn walk<'doc, E>(
    meta: &'doc MetadataDocument,
    netlist: &'doc NetlistDocument,
    mut sink: impl FnMut(StemRecord<'doc>) -> Result<(), E>,
) -> Result<ConversionSummary, E> {
    if !netlist.has_module_list() {
        log::warn!("netlist has no \"modulesp\" array; no records will be written");
    }

    let files = FileIndex::build(meta);
    let addresses = AddressIndex::build(netlist);
    let mut summary = ConversionSummary::default();

    for module in netlist.modules() {
        let (Some(name), Some(loc)) = (module.name(), module.loc()) else {
            continue;
        };

        if let Some(record) = module_record(name, loc, &files) {
            if matches!(&record, StemRecord::Module { lines, .. } if lines.is_unknown()) {
                log::debug!("module {name}: no line range in location {loc:?}");
                summary.unknown_line_ranges += 1;
            }
            summary.modules += 1;
            sink(record)?;
        } else {
            summary.modules_without_path += 1;
        }

        emit_components(module, name, &addresses, &mut sink, &mut summary)?;
    }

    Ok(summary)
}

fn module_record<'doc>(
    name: &'doc str,
    loc: &'doc str,
    files: &FileIndex<'doc>,
) -> Option<StemRecord<'doc>> {
    let location = parse_location(loc);
    // an empty realpath counts as missing
    let Some(path) = files.get(location.file_id).filter(|path| !path.is_empty()) else {
        log::debug!(
            "module {name}: file id {:?} has no real path, module record skipped",
            location.file_id
        );
        return None;
    };
    Some(StemRecord::Module {
        name,
        path,
        lines: location.lines,
    })
}

fn emit_components<'doc, E>(
    module: Module<'doc>,
    parent: &'doc str,
    addresses: &AddressIndex<'doc>,
    sink: &mut impl FnMut(StemRecord<'doc>) -> Result<(), E>,
    summary: &mut ConversionSummary,
) -> Result<(), E> {
    for stmt in module.statements().filter(|stmt| stmt.is_cell()) {
        let Some(instance) = stmt.name() else {
            continue;
        };
        let module_ref = stmt.module_ref();
        let target = match module_ref.as_ref().and_then(|addr| addresses.get(addr)) {
            Some(target) => target,
            None => {
                log::debug!(
                    "cell {instance} in {parent}: module reference {module_ref:?} not found"
                );
                summary.unresolved_components += 1;
                UNRESOLVED_TYPE
            }
        };
        summary.components += 1;
        sink(StemRecord::Component {
            instance,
            target,
            parent,
        })?;
    }
    Ok(())
}
