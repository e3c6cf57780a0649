//! Lookup tables built once per conversion.
//!
//! Keys and values borrow straight from the parsed documents; addresses are
//! compared by value and never dereferenced.

use std::collections::HashMap;

use crate::document::{Address, MetadataDocument, NetlistDocument};

/// file-id -> real filesystem path
#[derive(Debug, Default)]
pub struct FileIndex<'doc> {
    paths: HashMap<&'doc str, &'doc str>,
}

impl<'doc> FileIndex<'doc> {
    /// Entries without a `realpath` are left out.
    pub fn build(meta: &'doc MetadataDocument) -> Self {
        let paths: HashMap<_, _> = meta
            .files()
            .filter_map(|(id, realpath)| realpath.map(|path| (id, path)))
            .collect();
        log::debug!("file index holds {} paths", paths.len());
        Self { paths }
    }

    pub fn get(&self, file_id: &str) -> Option<&'doc str> {
        self.paths.get(file_id).copied()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// module address -> module name
#[derive(Debug, Default)]
pub struct AddressIndex<'doc> {
    names: HashMap<Address<'doc>, &'doc str>,
}

impl<'doc> AddressIndex<'doc> {
    /// Modules missing an address or a name are left out. When two modules
    /// share an address the later one wins.
    pub fn build(netlist: &'doc NetlistDocument) -> Self {
        let mut names = HashMap::new();
        for module in netlist.modules() {
            let (Some(addr), Some(name)) = (module.addr(), module.name()) else {
                continue;
            };
            if let Some(previous) = names.insert(addr.clone(), name) {
                log::debug!("address {addr} reassigned from module {previous} to {name}");
            }
        }
        log::debug!("address index holds {} modules", names.len());
        Self { names }
    }

    pub fn get(&self, addr: &Address<'doc>) -> Option<&'doc str> {
        self.names.get(addr).copied()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn file_index_skips_entries_without_realpath() {
        let meta = MetadataDocument::new(json!({
            "files": {
                "a": {"filename": "top.v", "realpath": "/src/top.v"},
                "b": {"filename": "<built-in>"}
            }
        }));
        let index = FileIndex::build(&meta);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("a"), Some("/src/top.v"));
        assert_eq!(index.get("b"), None);
    }

    #[test]
    fn file_index_of_missing_table_is_empty() {
        let meta = MetadataDocument::new(json!({"files": []}));
        assert!(FileIndex::build(&meta).is_empty());
    }

    #[test]
    fn address_index_skips_incomplete_modules() {
        let netlist = NetlistDocument::new(json!({
            "modulesp": [
                {"addr": "(B)", "name": "top"},
                {"addr": "(C)"},
                {"name": "orphan"}
            ]
        }));
        let index = AddressIndex::build(&netlist);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get(&Address::Text("(B)")), Some("top"));
        assert_eq!(index.get(&Address::Text("(C)")), None);
    }

    #[test]
    fn duplicate_address_keeps_last_module() {
        let netlist = NetlistDocument::new(json!({
            "modulesp": [
                {"addr": "0x1", "name": "first"},
                {"addr": "0x1", "name": "second"}
            ]
        }));
        let index = AddressIndex::build(&netlist);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get(&Address::Text("0x1")), Some("second"));
    }

    #[test]
    fn numeric_addresses_are_indexed_by_value() {
        let netlist = NetlistDocument::new(json!({
            "modulesp": [
                {"addr": 1, "name": "top"},
                {"addr": 2, "name": "sub"},
                {"addr": "2", "name": "quoted"}
            ]
        }));
        let index = AddressIndex::build(&netlist);
        assert_eq!(index.len(), 3);
        assert_eq!(index.get(&Address::Json("2".to_string())), Some("sub"));
        assert_eq!(index.get(&Address::Text("2")), Some("quoted"));
    }
}
