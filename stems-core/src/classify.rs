//! Decides which of two parsed documents is the metadata table.
//!
//! The only signal is a top-level `files` key: the metadata document has
//! one, the netlist does not.

use serde_json::Value;

use crate::document::{MetadataDocument, NetlistDocument};
use crate::error::CoreError;

pub fn classify(
    first: Value,
    second: Value,
) -> Result<(MetadataDocument, NetlistDocument), CoreError> {
    match (has_file_table(&first), has_file_table(&second)) {
        (true, false) => {
            log::info!("first document is the metadata table");
            Ok((MetadataDocument::new(first), NetlistDocument::new(second)))
        }
        (false, true) => {
            log::info!("second document is the metadata table");
            Ok((MetadataDocument::new(second), NetlistDocument::new(first)))
        }
        (true, true) => Err(CoreError::AmbiguousInput {
            detail: "both documents have a top-level \"files\" key",
        }),
        (false, false) => Err(CoreError::AmbiguousInput {
            detail: "neither document has a top-level \"files\" key",
        }),
    }
}

fn has_file_table(value: &Value) -> bool {
    value.as_object().is_some_and(|map| map.contains_key("files"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn meta() -> Value {
        json!({"files": {"f1": {"realpath": "/a.v"}}})
    }

    fn netlist() -> Value {
        json!({"modulesp": [{"addr": "0x1", "name": "top"}]})
    }

    #[test]
    fn classification_is_order_independent() {
        let (meta_a, netlist_a) = classify(meta(), netlist()).expect("classify");
        let (meta_b, netlist_b) = classify(netlist(), meta()).expect("classify");
        assert_eq!(meta_a, meta_b);
        assert_eq!(netlist_a, netlist_b);
        assert_eq!(meta_a.as_value(), &meta());
        assert_eq!(netlist_a.as_value(), &netlist());
    }

    #[test]
    fn rejects_two_metadata_documents() {
        let err = classify(meta(), meta()).unwrap_err();
        assert!(matches!(err, CoreError::AmbiguousInput { .. }));
        assert!(err.to_string().contains("both"));
    }

    #[test]
    fn rejects_two_netlists() {
        let err = classify(netlist(), netlist()).unwrap_err();
        assert!(err.to_string().contains("neither"));
    }

    #[test]
    fn files_key_counts_even_when_empty_or_null() {
        let (meta_doc, _) = classify(json!({"files": null}), netlist()).expect("classify");
        assert_eq!(meta_doc.files().count(), 0);
    }

    #[test]
    fn non_object_documents_have_no_file_table() {
        let err = classify(json!(["files"]), json!("files")).unwrap_err();
        assert!(matches!(err, CoreError::AmbiguousInput { .. }));
    }
}
