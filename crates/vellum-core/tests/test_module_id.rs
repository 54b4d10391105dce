//! Tests for module identifiers and error rendering.

use serde::{Deserialize, Serialize};
use vellum_core::{Error, ModuleId};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct ModuleDoc {
    module: ModuleId,
}

#[test]
fn test_module_id_round_trips_through_serde() {
    let doc = ModuleDoc {
        module: ModuleId::from("app/components/list"),
    };
    let text = toml::to_string(&doc).unwrap();
    let back: ModuleDoc = toml::from_str(&text).unwrap();
    assert_eq!(doc, back);
}

#[test]
fn test_module_id_ordering_is_lexicographic() {
    let mut ids = vec![
        ModuleId::from("app/b"),
        ModuleId::from("app/a"),
        ModuleId::from("lib"),
    ];
    ids.sort();
    assert_eq!(ids[0].as_str(), "app/a");
    assert_eq!(ids[2].as_str(), "lib");
}

#[test]
fn test_error_messages() {
    let err = Error::MalformedReference;
    assert_eq!(
        err.to_string(),
        "malformed external reference: missing symbol name"
    );

    let err = Error::UnresolvedImport {
        from: "app/a".to_string(),
        to: "app/b".to_string(),
        reason: "empty target".to_string(),
    };
    assert!(err.to_string().contains("app/a"));
    assert!(err.to_string().contains("app/b"));
}
