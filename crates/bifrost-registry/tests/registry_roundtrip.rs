//! End-to-end registry flow: descriptor on disk -> published entry ->
//! reconciled registry file

use bifrost_core::descriptor::{read_descriptor, write_descriptor_if_absent, DescriptorSeed};
use bifrost_registry::{reconcile, RegistryEntry};
use camino::Utf8Path;
use tempfile::TempDir;

fn seeded_registry() -> Vec<RegistryEntry> {
    serde_json::from_str(
        r#"[
  {
    "owner": "remix-run",
    "repo": "indie-stack",
    "description": "Remix with SQLite",
    "platform": "remix",
    "tags": ["typescript"]
  },
  {
    "owner": "vuejs",
    "repo": "create-vue",
    "description": "Official Vue starter",
    "platform": "vue",
    "tags": ["typescript"]
  }
]"#,
    )
    .unwrap()
}

#[test]
fn descriptor_written_at_generation_time_reconciles_as_update() {
    let temp = TempDir::new().unwrap();
    let project_dir = Utf8Path::from_path(temp.path()).unwrap();

    // Generation writes the descriptor once
    let seed = DescriptorSeed {
        name: "my-indie-app".to_string(),
        github: "remix-run/indie-stack".to_string(),
        platform: Some("remix".to_string()),
        tags: Some(vec!["typescript".to_string(), "sqlite".to_string()]),
        existing: None,
    };
    assert!(write_descriptor_if_absent(project_dir, seed).unwrap());

    // The operator edits the description by hand before submitting
    let mut descriptor = read_descriptor(project_dir).unwrap().unwrap();
    descriptor.description = "My spin on the indie stack".to_string();

    let entry = RegistryEntry::from_descriptor(&descriptor).unwrap();
    let registry = reconcile(seeded_registry(), entry);

    // Same key: updated in place, order and length preserved
    assert_eq!(registry.len(), 2);
    assert_eq!(registry[0].reference(), "remix-run/indie-stack");
    assert_eq!(registry[0].description, "My spin on the indie stack");
    assert_eq!(registry[0].tags, vec!["typescript", "sqlite"]);
    assert_eq!(registry[1].reference(), "vuejs/create-vue");
}

#[test]
fn new_template_reconciles_as_append() {
    let temp = TempDir::new().unwrap();
    let project_dir = Utf8Path::from_path(temp.path()).unwrap();

    let seed = DescriptorSeed {
        name: "fresh".to_string(),
        github: "someone/fresh-stack".to_string(),
        platform: Some("remix".to_string()),
        tags: None,
        existing: None,
    };
    write_descriptor_if_absent(project_dir, seed).unwrap();

    let descriptor = read_descriptor(project_dir).unwrap().unwrap();
    let entry = RegistryEntry::from_descriptor(&descriptor).unwrap();
    let registry = reconcile(seeded_registry(), entry);

    assert_eq!(registry.len(), 3);
    assert_eq!(registry[2].reference(), "someone/fresh-stack");
    // Registry form drops the project-local fields entirely
    let json = serde_json::to_value(&registry[2]).unwrap();
    assert!(json.get("postInstall").is_none());
    assert!(json.get("plugins").is_none());
    assert!(json.get("name").is_none());
}
