//! Golden output test over a fixture inventory.
//!
//! The fixture covers every variant shape, flattened fields on structs and
//! variants, path and query routes, the route registry, and intra-doc links
//! to both types and routes.

use typegen_codegen::{GENERATED_HEADER, Generator};
use typegen_core::Inventory;

const INVENTORY: &str = include_str!("fixtures/inventory.json");
const EXPECTED: &str = include_str!("fixtures/expected.ts");

fn fixture() -> Inventory {
    serde_json::from_str(INVENTORY).unwrap()
}

#[test]
fn test_fixture_matches_golden_output() {
    let module = Generator::new().unwrap().generate(&fixture()).unwrap();
    assert_eq!(module.content, EXPECTED);
}

#[test]
fn test_fixture_file_name_and_stats() {
    let module = Generator::new().unwrap().generate(&fixture()).unwrap();

    assert_eq!(module.version, "0.1.0-test");
    assert_eq!(module.file_name, "v0.1.0-test.ts");
    assert_eq!(module.stats.structs, 3);
    assert_eq!(module.stats.enums, 3);
    assert_eq!(module.stats.variants, 7);
    assert_eq!(module.stats.omitted_variants, 1);
    assert_eq!(module.stats.routes, 3);
    assert_eq!(module.stats.skipped_items, 1);
}

#[test]
fn test_output_starts_with_header() {
    let module = Generator::new().unwrap().generate(&fixture()).unwrap();
    assert!(module.content.starts_with(GENERATED_HEADER));
    assert!(module.content.ends_with("};\n"));
}

#[test]
fn test_sections_follow_fixed_order() {
    let content = Generator::new()
        .unwrap()
        .generate(&fixture())
        .unwrap()
        .content;

    let last_struct = content.find("export interface Attachments").unwrap();
    let first_enum = content.find("export type ErrorResponse =").unwrap();
    let last_enum = content.find("export type PresenceOffline").unwrap();
    let first_route = content.find("function createSession").unwrap();
    let registry = content.find("export const ROUTES").unwrap();

    assert!(last_struct < first_enum);
    assert!(last_enum < first_route);
    assert!(first_route < registry);
}

#[test]
fn test_hidden_items_are_emitted() {
    let inventory = fixture();
    assert!(inventory.items.iter().any(|item| item.hidden && item.name == "Session"));

    let module = Generator::new().unwrap().generate(&inventory).unwrap();
    assert!(module.content.contains("export interface Session {"));
}

#[test]
fn test_unknown_item_is_absent() {
    let module = Generator::new().unwrap().generate(&fixture()).unwrap();
    assert!(!module.content.contains("MAX_SIZE"));
    assert!(!module.content.contains("Largest accepted upload"));
}
