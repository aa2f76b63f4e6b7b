//! Integration tests for the generate and inspect commands.

use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use typegen_cli::commands::generate::{self, GenerateArgs};
use typegen_cli::commands::inspect;
use typegen_cli::exit_code_for;
use typegen_core::cli::{ExitCode, OutputFormat};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn user_struct() -> Value {
    json!({
        "name": "User",
        "doc": "A user account.",
        "category": "users",
        "hidden": false,
        "package": "todel",
        "item": {
            "type": "struct",
            "fields": [
                {"name": "id", "doc": null, "field_type": "u64", "flattened": false, "nullable": false, "ommitable": false},
                {"name": "bio", "doc": null, "field_type": "Option<String>", "flattened": false, "nullable": true, "ommitable": true}
            ]
        }
    })
}

fn get_user_route() -> Value {
    json!({
        "name": "get_user",
        "doc": "Get a [`User`].",
        "category": "users",
        "hidden": false,
        "package": "oprish",
        "item": {
            "type": "route",
            "method": "GET",
            "route": "/users/<user_id>",
            "path_params": [{"name": "user_id", "param_type": "u64"}],
            "query_params": [],
            "body_type": null,
            "return_type": "User",
            "guards": []
        }
    })
}

/// Writes an inventory directory with one document per item.
fn write_inventory(dir: &Path, version: &str, items: &[(&str, Value)]) {
    let names: Vec<&str> = items.iter().map(|(name, _)| *name).collect();
    std::fs::write(
        dir.join("index.json"),
        json!({"version": version, "items": names}).to_string(),
    )
    .unwrap();
    for (name, item) in items {
        std::fs::write(dir.join(name), item.to_string()).unwrap();
    }
}

/// Writes a configuration file with defaults and returns its path.
fn write_config(dir: &Path, output: &Path) -> PathBuf {
    let path = dir.join("config.toml");
    std::fs::write(
        &path,
        format!("[output]\ndirectory = {:?}\n", output.display().to_string()),
    )
    .unwrap();
    path
}

fn args(inventory: &Path, output: &Path) -> GenerateArgs {
    GenerateArgs {
        inventory: inventory.display().to_string(),
        output: Some(output.to_path_buf()),
        yes: false,
        stdout: false,
    }
}

#[tokio::test]
async fn test_generate_from_directory() {
    let inventory = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_inventory(
        inventory.path(),
        "0.3.0",
        &[("user.json", user_struct()), ("get_user.json", get_user_route())],
    );
    let config = write_config(inventory.path(), output.path());

    let code = generate::run(args(inventory.path(), output.path()), Some(config), OutputFormat::Json)
        .await
        .unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let content = std::fs::read_to_string(output.path().join("v0.3.0.ts")).unwrap();
    assert_eq!(
        content,
        "// This file was @generated by typegen\n\
         \n\
         /** A user account. */\n\
         export interface User {\n\
         \x20 id: number;\n\
         \x20 bio?: string | null;\n\
         }\n\
         \n\
         function getUser(baseUrl: string, userId: number): string {\n\
         \x20 return `${baseUrl}/users/${userId}/`;\n\
         }\n\
         \n\
         export const ROUTES = {\n\
         \x20 /** Get a {@link User}. */\n\
         \x20 getUser,\n\
         };\n"
    );
}

#[tokio::test]
async fn test_generate_uses_configured_output_directory() {
    let inventory = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let target = output.path().join("generated");
    write_inventory(inventory.path(), "1.0.0", &[("user.json", user_struct())]);
    let config = write_config(inventory.path(), &target);

    let generate_args = GenerateArgs {
        output: None,
        ..args(inventory.path(), output.path())
    };
    let code = generate::run(generate_args, Some(config), OutputFormat::Text)
        .await
        .unwrap();

    assert_eq!(code, ExitCode::SUCCESS);
    assert!(target.join("v1.0.0.ts").exists());
}

#[tokio::test]
async fn test_generate_overwrites_with_yes() {
    let inventory = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_inventory(inventory.path(), "1.0.0", &[("user.json", user_struct())]);
    let config = write_config(inventory.path(), output.path());
    let module = output.path().join("v1.0.0.ts");
    std::fs::write(&module, "stale").unwrap();

    let generate_args = GenerateArgs {
        yes: true,
        ..args(inventory.path(), output.path())
    };
    let code = generate::run(generate_args, Some(config), OutputFormat::Json)
        .await
        .unwrap();

    assert_eq!(code, ExitCode::SUCCESS);
    assert!(std::fs::read_to_string(&module).unwrap().contains("export interface User"));
}

#[tokio::test]
async fn test_generate_stdout_writes_nothing() {
    let inventory = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_inventory(inventory.path(), "1.0.0", &[("user.json", user_struct())]);
    let config = write_config(inventory.path(), output.path());

    let generate_args = GenerateArgs {
        output: None,
        stdout: true,
        ..args(inventory.path(), output.path())
    };
    let code = generate::run(generate_args, Some(config), OutputFormat::Json)
        .await
        .unwrap();

    assert_eq!(code, ExitCode::SUCCESS);
    assert_eq!(std::fs::read_dir(output.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_generate_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/index.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"version": "2.0.0", "items": ["users/get_user.json"]})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/get_user.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(get_user_route()))
        .mount(&server)
        .await;

    let output = TempDir::new().unwrap();
    let config = write_config(output.path(), output.path());
    let generate_args = GenerateArgs {
        inventory: server.uri(),
        output: Some(output.path().to_path_buf()),
        yes: false,
        stdout: false,
    };

    let code = generate::run(generate_args, Some(config), OutputFormat::Json)
        .await
        .unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let content = std::fs::read_to_string(output.path().join("v2.0.0.ts")).unwrap();
    assert!(content.contains("function getUser(baseUrl: string, userId: number): string {"));
    // Not a route name known to this inventory, so the link is kept as is
    assert!(content.contains("/** Get a {@link User}. */"));
}

#[tokio::test]
async fn test_fetch_failure_maps_to_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/index.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let output = TempDir::new().unwrap();
    let config = write_config(output.path(), output.path());
    let generate_args = GenerateArgs {
        inventory: server.uri(),
        output: Some(output.path().join("out")),
        yes: true,
        stdout: false,
    };

    let err = generate::run(generate_args, Some(config), OutputFormat::Json)
        .await
        .unwrap_err();
    assert_eq!(exit_code_for(&err), ExitCode::FETCH_ERROR);
    assert!(!output.path().join("out").exists());
}

#[tokio::test]
async fn test_invalid_item_maps_to_fetch_error() {
    let inventory = TempDir::new().unwrap();
    write_inventory(
        inventory.path(),
        "1.0.0",
        &[("broken.json", json!({"name": "Broken", "item": {"type": "struct", "fields": "nope"}}))],
    );
    let config = write_config(inventory.path(), inventory.path());

    let err = generate::run(args(inventory.path(), inventory.path()), Some(config), OutputFormat::Json)
        .await
        .unwrap_err();
    assert_eq!(exit_code_for(&err), ExitCode::FETCH_ERROR);
}

#[tokio::test]
async fn test_flatten_cycle_writes_nothing() {
    let flattened = |name: &str, base: &str| {
        json!({
            "name": name,
            "item": {
                "type": "struct",
                "fields": [{"name": "base", "field_type": base, "flattened": true, "nullable": false, "ommitable": false}]
            }
        })
    };
    let inventory = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_inventory(
        inventory.path(),
        "1.0.0",
        &[("a.json", flattened("A", "B")), ("b.json", flattened("B", "A"))],
    );
    let config = write_config(inventory.path(), output.path());

    let err = generate::run(args(inventory.path(), output.path()), Some(config), OutputFormat::Json)
        .await
        .unwrap_err();
    assert_eq!(exit_code_for(&err), ExitCode::ERROR);
    assert!(format!("{err:#}").contains("A -> B -> A"));
    assert_eq!(std::fs::read_dir(output.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_invalid_config_maps_to_invalid_input() {
    let inventory = TempDir::new().unwrap();
    write_inventory(inventory.path(), "1.0.0", &[("user.json", user_struct())]);
    let config = inventory.path().join("config.toml");
    std::fs::write(&config, "[fetch]\nmax_concurrent_requests = 0\n").unwrap();

    let err = inspect::run(inventory.path().display().to_string(), Some(config), OutputFormat::Json)
        .await
        .unwrap_err();
    assert_eq!(exit_code_for(&err), ExitCode::INVALID_INPUT);
}

#[tokio::test]
async fn test_inspect_directory() {
    let inventory = TempDir::new().unwrap();
    write_inventory(
        inventory.path(),
        "0.3.0",
        &[("user.json", user_struct()), ("get_user.json", get_user_route())],
    );
    let config = write_config(inventory.path(), inventory.path());

    let code = inspect::run(inventory.path().display().to_string(), Some(config), OutputFormat::Pretty)
        .await
        .unwrap();
    assert_eq!(code, ExitCode::SUCCESS);
}
