//! CLI integration tests against a file:// store.

mod common;

use serde_json::Value;
use tempfile::TempDir;

use common::{file_store_url, run_cli, run_cli_success};

fn json_lines(stdout: &str) -> Vec<Value> {
    stdout
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).expect("each line is a JSON record"))
        .collect()
}

#[test]
fn test_version() {
    let output = run_cli(&["--version"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("domainboard "));
}

#[test]
fn test_list_missing_file_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let store = file_store_url(&temp_dir.path().join("ordersStatusData.json"));

    let output = run_cli(&["records", "list", "--store", &store]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No records found."));
}

#[test]
fn test_record_lifecycle() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("ordersStatusData.json");
    let store = file_store_url(&data_file);

    // Add
    let stdout = run_cli_success(&[
        "records",
        "add",
        "https://example.com:10.0.0.1",
        "--store",
        &store,
    ]);
    let id = stdout.lines().next().unwrap().trim().to_string();
    assert_eq!(id.len(), "20240101T000000".len());

    // List
    let records = json_lines(&run_cli_success(&["records", "list", "--store", &store]));
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["id"], id.as_str());
    assert_eq!(records[0]["domain"], "example.com");
    assert_eq!(records[0]["ip"], "10.0.0.1");

    // Update
    let stdout = run_cli_success(&[
        "records", "update", &id, "--domain", "renamed.com", "--store", &store,
    ]);
    let updated: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(updated["domain"], "renamed.com");
    assert_eq!(updated["ip"], "10.0.0.1");

    // Show
    let stdout = run_cli_success(&["records", "show", &id, "--json", "--store", &store]);
    let shown: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(shown, updated);

    // Delete
    run_cli_success(&["records", "delete", &id, "--store", &store]);
    assert_eq!(std::fs::read_to_string(&data_file).unwrap(), "[]");
}

#[test]
fn test_add_empty_input_fails() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("ordersStatusData.json");
    let store = file_store_url(&data_file);

    let output = run_cli(&["records", "add", "  ", "--store", &store]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("domain must not be empty"));
    assert!(!data_file.exists());
}

#[test]
fn test_missing_record_fails() {
    let temp_dir = TempDir::new().unwrap();
    let store = file_store_url(&temp_dir.path().join("ordersStatusData.json"));

    for args in [
        vec!["records", "delete", "ghost"],
        vec!["records", "update", "ghost", "--ip", "1.1.1.1"],
        vec!["records", "show", "ghost"],
    ] {
        let mut args = args;
        args.extend(["--store", store.as_str()]);
        let output = run_cli(&args);
        assert!(!output.status.success(), "{:?} should fail", args);
        assert!(
            String::from_utf8_lossy(&output.stderr).contains("record not found: ghost"),
            "{:?}: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

#[test]
fn test_list_search_and_paging() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("ordersStatusData.json");
    let records: Vec<Value> = (0..8)
        .map(|i| {
            let domain = if i < 5 { "alpha.com" } else { "beta.org" };
            serde_json::json!({ "id": format!("r{i}"), "domain": domain, "ip": "", "date": "" })
        })
        .collect();
    std::fs::write(&data_file, serde_json::to_string_pretty(&records).unwrap()).unwrap();
    let store = file_store_url(&data_file);

    let page1 = json_lines(&run_cli_success(&["records", "list", "--store", &store]));
    assert_eq!(page1.len(), 6);

    let page2 = json_lines(&run_cli_success(&[
        "records", "list", "--page", "2", "--store", &store,
    ]));
    assert_eq!(page2.len(), 2);
    assert_eq!(page2[0]["id"], "r6");

    let beta = json_lines(&run_cli_success(&[
        "records", "list", "--search", "BETA", "--store", &store,
    ]));
    assert_eq!(beta.len(), 3);

    let all = json_lines(&run_cli_success(&["records", "list", "--all", "--store", &store]));
    assert_eq!(all.len(), 8);
}

#[test]
fn test_corrupt_file_policies() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("ordersStatusData.json");
    std::fs::write(&data_file, "{ not json").unwrap();
    let store = file_store_url(&data_file);

    let output = run_cli(&["records", "list", "--store", &store]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let output = run_cli(&[
        "records",
        "list",
        "--read-failures",
        "surface",
        "--store",
        &store,
    ]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read"));
}

#[test]
fn test_invalid_policy_value_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let store = file_store_url(&temp_dir.path().join("ordersStatusData.json"));

    let output = run_cli(&[
        "records",
        "list",
        "--duplicate-ids",
        "maybe",
        "--store",
        &store,
    ]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("maybe"));
}

#[test]
fn test_invalid_store_url_rejected() {
    let output = run_cli(&["records", "list", "--store", "ftp://example.com"]);
    assert!(!output.status.success());
}
