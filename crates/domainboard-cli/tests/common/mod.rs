use std::path::Path;
use std::process::{Command, Output};

use url::Url;

/// file:// store URL for a data file path.
pub fn file_store_url(path: &Path) -> String {
    Url::from_file_path(path)
        .expect("Failed to convert path to file URL")
        .to_string()
}

/// Run the CLI binary with arguments, isolated from DOMAINBOARD_* settings.
pub fn run_cli(args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_domainboard"));
    cmd.args(args);
    for var in [
        "DOMAINBOARD_STORE",
        "DOMAINBOARD_READ_FAILURES",
        "DOMAINBOARD_DUPLICATE_IDS",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI and expect success.
pub fn run_cli_success(args: &[&str]) -> String {
    let output = run_cli(args);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}
