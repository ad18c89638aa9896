//! CLI integration tests
//! Run with: cargo test --test cli_test

use std::process::Command;
use std::sync::Once;

static INIT: Once = Once::new();

fn ensure_init() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt::try_init();
    });
}

fn wake_bot() -> Command {
    Command::new(env!("CARGO_BIN_EXE_wake-bot"))
}

#[test]
fn test_version_prints_package_version() {
    ensure_init();

    let output = wake_bot().arg("version").output().expect("binary should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), format!("wake-bot v{}", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_init_config_is_loadable_yaml() {
    ensure_init();

    let output = wake_bot().arg("init-config").output().expect("binary should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_yaml::Value = serde_yaml::from_str(&stdout).expect("should be YAML");
    assert_eq!(
        parsed["discord"]["api-base"].as_str(),
        Some("https://discord.com/api/v10")
    );
    assert_eq!(parsed["discord"]["bot-token"].as_str(), Some(""));
}

/// Nothing listens on the discard port, so the request fails at the
/// transport level and the process must exit non-zero.
#[test]
fn test_transport_failure_exits_non_zero() {
    ensure_init();

    let output = wake_bot()
        .args(["--config", "no-such-config.yaml", "read-messages", "--channel-id", "456"])
        .env("DISCORD_API_BASE", "http://127.0.0.1:9/api/v10")
        .env("BOT_TOKEN", "abc")
        .output()
        .expect("binary should run");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Network error"), "stderr: {}", stderr);
}

#[test]
fn test_edit_response_requires_interaction_token() {
    ensure_init();

    let output = wake_bot()
        .args(["edit-response", "done"])
        .output()
        .expect("binary should run");

    assert!(!output.status.success());
}

/// Requires BOT_TOKEN and CHANNEL_ID for a real bot
#[test]
#[ignore]
fn test_read_messages_live() {
    ensure_init();

    let token = std::env::var("BOT_TOKEN").expect("BOT_TOKEN must be set");
    let channel = std::env::var("CHANNEL_ID").expect("CHANNEL_ID must be set");

    let output = wake_bot()
        .args(["--token", &token, "read-messages", "--channel-id", &channel])
        .output()
        .expect("binary should run");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let body: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert!(body.is_array());
}
