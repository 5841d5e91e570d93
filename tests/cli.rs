use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Runs the binary against an empty config home so the user's keymap never leaks in.
fn spritekeys_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("spritekeys").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("RUST_LOG");
    cmd
}

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("keymap.toml");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn spritekeys_help_prints_about() {
    let home = TempDir::new().unwrap();
    spritekeys_cmd(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Keyboard shortcut dispatch for sprite editors",
        ));
}

#[test]
fn no_flags_prints_usage() {
    let home = TempDir::new().unwrap();
    spritekeys_cmd(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn press_runs_command_with_default_keymap() {
    let home = TempDir::new().unwrap();
    spritekeys_cmd(&home)
        .args(["--press", "Ctrl+Shift+Z", "-"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ctrl+Shift+Z -> command Redo"))
        .stdout(predicate::str::contains("- -> command Zoom(action=out)"));
}

#[test]
fn shared_chord_cycles_marquees() {
    let home = TempDir::new().unwrap();
    spritekeys_cmd(&home)
        .args(["--tool", "rectangular_marquee", "--press", "M", "M"])
        .assert()
        .success()
        .stdout(predicate::str::contains("M -> tool elliptical_marquee"))
        .stdout(predicate::str::contains("M -> tool rectangular_marquee"));
}

#[test]
fn modal_window_blocks_shortcuts() {
    let home = TempDir::new().unwrap();
    spritekeys_cmd(&home)
        .args(["--modal", "--press", "Ctrl+Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ctrl+Z -> not handled"));
}

#[test]
fn bare_modifier_press_is_not_handled() {
    let home = TempDir::new().unwrap();
    spritekeys_cmd(&home)
        .args(["--press", "Alt", "Shift"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alt -> not handled"))
        .stdout(predicate::str::contains("Shift -> not handled"));
}

#[test]
fn selection_context_enables_clear() {
    let home = TempDir::new().unwrap();
    spritekeys_cmd(&home)
        .args(["--tool", "lasso", "--selection", "--press", "Delete"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete -> command Clear"));

    spritekeys_cmd(&home)
        .args(["--tool", "lasso", "--press", "Delete"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete -> not handled"));
}

#[test]
fn hold_resolves_quicktools() {
    let home = TempDir::new().unwrap();
    spritekeys_cmd(&home)
        .args(["--hold", "Ctrl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ctrl -> quicktool move"));

    spritekeys_cmd(&home)
        .args(["--tool", "rectangular_marquee", "--selection", "--hold", "Ctrl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ctrl -> no quicktool"));
}

#[test]
fn hidden_tools_are_skipped_when_cycling() {
    let home = TempDir::new().unwrap();
    let config = write_config(
        &home,
        r#"
        [[keymap.tools]]
        tool = "rectangular_marquee"
        keys = ["M"]

        [[keymap.tools]]
        tool = "elliptical_marquee"
        keys = ["M"]

        [[keymap.tools]]
        tool = "lasso"
        keys = ["M"]

        [toolbar]
        hidden_tools = ["elliptical_marquee"]
        "#,
    );

    spritekeys_cmd(&home)
        .arg("--config")
        .arg(&config)
        .args(["--tool", "rectangular_marquee", "--press", "M"])
        .assert()
        .success()
        .stdout(predicate::str::contains("M -> tool lasso"));
}

#[test]
fn invalid_chord_in_config_fails() {
    let home = TempDir::new().unwrap();
    let config = write_config(
        &home,
        r#"
        [[keymap.tools]]
        tool = "pencil"
        keys = ["Ctrl+Nope"]
        "#,
    );

    spritekeys_cmd(&home)
        .arg("--config")
        .arg(&config)
        .arg("--list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid shortcut 'Ctrl+Nope' for tool pencil"));
}

#[test]
fn invalid_pressed_chord_fails() {
    let home = TempDir::new().unwrap();
    spritekeys_cmd(&home)
        .args(["--press", "Ctrl+"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid chord 'Ctrl+'"));
}

#[test]
fn unknown_tool_fails() {
    let home = TempDir::new().unwrap();
    spritekeys_cmd(&home)
        .args(["--tool", "airbrush", "--press", "B"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown tool 'airbrush'"));
}

#[test]
fn list_shows_bindings_and_contexts() {
    let home = TempDir::new().unwrap();
    spritekeys_cmd(&home)
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("tool pencil"))
        .stdout(predicate::str::contains("Ctrl+Y, Ctrl+Shift+Z"))
        .stdout(predicate::str::contains("[selection]"));
}

#[test]
fn print_default_config_emits_keymap() {
    let home = TempDir::new().unwrap();
    spritekeys_cmd(&home)
        .arg("--print-default-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[[keymap.commands]]"))
        .stdout(predicate::str::contains("rectangular_marquee"));
}
