use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn varsubst(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_varsubst"))
        .args(args)
        .env_remove("VARSUBST_FILE")
        .output()
        .unwrap()
}

fn setup(vars: &str, template: &str) -> (TempDir, String, String) {
    let dir = tempfile::tempdir().unwrap();
    let vars_path = dir.path().join("app.vars");
    let template_path = dir.path().join("app.tmpl");
    fs::write(&vars_path, vars).unwrap();
    fs::write(&template_path, template).unwrap();
    (
        dir,
        vars_path.display().to_string(),
        template_path.display().to_string(),
    )
}

#[test]
fn test_render_with_file_and_vars() {
    let (_dir, vars, template) = setup("env = prod\n", "{{name}} runs in {{env}}\n");
    let output = varsubst(&["--file", &vars, "--var", "name=api", "--var", "env=dev", &template]);

    assert!(output.status.success());
    // The file value wins over --var.
    assert_eq!(String::from_utf8_lossy(&output.stdout), "api runs in prod\n");
}

#[test]
fn test_print_vars() {
    let (_dir, vars, _) = setup("b = 2\na = 1\n", "");
    let output = varsubst(&["--file", &vars, "--var", "c=x=y", "--print-vars"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "a = 1\nb = 2\nc = x=y\n"
    );
}

#[test]
fn test_bad_variables_file_fails_with_every_diagnostic() {
    let (_dir, vars, template) = setup("A = 1\n%bad\nB = 2\n!no\n", "{{A}}");
    let output = varsubst(&["--file", &vars, &template]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load variables from file"));
    assert!(stderr.contains(&format!("{},2:0 - unexpected token %", vars)));
    assert!(stderr.contains(&format!("{},4:0 - unexpected token !", vars)));
}

#[test]
fn test_malformed_var_flag_is_usage_error() {
    let (_dir, _, template) = setup("", "x");
    let output = varsubst(&["--var", "novalue", &template]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("must be key=value"));
}

#[test]
fn test_missing_template_argument() {
    let output = varsubst(&[]);
    assert!(!output.status.success());
}

#[test]
fn test_unreadable_template() {
    let output = varsubst(&["/no/such/template.tmpl"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read template file"));
}
