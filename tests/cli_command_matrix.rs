use assert_cmd::cargo::cargo_bin_cmd;

fn run_help(args: &[&str]) {
    let mut cmd = cargo_bin_cmd!("runnerup");
    cmd.args(args).arg("--help").assert().success();
}

#[test]
fn every_cli_command_has_help_path() {
    // top-level
    run_help(&[]);

    // runtime commands
    run_help(&["demo"]);
    run_help(&["find"]);
    run_help(&["inspect"]);
}
