//! Integration tests for batch mode.

use super::common::{run, run_with_stdin};
use pretty_assertions::assert_eq;
use std::io::Write;

#[test]
fn test_batch_from_stdin() {
    let (code, stdout, _) = run_with_stdin(
        &["--batch", "-"],
        "enable\nconfigure terminal\nip route 0.0.0.0 0.0.0.0 203.0.113.1\nend\nshow ip route\n",
    );

    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "\
Router> enable
Router# configure terminal
Router(config)# ip route 0.0.0.0 0.0.0.0 203.0.113.1
Router(config)# end
Router# show ip route
S    0.0.0.0 0.0.0.0 [1/0] via 203.0.113.1
Router#
"
    );
}

#[test]
fn test_batch_from_file_with_hostname_override() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "enable").unwrap();
    writeln!(file, "show access-lists").unwrap();

    let path = file.path().to_str().unwrap().to_string();
    let (code, stdout, _) = run(&["--batch", &path, "--hostname", "BR1"]);

    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "BR1> enable\nBR1# show access-lists\nNo access list is configured\nBR1#\n"
    );
}

#[test]
fn test_batch_missing_file() {
    let (code, _, stderr) = run(&["--batch", "/nonexistent/routerlab/lab.txt"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("I/O Error"));
}
