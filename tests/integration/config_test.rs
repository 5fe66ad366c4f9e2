//! Loading configuration files and building sessions from them.

use routerlab::config::{Config, WireFormat};
use routerlab::device::InterfaceId;
use routerlab::presenter::AclLabelPolicy;
use routerlab::Simulator;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_missing_file_yields_defaults() {
    let config = Config::load_from_file(std::path::Path::new("/nonexistent/routerlab.toml"));
    assert_eq!(config.unwrap(), Config::default());
}

#[test]
fn test_full_config_file() {
    let file = write_config(
        r#"
[device]
hostname = "Branch1"

[presenter]
acl_labels = "by-range"
transcript_limit = 500

[scenario.lan]
network = "192.168.20.0"
netmask = "255.255.255.0"
interface = "gigabitethernet0/0"
address = "192.168.20.1"

[server]
bind = "0.0.0.0:2424"
format = "json"
"#,
    );

    let config = Config::load_from_file(file.path()).unwrap();
    assert_eq!(config.device.hostname, "Branch1");
    assert_eq!(config.presenter.acl_labels, AclLabelPolicy::ByRange);
    assert_eq!(config.presenter.transcript_limit, Some(500));
    assert_eq!(config.scenario.lan.network, "192.168.20.0");
    assert_eq!(config.scenario.lan.interface, InterfaceId::G0_0);
    assert_eq!(config.server.format, WireFormat::Json);

    let sim = Simulator::from_config(&config);
    assert_eq!(sim.prompt(), "Branch1>");
}

#[test]
fn test_invalid_config_names_the_file() {
    let file = write_config("[presenter]\nacl_labels = \"sideways\"\n");
    let err = Config::load_from_file(file.path()).unwrap_err();
    assert_eq!(err.category(), "Configuration Error");
    assert!(err.to_string().contains(&file.path().display().to_string()));
}
