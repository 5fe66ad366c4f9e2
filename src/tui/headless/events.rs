//! Event DSL parser for headless mode.
//!
//! Parses event strings like `key:enter`, `type:enable`, `line:show ip route`
//! or `assert:contains:Router#` into executable events.

use crate::device::{ConfigStore, InterfaceId};
use crate::error::{Result, SimError};
use crate::tui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::fmt;
use std::time::Duration;

/// An assertion to check against the screen or state.
#[derive(Debug, Clone)]
pub enum Assertion {
    /// Screen contains text (case-insensitive).
    Contains(String),
    /// Screen contains text (case-sensitive).
    ContainsExact(String),
    /// Screen does not contain text (case-insensitive).
    NotContains(String),
    /// Screen matches regex pattern.
    Matches(String),
    /// State field equals value.
    StateEquals { field: String, value: String },
    /// Numeric state comparison (>=, <=, >, <).
    StateCompare {
        field: String,
        op: String,
        value: String,
    },
}

impl Assertion {
    /// Checks the assertion against the screen and app state.
    pub fn check(&self, screen: &str, app: &App) -> bool {
        match self {
            Self::Contains(text) => screen.to_lowercase().contains(&text.to_lowercase()),
            Self::ContainsExact(text) => screen.contains(text.as_str()),
            Self::NotContains(text) => !screen.to_lowercase().contains(&text.to_lowercase()),
            Self::Matches(pattern) => regex::Regex::new(pattern)
                .map(|re| re.is_match(screen))
                .unwrap_or(false),
            Self::StateEquals { field, value } => {
                state_field(app, field).as_deref() == Some(value.as_str())
            }
            Self::StateCompare { field, op, value } => {
                compare_values(state_field(app, field).as_deref(), op, value)
            }
        }
    }
}

/// Reads a named state field from the app.
pub fn state_field(app: &App, field: &str) -> Option<String> {
    let session = app.simulator.session();
    let store = app.simulator.store();
    match field {
        "mode" => Some(session.mode.kind().label().to_string()),
        "prompt" => Some(app.prompt()),
        "hostname" => Some(session.hostname.clone()),
        "interface" => Some(
            session
                .active_interface()
                .map(|id| id.to_string())
                .unwrap_or_default(),
        ),
        "input_text" => Some(app.input.text.clone()),
        "running" => Some(app.running.to_string()),
        "scroll" => Some(app.scroll.to_string()),
        "transcript_lines" => Some(app.transcript.len().to_string()),
        "route_count" => Some(store.routes.len().to_string()),
        "acl_rule_count" => Some(store.acls.len().to_string()),
        _ => {
            let (name, attribute) = field.split_once('.')?;
            interface_field(store, InterfaceId::resolve(name)?, attribute)
        }
    }
}

/// Per-interface fields, addressed as `g0/1.status`.
fn interface_field(store: &ConfigStore, id: InterfaceId, attribute: &str) -> Option<String> {
    let itf = store.interfaces.get(id);
    let acl = |number: Option<i64>| number.map(|n| n.to_string()).unwrap_or_default();
    match attribute {
        "address" => Some(
            itf.address()
                .map(|(ip, mask)| format!("{ip} {mask}"))
                .unwrap_or_else(|| "unassigned".to_string()),
        ),
        "status" => Some(if itf.is_shutdown { "down" } else { "up" }.to_string()),
        "description" => Some(itf.description.clone().unwrap_or_default()),
        "acl_in" => Some(acl(itf.acl_in)),
        "acl_out" => Some(acl(itf.acl_out)),
        _ => None,
    }
}

fn compare_values(actual: Option<&str>, op: &str, expected: &str) -> bool {
    let Some(actual) = actual else {
        return false;
    };

    match (actual.parse::<i64>(), expected.parse::<i64>()) {
        (Ok(a), Ok(e)) => match op {
            ">=" => a >= e,
            "<=" => a <= e,
            ">" => a > e,
            "<" => a < e,
            _ => false,
        },
        _ => false,
    }
}

/// A parsed event that can be executed.
#[derive(Debug, Clone)]
pub enum Event {
    /// A key press event.
    Key(KeyEvent),
    /// Type text into the input line.
    Type(String),
    /// Type text and press Enter.
    Line(String),
    /// Wait for a duration.
    Wait(Duration),
    /// Resize the terminal.
    Resize(u16, u16),
    /// Take a named snapshot.
    Snapshot(String),
    /// Assert something about the screen or state.
    Assert(Assertion),
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => {
                let mut parts = Vec::new();
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    parts.push("ctrl".to_string());
                }
                if key.modifiers.contains(KeyModifiers::ALT) {
                    parts.push("alt".to_string());
                }
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    parts.push("shift".to_string());
                }
                parts.push(key_name(key.code));
                write!(f, "key:{}", parts.join("+"))
            }
            Self::Type(text) => write!(f, "type:{text}"),
            Self::Line(text) => write!(f, "line:{text}"),
            Self::Wait(d) => write!(f, "wait:{}ms", d.as_millis()),
            Self::Resize(w, h) => write!(f, "resize:{w}x{h}"),
            Self::Snapshot(name) => write!(f, "snapshot:{name}"),
            Self::Assert(a) => match a {
                Assertion::Contains(t) => write!(f, "assert:contains:{t}"),
                Assertion::ContainsExact(t) => write!(f, "assert:contains-exact:{t}"),
                Assertion::NotContains(t) => write!(f, "assert:not-contains:{t}"),
                Assertion::Matches(p) => write!(f, "assert:matches:{p}"),
                Assertion::StateEquals { field, value } => {
                    write!(f, "assert:state:{field}={value}")
                }
                Assertion::StateCompare { field, op, value } => {
                    write!(f, "assert:state:{field}{op}{value}")
                }
            },
        }
    }
}

fn key_name(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pageup".to_string(),
        KeyCode::PageDown => "pagedown".to_string(),
        _ => "unknown".to_string(),
    }
}

/// Event kinds whose value is free text and may contain commas.
const TEXT_EVENTS: [&str; 3] = ["type:", "line:", "assert:"];

/// Parser for the event DSL.
#[derive(Debug, Default)]
pub struct EventParser;

impl EventParser {
    pub fn new() -> Self {
        Self
    }

    /// Parses all events from an input string.
    ///
    /// Events are separated by newlines or commas. A line starting with a
    /// free-text event (`type:`, `line:`, `assert:`) is taken whole.
    pub fn parse_all(&self, input: &str) -> Result<Vec<Event>> {
        let mut events = Vec::new();

        for line in input.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let lower = line.to_ascii_lowercase();
            if TEXT_EVENTS.iter().any(|prefix| lower.starts_with(prefix)) {
                events.push(self.parse_one(line)?);
                continue;
            }

            for part in line.split(',').map(str::trim).filter(|p| !p.is_empty()) {
                events.push(self.parse_one(part)?);
            }
        }

        Ok(events)
    }

    /// Parses a one-line, comma-separated event list (as given on the
    /// command line). Every comma separates events.
    pub fn parse_inline(&self, input: &str) -> Result<Vec<Event>> {
        input
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|p| self.parse_one(p))
            .collect()
    }

    /// Parses a single event string.
    pub fn parse_one(&self, input: &str) -> Result<Event> {
        let input = input.trim();

        let Some((event_type, value)) = input.split_once(':') else {
            return Err(SimError::config(format!(
                "Invalid event syntax: '{input}'. Expected format: type:value"
            )));
        };

        match event_type.trim().to_ascii_lowercase().as_str() {
            "key" => self.parse_key(value.trim()),
            "type" => Ok(Event::Type(value.trim_start().to_string())),
            "line" => Ok(Event::Line(value.trim_start().to_string())),
            "wait" => self.parse_wait(value.trim()),
            "resize" => self.parse_resize(value.trim()),
            "snapshot" => Ok(Event::Snapshot(value.trim().to_string())),
            "assert" => self.parse_assert(value.trim()),
            other => Err(SimError::config(format!(
                "Unknown event type: '{other}'. Valid types: key, type, line, wait, resize, snapshot, assert"
            ))),
        }
    }

    /// Parses a key event like "enter", "ctrl+l", "pageup".
    fn parse_key(&self, value: &str) -> Result<Event> {
        let (mods, key) = match value.rsplit_once('+') {
            Some((mods, key)) if !key.is_empty() => (mods, key),
            _ => ("", value),
        };

        let mut modifiers = KeyModifiers::empty();
        for part in mods.split('+').filter(|p| !p.is_empty()) {
            modifiers |= match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => KeyModifiers::CONTROL,
                "alt" => KeyModifiers::ALT,
                "shift" => KeyModifiers::SHIFT,
                _ => {
                    return Err(SimError::config(format!(
                        "Unknown modifier: '{part}'. Valid modifiers: ctrl, alt, shift"
                    )));
                }
            };
        }

        Ok(Event::Key(KeyEvent::new(
            self.parse_key_code(key)?,
            modifiers,
        )))
    }

    fn parse_key_code(&self, s: &str) -> Result<KeyCode> {
        let code = match s.to_ascii_lowercase().as_str() {
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backspace" | "bs" => KeyCode::Backspace,
            "delete" | "del" => KeyCode::Delete,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" | "pgup" => KeyCode::PageUp,
            "pagedown" | "pgdn" => KeyCode::PageDown,
            "space" => KeyCode::Char(' '),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => {
                        return Err(SimError::config(format!(
                            "Unknown key: '{s}'. Use single characters or named keys like enter, up, pageup"
                        )));
                    }
                }
            }
        };
        Ok(code)
    }

    /// Parses a wait duration like "100ms", "2s", or "100" (milliseconds).
    fn parse_wait(&self, value: &str) -> Result<Event> {
        let value = value.to_ascii_lowercase();
        let invalid = || SimError::config(format!("Invalid duration: '{value}'"));

        let duration = if let Some(ms) = value.strip_suffix("ms") {
            Duration::from_millis(ms.parse().map_err(|_| invalid())?)
        } else if let Some(secs) = value.strip_suffix('s') {
            Duration::from_secs(secs.parse().map_err(|_| invalid())?)
        } else {
            Duration::from_millis(value.parse().map_err(|_| invalid())?)
        };

        Ok(Event::Wait(duration))
    }

    /// Parses a resize event like "120x40".
    fn parse_resize(&self, value: &str) -> Result<Event> {
        let (width, height) = parse_size(value)?;
        Ok(Event::Resize(width, height))
    }

    /// Parses an assertion like "contains:Router#" or "state:mode=global-config".
    fn parse_assert(&self, value: &str) -> Result<Event> {
        let Some((kind, rest)) = value.split_once(':') else {
            return Err(SimError::config(format!(
                "Invalid assertion syntax: '{value}'. Expected assert:type:value"
            )));
        };

        let rest = rest.trim().to_string();
        let assertion = match kind.trim().to_ascii_lowercase().as_str() {
            "contains" => Assertion::Contains(rest),
            "contains-exact" => Assertion::ContainsExact(rest),
            "not-contains" => Assertion::NotContains(rest),
            "matches" => {
                regex::Regex::new(&rest).map_err(|e| {
                    SimError::config(format!("Invalid regex in assertion '{rest}': {e}"))
                })?;
                Assertion::Matches(rest)
            }
            "state" => self.parse_state_assertion(&rest)?,
            other => {
                return Err(SimError::config(format!(
                    "Unknown assertion type: '{other}'. Valid types: contains, contains-exact, not-contains, matches, state"
                )));
            }
        };

        Ok(Event::Assert(assertion))
    }

    /// Parses a state assertion like "mode=user-exec" or "route_count>=1".
    fn parse_state_assertion(&self, value: &str) -> Result<Assertion> {
        for op in [">=", "<=", ">", "<", "="] {
            if let Some((field, expected)) = value.split_once(op) {
                let field = field.trim().to_string();
                let expected = expected.trim().to_string();
                return Ok(if op == "=" {
                    Assertion::StateEquals {
                        field,
                        value: expected,
                    }
                } else {
                    Assertion::StateCompare {
                        field,
                        op: op.to_string(),
                        value: expected,
                    }
                });
            }
        }

        Err(SimError::config(format!(
            "Invalid state assertion: '{value}'. Expected field=value or field>=value"
        )))
    }
}

/// Parses a `WIDTHxHEIGHT` size.
pub fn parse_size(value: &str) -> Result<(u16, u16)> {
    let Some((w, h)) = value.split_once('x') else {
        return Err(SimError::config(format!(
            "Invalid size format: '{value}'. Expected WIDTHxHEIGHT (e.g., 100x30)"
        )));
    };
    let width = w
        .parse()
        .map_err(|_| SimError::config(format!("Invalid width: '{w}'")))?;
    let height = h
        .parse()
        .map_err(|_| SimError::config(format!("Invalid height: '{h}'")))?;
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_parse_key_enter() {
        let event = EventParser::new().parse_one("key:enter").unwrap();
        assert!(matches!(
            event,
            Event::Key(KeyEvent { code: KeyCode::Enter, modifiers, .. }) if modifiers.is_empty()
        ));
    }

    #[test]
    fn test_parse_key_with_modifier() {
        let event = EventParser::new().parse_one("key:ctrl+l").unwrap();
        match event {
            Event::Key(key) => {
                assert_eq!(key.code, KeyCode::Char('l'));
                assert!(key.modifiers.contains(KeyModifiers::CONTROL));
            }
            _ => panic!("Expected Key event"),
        }
    }

    #[test]
    fn test_parse_plus_key() {
        let event = EventParser::new().parse_one("key:+").unwrap();
        assert!(matches!(event, Event::Key(k) if k.code == KeyCode::Char('+')));
    }

    #[test]
    fn test_parse_line_keeps_spacing() {
        let event = EventParser::new()
            .parse_one("line:description  LAN, piso 2")
            .unwrap();
        assert!(matches!(event, Event::Line(t) if t == "description  LAN, piso 2"));
    }

    #[test]
    fn test_parse_wait_units() {
        let parser = EventParser::new();
        assert!(matches!(parser.parse_one("wait:100ms").unwrap(), Event::Wait(d) if d == Duration::from_millis(100)));
        assert!(matches!(parser.parse_one("wait:2s").unwrap(), Event::Wait(d) if d == Duration::from_secs(2)));
        assert!(matches!(parser.parse_one("wait:5").unwrap(), Event::Wait(d) if d == Duration::from_millis(5)));
    }

    #[test]
    fn test_parse_resize() {
        let event = EventParser::new().parse_one("resize:120x40").unwrap();
        assert!(matches!(event, Event::Resize(120, 40)));
        assert!(EventParser::new().parse_one("resize:120").is_err());
    }

    #[test]
    fn test_parse_comma_separated() {
        let events = EventParser::new()
            .parse_all("key:e,key:n,key:enter,wait:10")
            .unwrap();
        assert_eq!(events.len(), 4);
    }

    #[test]
    fn test_parse_inline_splits_text_events() {
        let events = EventParser::new()
            .parse_inline("line:enable, line:configure terminal,assert:state:mode=global-config")
            .unwrap();
        assert_eq!(events.len(), 3);
        assert!(matches!(&events[1], Event::Line(t) if t == "configure terminal"));
    }

    #[test]
    fn test_text_lines_are_not_split() {
        let script = r#"
# enter privileged mode
line:enable
assert:contains:Router#
key:pageup, key:pagedown
"#;
        let events = EventParser::new().parse_all(script).unwrap();
        assert_eq!(events.len(), 4);
        assert!(matches!(&events[0], Event::Line(t) if t == "enable"));
    }

    #[test]
    fn test_parse_assert_state() {
        let event = EventParser::new()
            .parse_one("assert:state:mode=global-config")
            .unwrap();
        assert!(matches!(
            event,
            Event::Assert(Assertion::StateEquals { field, value })
                if field == "mode" && value == "global-config"
        ));
    }

    #[test]
    fn test_parse_assert_state_compare() {
        let event = EventParser::new()
            .parse_one("assert:state:route_count>=1")
            .unwrap();
        assert!(matches!(
            event,
            Event::Assert(Assertion::StateCompare { field, op, value })
                if field == "route_count" && op == ">=" && value == "1"
        ));
    }

    #[test]
    fn test_parse_invalid_regex_rejected() {
        assert!(EventParser::new().parse_one("assert:matches:([").is_err());
    }

    #[test]
    fn test_parse_invalid_event() {
        let parser = EventParser::new();
        assert!(parser.parse_one("invalid:event").is_err());
        assert!(parser.parse_one("no_colon").is_err());
        assert!(parser.parse_one("key:hyper+x").is_err());
    }

    #[test]
    fn test_event_display_round_trips_key() {
        let event = EventParser::new().parse_one("key:ctrl+c").unwrap();
        assert_eq!(event.to_string(), "key:ctrl+c");
    }

    #[test]
    fn test_state_fields() {
        let mut app = App::new(&Config::default());
        app.input.set("enable");
        app.submit();
        assert_eq!(state_field(&app, "mode").as_deref(), Some("privileged-exec"));
        assert_eq!(state_field(&app, "prompt").as_deref(), Some("Router#"));
        assert_eq!(state_field(&app, "interface").as_deref(), Some(""));
        assert_eq!(state_field(&app, "route_count").as_deref(), Some("0"));
        assert_eq!(state_field(&app, "nonsense"), None);
    }

    #[test]
    fn test_interface_state_fields() {
        let mut app = App::new(&Config::default());
        for line in [
            "enable",
            "configure terminal",
            "interface g0/1",
            "ip address 10.0.12.2 255.255.255.252",
            "ip access-group 110 out",
            "no shutdown",
        ] {
            app.input.set(line);
            app.submit();
        }

        assert_eq!(
            state_field(&app, "g0/1.address").as_deref(),
            Some("10.0.12.2 255.255.255.252")
        );
        assert_eq!(state_field(&app, "GigabitEthernet0/1.status").as_deref(), Some("up"));
        assert_eq!(state_field(&app, "g0/1.acl_out").as_deref(), Some("110"));
        assert_eq!(state_field(&app, "g0/1.acl_in").as_deref(), Some(""));
        assert_eq!(state_field(&app, "g0/0.address").as_deref(), Some("unassigned"));
        assert_eq!(state_field(&app, "g0/0.status").as_deref(), Some("down"));
        assert_eq!(state_field(&app, "g0/9.status"), None);
        assert_eq!(state_field(&app, "g0/1.speed"), None);
    }
}
