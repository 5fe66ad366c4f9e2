//! Batch mode.
//!
//! Feeds every line of a file (or stdin) to a single session and prints the
//! resulting transcript, as if the lines had been typed at the console.

use crate::config::Config;
use crate::error::{Result, SimError};
use crate::presenter::Transcript;
use crate::simulator::Simulator;
use std::io::Read;
use tracing::info;

/// Runs `input` line by line through one fresh session.
pub fn run_batch_str(input: &str, config: &Config) -> Transcript {
    let mut simulator = Simulator::from_config(config);
    let mut transcript = Transcript::new(simulator.prompt(), config.presenter.transcript_limit);

    for line in input.lines() {
        let response = simulator.execute(line);
        transcript.record(line, &response);
    }

    transcript
}

/// Reads the batch input from `path`, or stdin when `path` is `-`.
pub fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| SimError::io(format!("Failed to read stdin: {e}")))?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| SimError::io(format!("Failed to read batch file {path}: {e}")))
    }
}

/// Runs batch mode and prints the transcript to stdout.
pub fn run(path: &str, config: &Config) -> Result<()> {
    let input = read_input(path)?;
    let transcript = run_batch_str(&input, config);
    info!(lines = input.lines().count(), "Batch run complete");
    println!("{}", transcript.to_text());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_batch_transcript() {
        let transcript = run_batch_str(
            "enable\nconfigure terminal\nhostname R1\nend\n",
            &Config::default(),
        );
        assert_eq!(
            transcript.lines(),
            &[
                "Router> enable",
                "Router# configure terminal",
                "Router(config)# hostname R1",
                "R1(config)# end",
                "R1#",
            ]
        );
    }

    #[test]
    fn test_batch_blank_lines_reprompt() {
        let transcript = run_batch_str("\nenable\n", &Config::default());
        assert_eq!(transcript.lines(), &["Router>", "Router> enable", "Router#"]);
    }

    #[test]
    fn test_batch_errors_are_inline() {
        let transcript = run_batch_str("show ip route\n", &Config::default());
        assert_eq!(
            transcript.lines(),
            &[
                "Router> show ip route",
                "% Invalid input detected at '^' marker.",
                "Router>"
            ]
        );
    }

    #[test]
    fn test_read_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "enable").unwrap();
        assert_eq!(read_input(file.path().to_str().unwrap()).unwrap(), "enable\n");
    }

    #[test]
    fn test_read_input_missing_file() {
        let err = read_input("/nonexistent/routerlab/batch.txt").unwrap_err();
        assert_eq!(err.category(), "I/O Error");
    }
}
