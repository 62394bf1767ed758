// workflow.rs — Reporter speaking the Actions runner protocol.
//
// Log lines and failures are workflow commands on the step's stdout
// (`::error::message`). Outputs are appended to the file named by
// GITHUB_OUTPUT using a heredoc with a random delimiter; without that file
// the legacy `::set-output` command is used.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::{ActionError, Result};
use crate::reporter::Reporter;

/// Env var holding the path of the step output file.
pub const OUTPUT_FILE_VAR: &str = "GITHUB_OUTPUT";

/// Reporter that writes workflow commands to `out`.
pub struct WorkflowReporter<W: Write> {
    out: W,
    output_file: Option<PathBuf>,
    failed: bool,
}

impl<W: Write> WorkflowReporter<W> {
    pub fn new(out: W, output_file: Option<PathBuf>) -> Self {
        Self {
            out,
            output_file,
            failed: false,
        }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write `::command prop=value,...::message`.
    fn issue(&mut self, command: &str, properties: &[(&str, &str)], message: &str) -> Result<()> {
        let mut line = format!("::{}", command);
        if !properties.is_empty() {
            let props: Vec<String> = properties
                .iter()
                .map(|(key, value)| format!("{}={}", key, escape_property(value)))
                .collect();
            line.push(' ');
            line.push_str(&props.join(","));
        }
        line.push_str("::");
        line.push_str(&escape_data(message));
        writeln!(self.out, "{}", line)?;
        Ok(())
    }
}

impl<W: Write> Reporter for WorkflowReporter<W> {
    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        tracing::debug!(name, value, "setting step output");
        if let Some(path) = self.output_file.clone() {
            return append_output_file(&path, name, value);
        }
        self.issue("set-output", &[("name", name)], value)
    }

    fn info(&mut self, message: &str) -> Result<()> {
        // Untrusted text (a PR title) must not be read as a workflow command.
        if !contains_command(message) {
            writeln!(self.out, "{}", message)?;
            return Ok(());
        }
        let token = Uuid::new_v4().simple().to_string();
        writeln!(self.out, "::stop-commands::{}", token)?;
        writeln!(self.out, "{}", message)?;
        writeln!(self.out, "::{}::", token)?;
        Ok(())
    }

    fn error(&mut self, message: &str) -> Result<()> {
        self.issue("error", &[], message)
    }

    fn set_failed(&mut self, message: &str) -> Result<()> {
        self.failed = true;
        self.error(message)
    }

    fn failed(&self) -> bool {
        self.failed
    }
}

/// Whether any line of `message` would be parsed as a workflow command.
fn contains_command(message: &str) -> bool {
    message
        .split(['\n', '\r'])
        .any(|line| line.trim_start().starts_with("::"))
}

/// Append one output entry to the `GITHUB_OUTPUT` file.
fn append_output_file(path: &Path, name: &str, value: &str) -> Result<()> {
    let entry = heredoc_entry(name, value, &format!("ghadelimiter_{}", Uuid::new_v4()))?;
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| ActionError::OutputWrite {
            path: path.to_path_buf(),
            source,
        })?;
    file.write_all(entry.as_bytes())
        .map_err(|source| ActionError::OutputWrite {
            path: path.to_path_buf(),
            source,
        })
}

/// Escape the message part of a workflow command.
pub fn escape_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a property value of a workflow command.
pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

/// Format one `name<<delimiter` entry for a file command.
fn heredoc_entry(name: &str, value: &str, delimiter: &str) -> Result<String> {
    if name.contains(delimiter) {
        return Err(ActionError::DelimiterCollision {
            field: "name",
            delimiter: delimiter.to_string(),
        });
    }
    if value.contains(delimiter) {
        return Err(ActionError::DelimiterCollision {
            field: "value",
            delimiter: delimiter.to_string(),
        });
    }
    Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
}
