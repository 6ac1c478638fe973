//! External command execution, rooted at the project directory.

use std::env;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::{Context, Result, bail};

use crate::constants::PROJECT_MARKER;

/// Seam between slides and the operating system. Slides only need the
/// two shapes the talk uses: stream a command's stdout live, or capture
/// it whole.
pub trait CommandRunner {
    /// Run `program` with a single space-separated argument string,
    /// feeding each stdout line to `on_line` as it is produced. Returns
    /// only once the child has fully exited.
    fn stream(
        &mut self,
        program: &str,
        arguments: &str,
        on_line: &mut dyn FnMut(&str) -> Result<()>,
    ) -> Result<()>;

    /// Run `program` and return its complete stdout.
    fn capture(&mut self, program: &str, arguments: &str) -> Result<String>;
}

/// Spawns real processes with the project root as working directory,
/// stdout piped back and stderr left on the terminal.
pub struct ShellRunner;

impl ShellRunner {
    fn command(program: &str, arguments: &str) -> Result<Command> {
        let root = find_project_root()?;
        let mut cmd = Command::new(program);
        cmd.args(arguments.split_whitespace())
            .current_dir(root)
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());
        Ok(cmd)
    }
}

impl CommandRunner for ShellRunner {
    fn stream(
        &mut self,
        program: &str,
        arguments: &str,
        on_line: &mut dyn FnMut(&str) -> Result<()>,
    ) -> Result<()> {
        log::debug!("spawning: {program} {arguments}");
        let mut child = Self::command(program, arguments)?
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        let stdout = child.stdout.take().context("child stdout not piped")?;
        for line in BufReader::new(stdout).lines() {
            let line = line.with_context(|| format!("reading output of {program}"))?;
            on_line(&line)?;
        }

        let status = child.wait().with_context(|| format!("waiting for {program}"))?;
        if !status.success() {
            log::debug!("{program} exited with {status}");
        }
        Ok(())
    }

    fn capture(&mut self, program: &str, arguments: &str) -> Result<String> {
        log::debug!("capturing: {program} {arguments}");
        let output = Self::command(program, arguments)?
            .output()
            .with_context(|| format!("failed to spawn {program}"))?;
        if !output.status.success() {
            log::debug!("{program} exited with {}", output.status);
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Walk up from the working directory until a directory carrying the
/// project marker file is found.
pub fn find_project_root() -> Result<PathBuf> {
    let start = env::current_dir().context("cannot determine the working directory")?;
    let mut dir = start.clone();
    loop {
        if dir.join(PROJECT_MARKER).is_file() {
            return Ok(dir);
        }
        if !dir.pop() {
            bail!("no {PROJECT_MARKER} found above {}", start.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_root_carries_the_marker() {
        let root = find_project_root().expect("tests run inside the project");
        assert!(root.join(PROJECT_MARKER).is_file());
    }
}
