//! The slide variants and how each one plays.

use std::io::Write;

use anyhow::{Context, Result, bail};

use crate::constants::{COMMAND_CLOSE, EXECUTION_SKIPPED, INSPECT_SKIPPED, PROMPT};
use crate::highlight;
use crate::runner::CommandRunner;
use crate::typing::Typist;

/// One unit of presentation content.
///
/// A slide knows how to render itself to the terminal; `jump` suppresses
/// the typing animation and any live command execution.
#[derive(Debug, Clone, PartialEq)]
pub enum Slide {
    /// Narration, typed out with emphasis markup.
    Text(String),
    /// A preformatted source block, shown instantly with highlighting.
    Code(String),
    /// A literal invocation, typed out and then executed live.
    Command { program: String, arguments: String },
    /// Ask the container runtime about the most recent container.
    Inspect,
}

impl Slide {
    pub fn text(message: &str) -> Self {
        Slide::Text(message.to_string())
    }

    pub fn code(source: &str) -> Self {
        Slide::Code(source.to_string())
    }

    pub fn command(program: &str, arguments: &str) -> Self {
        Slide::Command {
            program: program.to_string(),
            arguments: arguments.to_string(),
        }
    }

    pub fn inspect() -> Self {
        Slide::Inspect
    }

    pub fn play<W: Write>(
        &self,
        typist: &mut Typist<W>,
        runner: &mut dyn CommandRunner,
        jump: bool,
    ) -> Result<()> {
        match self {
            Slide::Text(message) => {
                typist.say(message, jump)?;
                typist.blank()?;
            }
            Slide::Code(source) => {
                highlight::print_block(typist.out_mut(), source)?;
            }
            Slide::Command { program, arguments } => {
                typist.say_plain(&format!("\n{PROMPT}{program} {arguments}"), jump)?;
                if jump {
                    typist.line(EXECUTION_SKIPPED)?;
                    return Ok(());
                }

                runner.stream(program, arguments, &mut |line| typist.line(line))?;
                typist.line(COMMAND_CLOSE)?;
                typist.blank()?;
            }
            Slide::Inspect => {
                if jump {
                    typist.line(INSPECT_SKIPPED)?;
                    return Ok(());
                }

                let listed = runner.capture("docker", "ps --latest --quiet")?;
                let container_id = listed.trim();
                if container_id.is_empty() {
                    bail!("no container to inspect");
                }

                let report = runner.capture("docker", &format!("inspect {container_id}"))?;
                let parsed: serde_json::Value = serde_json::from_str(&report)
                    .with_context(|| format!("unparseable inspect output for {container_id}"))?;
                let state = parsed
                    .get(0)
                    .and_then(|container| container.get("State"))
                    .with_context(|| format!("no State reported for {container_id}"))?;

                typist.line(&serde_json::to_string_pretty(state)?)?;
                typist.blank()?;
            }
        }
        Ok(())
    }
}
