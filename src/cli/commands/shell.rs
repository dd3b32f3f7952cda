//! Shell integration commands.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::KipError;

/// Generate a completion script for the given shell.
pub fn completions(shell: Shell) -> Result<String, KipError> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, name, &mut buf);

    String::from_utf8(buf).map_err(|e| KipError::Parse(format!("Invalid completion script: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completions_mention_subcommands() {
        let script = completions(Shell::Bash).unwrap();
        assert!(script.contains("kip"));
        assert!(script.contains("history"));
    }
}
