use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use crate::process::{run_with_timeout, ProcessError};
use crate::{ConversionError, ToolkitConfig};

/// Existence check for the toolkit binary. No side effects.
pub fn is_toolkit_present(path: &Path) -> bool {
    path.is_file()
}

/// Verify-and-extract of a DER envelope, without chain verification.
pub fn smime_args(input: &Path, output: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = ["smime", "-verify", "-noverify", "-binary", "-inform", "DER"]
        .iter()
        .map(OsString::from)
        .collect();
    args.push("-in".into());
    args.push(input.as_os_str().to_owned());
    args.push("-out".into());
    args.push(output.as_os_str().to_owned());
    args
}

/// Extracts the signed payload of `input` into `output`.
pub trait ToolkitRunner: Send + Sync {
    fn extract(&self, input: &Path, output: &Path) -> Result<(), ConversionError>;
}

#[derive(Debug, Clone)]
pub struct OpensslRunner {
    config: ToolkitConfig,
}

impl OpensslRunner {
    pub fn new(config: ToolkitConfig) -> Self {
        Self { config }
    }
}

impl ToolkitRunner for OpensslRunner {
    fn extract(&self, input: &Path, output: &Path) -> Result<(), ConversionError> {
        let mut command = Command::new(&self.config.path);
        command.args(smime_args(input, output));
        hide_console(&mut command);

        match run_with_timeout(command, Some(self.config.timeout)) {
            Ok(result) if result.status.success() => Ok(()),
            Ok(result) => Err(ConversionError::Toolkit {
                stderr: result.stderr.trim().to_string(),
            }),
            Err(ProcessError::TimedOut(_)) => Err(ConversionError::TimedOut),
            Err(err) => Err(ConversionError::Unexpected(err.to_string())),
        }
    }
}

#[cfg(windows)]
pub(crate) fn hide_console(command: &mut Command) {
    use std::os::windows::process::CommandExt;
    const CREATE_NO_WINDOW: u32 = 0x0800_0000;
    command.creation_flags(CREATE_NO_WINDOW);
}

#[cfg(not(windows))]
pub(crate) fn hide_console(_command: &mut Command) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smime_arguments_match_toolkit_contract() {
        let args = smime_args(Path::new("in.p7m"), Path::new("out.pdf"));
        let args: Vec<_> = args.iter().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(
            args,
            vec![
                "smime", "-verify", "-noverify", "-binary", "-inform", "DER", "-in", "in.p7m",
                "-out", "out.pdf"
            ]
        );
    }

    #[test]
    fn missing_binary_is_not_present() {
        assert!(!is_toolkit_present(Path::new("/definitely/not/here/openssl")));
    }
}
