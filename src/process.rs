//! Spawning the TypeScript language service (`bin/tss.js` under node)

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Hide the console window of the child process
#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Location of the language service script inside the plugin package
pub fn tss_path(package_dir: &Path) -> PathBuf {
    package_dir.join("bin").join("tss.js")
}

/// Apply the platform-specific process creation options.
///
/// On Windows stderr goes to the null device and no console window is
/// shown; other platforms spawn the process unchanged.
pub fn configure_command(command: &mut Command) -> &mut Command {
    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        command.stderr(Stdio::null()).creation_flags(CREATE_NO_WINDOW);
    }
    command
}

/// Command that starts the language service for `root_file`
pub fn tss_command(node: &str, package_dir: &Path, root_file: &str) -> Command {
    let tss = tss_path(package_dir);
    tracing::debug!(
        target: "process",
        "Building command: {} {} {}",
        node,
        tss.display(),
        root_file
    );

    let mut command = Command::new(node);
    command
        .arg(tss)
        .arg(root_file)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped());
    configure_command(&mut command);
    command
}

/// Bytes written to the language service's stdin for one message
pub fn encode(message: &str) -> Vec<u8> {
    message.as_bytes().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tss_path() {
        let path = tss_path(Path::new("/pkg/T3S"));
        assert_eq!(path, Path::new("/pkg/T3S/bin/tss.js"));
    }

    #[test]
    fn test_tss_command_args() {
        let command = tss_command("node", Path::new("/pkg"), "/proj/main.ts");
        assert_eq!(command.get_program(), "node");

        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args.len(), 2);
        assert_eq!(Path::new(args[0]), tss_path(Path::new("/pkg")));
        assert_eq!(args[1], "/proj/main.ts");
    }

    #[test]
    fn test_encode_utf8() {
        assert_eq!(encode("type 1 2 a.ts\n"), b"type 1 2 a.ts\n".to_vec());
        assert_eq!(encode("é"), vec![0xc3, 0xa9]);
    }
}
