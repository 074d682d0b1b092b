use std::{
    fmt::{self, Display},
    io::Write,
    process::{Command, Stdio},
    str::FromStr,
};

use crate::error::Error;

const FLUTTER: &str = "flutter";
const TARGET_FILE: &str = "lib/main.dart";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Android,
    Ios,
}

impl Platform {
    /// Artifact passed to `flutter build`.
    pub fn artifact(&self) -> &'static str {
        match self {
            Platform::Android => "apk",
            Platform::Ios => "ios",
        }
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "android" => Ok(Platform::Android),
            "ios" => Ok(Platform::Ios),
            other => Err(Error::UnsupportedPlatform(other.to_string())),
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    pub flavor: String,
    pub platform: Platform,
    pub release: bool,
}

impl BuildRequest {
    pub fn mode_flag(&self) -> &'static str {
        if self.release {
            "--release"
        } else {
            "--debug"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine(Vec<String>);

impl CommandLine {
    pub fn program(&self) -> &str {
        &self.0[0]
    }

    pub fn args(&self) -> &[String] {
        &self.0[1..]
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }
}

impl Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

pub fn compose(request: &BuildRequest) -> CommandLine {
    let tokens = vec![
        FLUTTER.to_string(),
        "build".to_string(),
        request.platform.artifact().to_string(),
        "--flavor".to_string(),
        request.flavor.clone(),
        "-t".to_string(),
        TARGET_FILE.to_string(),
        format!("--dart-define=ENV={}", request.flavor),
        request.mode_flag().to_string(),
    ];
    CommandLine(tokens)
}

/// Executes a composed command line and reports the child's exit code.
///
/// `None` means the child did not exit normally (e.g. it was killed by a
/// signal).
pub trait Runner {
    fn execute(&mut self, command: &CommandLine) -> Result<Option<i32>, Error>;
}

/// Runs the command as a blocking child process with inherited stdio.
pub struct FlutterRunner;

impl Runner for FlutterRunner {
    fn execute(&mut self, command: &CommandLine) -> Result<Option<i32>, Error> {
        let status = Command::new(command.program())
            .args(command.args())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| Error::Spawn {
                program: command.program().to_string(),
                source,
            })?;

        log::debug!("`{}` exited with {}", command.program(), status);
        Ok(status.code())
    }
}

pub fn run_build<R, W>(request: &BuildRequest, runner: &mut R, out: &mut W) -> Result<(), Error>
where
    R: Runner + ?Sized,
    W: Write + ?Sized,
{
    let command = compose(request);

    write_line(out, format_args!("🚀 Build command: {}", command))?;
    // The child shares our stdout, so the echo has to land first.
    out.flush().map_err(Error::Output)?;

    match runner.execute(&command)? {
        Some(0) => {
            write_line(
                out,
                format_args!(
                    "✅ Build finished: platform = {}, flavor = {}",
                    request.platform, request.flavor
                ),
            )?;
            Ok(())
        }
        Some(code) => Err(Error::ToolFailed { code }),
        None => {
            log::warn!("`{}` was terminated without an exit code", command.program());
            Err(Error::ToolFailed { code: 1 })
        }
    }
}

fn write_line<W: Write + ?Sized>(out: &mut W, args: fmt::Arguments<'_>) -> Result<(), Error> {
    writeln!(out, "{}", args).map_err(Error::Output)
}
