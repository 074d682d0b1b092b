use std::io::{self, Write};

use gumdrop::{Options, ParsingStyle};

use crate::{
    cmd::{run_build, BuildRequest, Platform, Runner},
    error::Error,
};

#[derive(Debug, Options)]
pub struct Args {
    #[options(help = "show help information")]
    help: bool,

    #[options(meta = "NAME", help = "environment name, e.g. dev, prod, test")]
    flavor: Option<String>,

    #[options(meta = "NAME", help = "target platform: android or ios")]
    platform: Option<String>,

    #[options(help = "build in debug mode (default is release)")]
    debug: bool,
}

impl Args {
    fn into_request(self) -> Result<BuildRequest, Error> {
        let flavor = self.flavor.ok_or(Error::MissingArgument("flavor"))?;
        let platform = self
            .platform
            .ok_or(Error::MissingArgument("platform"))?
            .parse::<Platform>()?;

        if flavor.is_empty() {
            return Err(Error::EmptyFlavor);
        }

        Ok(BuildRequest {
            flavor,
            platform,
            release: !self.debug,
        })
    }
}

fn print_help<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "flutter-flavor -- build a Flutter app for one flavor")?;
    writeln!(out)?;
    writeln!(out, "Usage: flutter-flavor --flavor NAME --platform NAME [--debug]")?;
    writeln!(out)?;
    writeln!(out, "{}", Args::usage())?;
    Ok(())
}

fn parse_args(args: &[String]) -> Result<Args, Error> {
    Ok(Args::parse_args(args, ParsingStyle::AllOptions)?)
}

/// Parses `args` (without the program name), builds and runs the requested
/// Flutter build. Returns the process exit code.
pub(crate) fn run<R, W>(args: &[String], runner: &mut R, out: &mut W) -> i32
where
    R: Runner + ?Sized,
    W: Write + ?Sized,
{
    log::trace!("Args: {:?}", args);

    let args = match parse_args(args) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("flutter-flavor: {}", e);
            return e.exit_code();
        }
    };

    if args.help_requested() {
        return match print_help(out) {
            Ok(()) => 0,
            Err(e) => Error::Output(e).exit_code(),
        };
    }

    let request = match args.into_request() {
        Ok(v) => v,
        Err(e @ Error::UnsupportedPlatform(_)) => {
            log::debug!("{}", e);
            return match writeln!(out, "❌ {}", e) {
                Ok(()) => e.exit_code(),
                Err(e) => Error::Output(e).exit_code(),
            };
        }
        Err(e) => {
            eprintln!("flutter-flavor: {}", e);
            eprintln!("Try `flutter-flavor --help` for more information.");
            return e.exit_code();
        }
    };

    log::debug!("Request: {:?}", request);

    match run_build(&request, runner, out) {
        Ok(()) => 0,
        Err(e) => {
            log::error!("{}", e);
            e.exit_code()
        }
    }
}
