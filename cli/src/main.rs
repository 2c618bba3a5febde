use anyhow::Error;
use clap::{error::ErrorKind, Parser};
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::exit;

/// The marker printed when the command runs successfully.
const READY: &str = "go";

/// Inference server for ONNX models
#[derive(Clone, Debug, Parser)]
#[clap(
    name = "tensorcraft",
    disable_version_flag = true,
    override_usage = "tensorcraft [OPTIONS] COMMAND [ARG...]"
)]
struct Options {
    /// Trailing arguments, accepted and ignored.
    #[clap(hide = true)]
    args: Vec<String>,
}

impl Options {
    fn run(&self, out: &mut impl Write) -> Result<(), Error> {
        tracing::debug!("running default command, ignoring {:?}", self.args);
        writeln!(out, "{READY}")?;
        Ok(())
    }
}

/// Parse `args` and run the command, writing its output to `out`.
fn execute<I, T>(args: I, out: &mut impl Write) -> Result<(), Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let opt = match Options::try_parse_from(args) {
        Ok(opt) => opt,
        Err(err) if err.kind() == ErrorKind::DisplayHelp => {
            write!(out, "{err}")?;
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };
    opt.run(out)
}

fn main() {
    model::init_logging();
    if let Err(err) = execute(std::env::args_os(), &mut io::stdout()) {
        tracing::debug!("command failed: {err:#}");
        println!("{err}");
        exit(1);
    }
}
