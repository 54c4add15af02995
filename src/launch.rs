use crate::{
    args,
    opt43::{self, Option43Payload},
};
use log::{debug, info};
use std::fmt;
use std::io;
use std::process::{Command, ExitStatus};

/// Exit code for errors in the contents of the suboptions file.
pub const EXIT_SYNTAX_ERROR: i32 = 10;
/// Exit code when the DHCP client cannot be executed.
pub const EXIT_LAUNCH_FAILURE: i32 = 127;

#[derive(Debug)]
pub enum Error {
    Config(opt43::Error),
    Spawn { program: String, source: io::Error },
    ClientFailed(ExitStatus),
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(e) if e.is_syntax() => EXIT_SYNTAX_ERROR,
            Self::Config(_) => 1,
            Self::Spawn { .. } => EXIT_LAUNCH_FAILURE,
            Self::ClientFailed(status) => status.code().unwrap_or(1),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "{}", e),
            Self::Spawn { program, source } => {
                write!(f, "Unable to execute {}: {}", program, source)
            }
            Self::ClientFailed(status) => write!(f, "Client {}", status),
        }
    }
}

impl From<opt43::Error> for Error {
    fn from(e: opt43::Error) -> Self {
        Self::Config(e)
    }
}

/// The DHCP client invocation: the forwarded arguments followed by the
/// option 43 ones.
#[derive(PartialEq, Clone, Debug)]
pub struct ClientCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ClientCommand {
    pub fn compose(
        program: &str,
        forwarded: &[String],
        payload: Option<&Option43Payload>,
    ) -> Self {
        let mut args = forwarded.to_vec();

        match payload {
            Some(payload) if !payload.is_empty() => {
                args.extend(payload.client_args())
            }
            Some(_) => info!("No suboptions found. Opt43 not used."),
            None => {}
        }

        return Self {
            program: program.to_string(),
            args,
        };
    }

    /// Runs the client directly, without shell, and waits for it.
    pub fn run(&self) -> Result<ExitStatus, Error> {
        debug!("Executing {} with {:?}", self.program, self.args);
        return Command::new(&self.program)
            .args(&self.args)
            .status()
            .map_err(|source| Error::Spawn {
                program: self.program.clone(),
                source,
            });
    }
}

impl fmt::Display for ClientCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in self.args.iter() {
            write!(f, " {}", arg)?;
        }
        return Ok(());
    }
}

pub fn prepare(args: &args::Arguments) -> Result<ClientCommand, Error> {
    let payload = opt43::load(&args.config_file)?;

    return Ok(ClientCommand::compose(
        &args.client,
        &args.client_args,
        payload.as_ref(),
    ));
}

pub fn main(args: args::Arguments) -> Result<(), Error> {
    let command = prepare(&args)?;

    println!("{}", command);

    if args.dry_run {
        return Ok(());
    }

    let status = command.run()?;
    if !status.success() {
        return Err(Error::ClientFailed(status));
    }

    return Ok(());
}
