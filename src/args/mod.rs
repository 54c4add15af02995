mod helpers;

use clap::{App, AppSettings, Arg, ArgMatches};
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

#[cfg(feature = "etc-udhcpc")]
pub const DEFAULT_CONFIG_FILE: &str = "/etc/udhcpc.vendor_specific";
#[cfg(not(feature = "etc-udhcpc"))]
pub const DEFAULT_CONFIG_FILE: &str = "/opt/persistent/udhcpc/wan.option43";

pub const DEFAULT_CLIENT: &str = "udhcpc";

// Wrapper options are long only and prefixed, every other argument belongs
// to udhcpc (which uses -h, -V and friends).
fn args() -> App<'static, 'static> {
    App::new(env!("CARGO_PKG_NAME"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage("udhcpc-opt43 [--opt43-* options] [udhcpc options]...")
        .after_help(
            "Reads the vendor specific suboptions file and then executes \
             udhcpc with the -x option filled with the converted data. Any \
             other command line option is passed directly to udhcpc.\n\
             \n\
             Each line of the file declaring a suboption has the form\n    \
             SUBOPTION <number> <value>",
        )
        .setting(AppSettings::DisableHelpFlags)
        .setting(AppSettings::DisableVersion)
        .setting(AppSettings::TrailingVarArg)
        .setting(AppSettings::AllowLeadingHyphen)
        .arg(
            Arg::with_name("file")
                .long("opt43-file")
                .takes_value(true)
                .value_name("path")
                .default_value(DEFAULT_CONFIG_FILE)
                .help("File with the suboptions"),
        )
        .arg(
            Arg::with_name("client")
                .long("opt43-client")
                .takes_value(true)
                .value_name("program")
                .default_value(DEFAULT_CLIENT)
                .help("DHCP client to execute"),
        )
        .arg(
            Arg::with_name("dry-run")
                .long("opt43-dry-run")
                .help("Print the udhcpc command without executing it"),
        )
        .arg(
            Arg::with_name("verbosity")
                .long("opt43-verbose")
                .multiple(true)
                .help("Increase message verbosity"),
        )
        .arg(
            Arg::with_name("show-help")
                .long("opt43-help")
                .help("Print this help"),
        )
        .arg(
            Arg::with_name("client-args")
                .takes_value(true)
                .value_name("udhcpc options")
                .multiple(true)
                .help("Arguments passed as they are to udhcpc"),
        )
}

pub fn print_help() {
    if args().print_help().is_ok() {
        println!();
    }
}

pub struct Arguments {
    pub config_file: PathBuf,
    pub client: String,
    pub client_args: Vec<String>,
    pub dry_run: bool,
    pub help: bool,
    pub verbosity: usize,
}

impl<'a> Arguments {
    pub fn parse_args() -> Self {
        return Self::parse_from(env::args_os()).unwrap_or_else(|e| e.exit());
    }

    pub fn parse_from<I, T>(itr: I) -> clap::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = args().get_matches_from_safe(itr)?;
        return Ok(Self::parse(&matches));
    }

    pub fn parse(matches: &'a ArgMatches) -> Arguments {
        Self {
            config_file: helpers::parse_path(matches, "file")
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE)),
            client: helpers::parse_string(matches, "client")
                .unwrap_or_else(|| DEFAULT_CLIENT.to_string()),
            client_args: helpers::parse_strings(matches, "client-args")
                .unwrap_or(Vec::new()),
            dry_run: matches.is_present("dry-run"),
            help: matches.is_present("show-help"),
            verbosity: matches.occurrences_of("verbosity") as usize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Arguments {
        let mut full = vec!["udhcpc-opt43"];
        full.extend(argv);
        Arguments::parse_from(full).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert_eq!(args.config_file, PathBuf::from(DEFAULT_CONFIG_FILE));
        assert_eq!(args.client, "udhcpc");
        assert!(args.client_args.is_empty());
        assert!(!args.dry_run);
        assert!(!args.help);
        assert_eq!(args.verbosity, 0);
    }

    #[test]
    fn test_client_args_forwarded() {
        let argv = [
            "-i",
            "erouter0",
            "-p",
            "/tmp/udhcpc.pid",
            "-s",
            "/etc/udhcpc.script",
        ];
        let args = parse(&argv);
        assert_eq!(args.client_args, argv.to_vec());
    }

    #[test]
    fn test_client_help_and_version_flags_forwarded() {
        let args = parse(&["-h", "myhost", "-V", "vendor"]);
        assert!(!args.help);
        assert_eq!(args.client_args, vec!["-h", "myhost", "-V", "vendor"]);
    }

    #[test]
    fn test_wrapper_options() {
        let args = parse(&[
            "--opt43-file",
            "/tmp/opt43",
            "--opt43-client",
            "/sbin/udhcpc",
            "--opt43-dry-run",
            "--opt43-verbose",
            "--opt43-verbose",
            "-i",
            "eth0",
        ]);
        assert_eq!(args.config_file, PathBuf::from("/tmp/opt43"));
        assert_eq!(args.client, "/sbin/udhcpc");
        assert!(args.dry_run);
        assert_eq!(args.verbosity, 2);
        assert_eq!(args.client_args, vec!["-i", "eth0"]);
    }

    #[test]
    fn test_wrapper_options_after_client_args_are_forwarded() {
        let args = parse(&["-i", "eth0", "--opt43-dry-run"]);
        assert!(!args.dry_run);
        assert_eq!(args.client_args, vec!["-i", "eth0", "--opt43-dry-run"]);
    }

    #[test]
    fn test_help() {
        assert!(parse(&["--opt43-help"]).help);
    }
}
