mod args;
mod launch;
mod opt43;

use crate::args::Arguments;
use log::error;
use std::process;

pub fn init_log(verbosity: usize) {
    stderrlog::new()
        .module(module_path!())
        .verbosity(verbosity + 1)
        .init()
        .unwrap();
}

fn main() {
    let args = Arguments::parse_args();
    init_log(args.verbosity);

    if args.help {
        args::print_help();
        return;
    }

    if let Err(err) = launch::main(args) {
        error!("{}", err);
        process::exit(err.exit_code());
    }
}
