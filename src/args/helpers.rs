use clap::ArgMatches;
use std::path::PathBuf;

pub fn parse_string(matches: &ArgMatches, name: &str) -> Option<String> {
    matches.value_of(name).map(|s| s.into())
}

pub fn parse_strings(matches: &ArgMatches, name: &str) -> Option<Vec<String>> {
    match matches.values_of(name) {
        None => None,
        Some(values) => {
            if values.len() == 0 {
                return None;
            }
            return Some(values.into_iter().map(|s| s.to_string()).collect());
        }
    }
}

pub fn parse_path(matches: &ArgMatches, name: &str) -> Option<PathBuf> {
    matches.value_of_os(name).map(PathBuf::from)
}
