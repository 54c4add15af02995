// Vendor specific information (DHCP option 43) read from a text file with
// one `SUBOPTION <number> <value>` declaration per line.

mod err;
mod payload;
mod reader;
mod suboption;

pub use err::Error;
pub use payload::{Option43Payload, MAX_OPTION_LEN};
pub use reader::{ConfigLine, LineReader};
pub use suboption::SubOption;

use log::{debug, info, warn};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// Builds the option from the sub-options found in `lines`. Lines without
/// sub-option are ignored.
pub fn encode<I>(lines: I) -> Result<Option43Payload, Error>
where
    I: IntoIterator<Item = io::Result<ConfigLine>>,
{
    let mut payload = Option43Payload::new();

    for line in lines {
        let line = line?;
        if line.is_empty() {
            continue;
        }

        if line.is_truncated() {
            warn!(
                "Line {} longer than {} bytes, truncated",
                line.number(),
                reader::MAX_LINE_LEN
            );
        }

        let sub = SubOption::parse(line.as_bytes()).map_err(|source| {
            Error::Syntax {
                line: line.number(),
                source,
            }
        })?;

        if let Some(sub) = sub {
            debug!(
                "Suboption {}: '{}'",
                sub.number(),
                String::from_utf8_lossy(sub.value())
            );
            payload.push(sub);
        }
    }

    if payload.len() > MAX_OPTION_LEN {
        return Err(Error::PayloadTooLong(payload.len()));
    }

    return Ok(payload);
}

/// Reads the sub-options file. A file that cannot be opened is not an
/// error, the option is just not used.
pub fn load(path: &Path) -> Result<Option<Option43Payload>, Error> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!("{} does not exist. Opt43 not used.", path.display());
            return Ok(None);
        }
        Err(e) => {
            warn!("Unable to open {}: {}. Opt43 not used.", path.display(), e);
            return Ok(None);
        }
    };

    let payload = encode(LineReader::new(BufReader::new(file)))?;
    info!(
        "{} suboptions read from {}",
        payload.suboptions.len(),
        path.display()
    );

    return Ok(Some(payload));
}
