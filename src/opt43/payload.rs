use super::suboption::SubOption;
use std::fmt::{self, Display};

pub const VENDOR_SPECIFIC: u8 = 43;

/// Largest data of a DHCP option, limited by its length byte.
pub const MAX_OPTION_LEN: usize = 255;

/// The udhcpc flag to send an extra option.
pub const CLIENT_OPTION_FLAG: &str = "-x";

/// Vendor specific information (option 43) made of encapsulated
/// sub-options, in file order.
#[derive(PartialEq, Clone, Debug, Default)]
pub struct Option43Payload {
    pub suboptions: Vec<SubOption>,
}

impl Option43Payload {
    pub fn new() -> Self {
        return Self::default();
    }

    pub fn push(&mut self, suboption: SubOption) {
        self.suboptions.push(suboption);
    }

    pub fn is_empty(&self) -> bool {
        return self.suboptions.is_empty();
    }

    /// Number of bytes of the encoded option data.
    pub fn len(&self) -> usize {
        return self
            .suboptions
            .iter()
            .map(|sub| sub.value().len() + 2)
            .sum();
    }

    pub fn build(&self) -> Vec<u8> {
        let mut raw = Vec::with_capacity(self.len());
        for sub in self.suboptions.iter() {
            raw.extend(sub.build());
        }
        return raw;
    }

    /// Value given to udhcpc: `43:` followed by the option data as colon
    /// separated uppercase hex bytes.
    pub fn value(&self) -> String {
        let hex: Vec<String> =
            self.build().iter().map(|b| format!("{:02X}", b)).collect();

        return format!("{}:{}", VENDOR_SPECIFIC, hex.join(":"));
    }

    /// Arguments that make udhcpc send this option.
    pub fn client_args(&self) -> Vec<String> {
        return vec![CLIENT_OPTION_FLAG.to_string(), self.value()];
    }
}

impl Display for Option43Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", CLIENT_OPTION_FLAG, self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_suboption() {
        let mut payload = Option43Payload::new();
        payload.push(SubOption::new(1, b"AB").unwrap());

        assert_eq!(payload.len(), 4);
        assert_eq!(payload.value(), "43:01:02:41:42");
        assert_eq!(payload.to_string(), "-x 43:01:02:41:42");
        assert_eq!(
            payload.client_args(),
            vec!["-x".to_string(), "43:01:02:41:42".to_string()]
        );
    }

    #[test]
    fn test_multiple_suboptions() {
        let payload = Option43Payload {
            suboptions: vec![
                SubOption::new(1, b"A").unwrap(),
                SubOption::new(2, b"BC").unwrap(),
            ],
        };

        assert_eq!(payload.build(), vec![1, 1, 0x41, 2, 2, 0x42, 0x43]);
        assert_eq!(payload.to_string(), "-x 43:01:01:41:02:02:42:43");
    }

    #[test]
    fn test_large_numbers_in_hex() {
        let mut payload = Option43Payload::new();
        payload.push(SubOption::new(255, b"~").unwrap());
        payload.push(SubOption::new(10, b"").unwrap());

        assert_eq!(payload.value(), "43:FF:01:7E:0A:00");
    }

    #[test]
    fn test_empty_keeps_header() {
        let payload = Option43Payload::new();

        assert!(payload.is_empty());
        assert_eq!(payload.len(), 0);
        assert_eq!(payload.to_string(), "-x 43:");
    }
}
