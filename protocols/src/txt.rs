use std::string::FromUtf8Error;

/// A single TXT resource record, kept as the character strings it was sent as.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TxtRecord {
    strings: Vec<Vec<u8>>,
}

impl TxtRecord {
    pub fn new(strings: Vec<Vec<u8>>) -> Self {
        Self { strings }
    }

    /// A record holding `text` as its only character string.
    pub fn from_text(text: &str) -> Self {
        Self::new(vec![text.as_bytes().to_vec()])
    }

    pub fn strings(&self) -> &[Vec<u8>] {
        &self.strings
    }

    /// The record value: all character strings concatenated, decoded as UTF-8.
    pub fn value(&self) -> Result<String, FromUtf8Error> {
        String::from_utf8(self.strings.concat())
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
