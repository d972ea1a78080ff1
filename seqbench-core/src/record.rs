//! Sequence Records

/// One named sequence read from the input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// First whitespace-delimited token of the header line
    pub id: String,
    /// Remainder of the header line (may be empty)
    pub description: String,
    /// Sequence symbols with line breaks and whitespace removed
    pub sequence: String,
}

impl Record {
    /// Create a record without a description
    pub fn new(id: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: String::new(),
            sequence: sequence.into(),
        }
    }

    /// Sequence length in characters
    pub fn len(&self) -> usize {
        self.sequence.chars().count()
    }

    /// Whether the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Single-sequence query in the form search tools read from stdin.
    ///
    /// The sequence is written on one line and the payload is newline-terminated.
    pub fn query_payload(&self) -> String {
        format!(">{}\n{}\n", self.id, self.sequence)
    }
}
