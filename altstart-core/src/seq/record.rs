#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceRecord {
    pub header: Box<str>,
    pub sequence: Vec<u8>,
}

impl SequenceRecord {
    pub fn new(header: impl Into<Box<str>>, sequence: impl Into<Vec<u8>>) -> Self {
        Self {
            header: header.into(),
            sequence: sequence.into(),
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}
