/// A source segment and its translation.
///
/// Segments are kept verbatim, including their line terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentPair {
    source: String,
    target: String,
}

impl SegmentPair {
    pub fn new(source: String, target: String) -> Self {
        Self { source, target }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl From<(&str, &str)> for SegmentPair {
    fn from((source, target): (&str, &str)) -> Self {
        Self::new(source.to_string(), target.to_string())
    }
}
