use std::fmt;

/// Logical stages in the article pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageKind {
    Outline,
    TalkingPoints,
    Composition,
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StageKind::Outline => "outline",
            StageKind::TalkingPoints => "talking-points",
            StageKind::Composition => "composition",
        };
        write!(f, "{label}")
    }
}
