/// A structural construct that must be explicitly opened and closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstructKind {
    /// `(` … `)`, also `(?:` … `)`
    Group,
    /// `(?=` … `)` or `(?!` … `)`
    LookAhead,
}

impl ConstructKind {
    /// Message used when a close is attempted without a matching open.
    pub fn begin_missing(self) -> &'static str {
        match self {
            Self::Group => "Cannot close group: you must open a group before closing it",
            Self::LookAhead => {
                "Cannot close look ahead: you must open a look ahead before closing it"
            }
        }
    }

    /// Message used when the pattern is finished with this construct still open.
    pub fn end_missing(self) -> &'static str {
        match self {
            Self::Group => "Unclosed group: you must close the group before finishing the pattern",
            Self::LookAhead => {
                "Unclosed look ahead: you must close the look ahead before finishing the pattern"
            }
        }
    }
}
