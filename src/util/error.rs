/// Error type for polyline-rs operations.
#[derive(Debug, PartialEq)]
pub enum PolylineError {
    /// A byte outside the printable encoding range was found while decoding.
    InvalidCharacter(char, usize),
    /// The string ended while a chunk sequence still had its continuation bit set.
    TruncatedScalar(usize),
    /// A chunk sequence ran past what a 64-bit delta can hold.
    ScalarOverflow(usize),
    /// The string ended after a latitude delta with no matching longitude delta.
    UnpairedCoordinate(usize),
    /// An encode input element did not match any recognized point shape.
    InvalidPointShape(String),
}

impl std::fmt::Display for PolylineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolylineError::InvalidCharacter(c, at) => {
                write!(f, "Invalid character {:?} at byte offset {}", c, at)
            }
            PolylineError::TruncatedScalar(at) => {
                write!(f, "Truncated scalar at byte offset {}", at)
            }
            PolylineError::ScalarOverflow(at) => {
                write!(f, "Scalar overflow at byte offset {}", at)
            }
            PolylineError::UnpairedCoordinate(at) => {
                write!(f, "Unpaired coordinate at byte offset {}", at)
            }
            PolylineError::InvalidPointShape(msg) => {
                write!(f, "Unrecognized point shape: {}", msg)
            }
        }
    }
}

impl std::error::Error for PolylineError {}
