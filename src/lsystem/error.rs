use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum LSystemError {
    MalformedRule(String),
    DuplicateKey(String),
    PopOnEmptyStack,
    NestedPolygon,
    DanglingPolygonEnd
}

impl fmt::Display for LSystemError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            &LSystemError::MalformedRule(ref rule) =>
                write!(f, "malformed rule '{}', expected exactly one '='", rule),
            &LSystemError::DuplicateKey(ref key) =>
                write!(f, "duplicate rule key '{}'", key),
            &LSystemError::PopOnEmptyStack =>
                write!(f, "turtle stack underflow: ')' with no matching '('"),
            &LSystemError::NestedPolygon =>
                write!(f, "'{{' while a polygon is already open"),
            &LSystemError::DanglingPolygonEnd =>
                write!(f, "'}}' with no open polygon")
        }
    }
}

impl Error for LSystemError {
    fn description(&self) -> &str {
        match self {
            &LSystemError::MalformedRule(_) => "malformed rule",
            &LSystemError::DuplicateKey(_) => "duplicate rule key",
            &LSystemError::PopOnEmptyStack => "turtle stack underflow",
            &LSystemError::NestedPolygon => "nested polygon",
            &LSystemError::DanglingPolygonEnd => "dangling polygon end"
        }
    }
}
