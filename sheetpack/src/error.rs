use thiserror::Error;

/// Errors that can occur while packing.
///
/// Rectangles that are too large for the sheet are not an error: they simply remain unplaced.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PackError {
    /// A rectangle, polygon or sheet was malformed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Not a single rectangle could be placed on the sheet.
    #[error("none of the {n_items} rectangles could be placed on the sheet")]
    EmptyResult { n_items: usize },

    /// The optimizer configuration is not usable.
    #[error("configuration error: {0}")]
    Configuration(String),
}
