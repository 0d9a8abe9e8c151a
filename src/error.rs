use thiserror::Error;

/// Every way a picker call can end without a selection.
///
/// `Cancelled` is not a failure from the host's point of view: the façade
/// turns it into a successful reply without payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerError {
    #[error("operation cancelled by the user")]
    Cancelled,

    #[error("{message}")]
    NativeDialog { code: i32, message: String },

    #[error("argument {0} not found")]
    ArgumentMissing(String),

    #[error("string conversion failed: {0}")]
    Encoding(String),
}

pub type Result<T> = std::result::Result<T, PickerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_missing_names_the_argument() {
        let err = PickerError::ArgumentMissing("withData".to_string());
        assert_eq!(err.to_string(), "argument withData not found");
    }

    #[test]
    fn native_error_displays_message_only() {
        let err = PickerError::NativeDialog { code: -2147467259, message: "Unspecified error".into() };
        assert_eq!(err.to_string(), "Unspecified error");
    }
}
