use thiserror::Error;

/// The errors raised while building an [`AAFramework`](crate::aa::AAFramework).
///
/// Argument labels are stored using their [`Display`](std::fmt::Display) representation,
/// which keeps this type independent from the label type of the framework.
///
/// A failed mutation never alters the framework it was applied on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameworkError {
    /// An argument with the same label is already defined.
    #[error("argument {0} is already defined")]
    DuplicateArgument(String),
    /// No argument has this label.
    #[error("no such argument: {0}")]
    UnknownArgument(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            "argument a is already defined",
            FrameworkError::DuplicateArgument("a".to_string()).to_string()
        );
        assert_eq!(
            "no such argument: b",
            FrameworkError::UnknownArgument("b".to_string()).to_string()
        );
    }

    #[test]
    fn test_into_anyhow() {
        let err: anyhow::Error = FrameworkError::UnknownArgument("c".to_string()).into();
        assert_eq!(
            Some(&FrameworkError::UnknownArgument("c".to_string())),
            err.downcast_ref::<FrameworkError>()
        );
    }
}
