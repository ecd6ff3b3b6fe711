//! Errors raised when extracting results from effectful computations.

use thiserror::Error;

/// Failure to obtain a pure value from an [`Eff`](super::Eff) computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EffectError {
    /// The computation is still suspended on a request nobody handled.
    #[error("Unhandled effect: {effect}")]
    Unhandled {
        /// Name of the effect the computation is waiting on.
        effect: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn unhandled_message_names_effect() {
        let error = EffectError::Unhandled { effect: "Reader" };
        assert_eq!(error.to_string(), "Unhandled effect: Reader");
    }
}
