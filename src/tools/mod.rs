use log::error;
use std::fmt::Debug;

pub mod env_args;

/// Build a closure logging the error it receives, then returning `value_to_return`.
/// Meant to be passed to `map_err` when the underlying error is not worth propagating.
pub fn log_error_and_return<E: Debug, T>(value_to_return: T) -> impl FnOnce(E) -> T {
    |e| {
        error!("{e:#?}");
        value_to_return
    }
}

/// Same as [log_error_and_return], with some context logged beforehand.
pub fn log_message_and_return<E: Debug, T>(
    message: &str,
    value_to_return: T,
) -> impl FnOnce(E) -> T {
    move |e| {
        error!("{message}\n{e:#?}");
        value_to_return
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use crate::tools::{log_error_and_return, log_message_and_return};

    pub fn init_logs() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn should_log_error_and_return_value() {
        init_logs();

        let expected_return_value = "test";
        let result = log_error_and_return(expected_return_value)("This is an error.");

        assert_eq!(expected_return_value, result);
    }

    #[test]
    fn should_log_message_and_return_value() {
        init_logs();

        let expected_return_value = 42;
        let result = log_message_and_return("Store is unreachable", expected_return_value)(
            "This is an error.",
        );

        assert_eq!(expected_return_value, result);
    }
}
