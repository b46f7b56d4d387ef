#[cfg(test)]
use std::cell::RefCell;
#[cfg(not(test))]
use std::env;
use std::str::FromStr;

/// Retrieve the value of an arg passed to the app as `--name=value`.
/// An arg that has been passed with nothing after `=` is considered missing.
///
/// Args are read from a global context. In tests, wrap the call with [with_env_args].
pub fn retrieve_arg_value(arg_name: &str) -> Option<String> {
    let arg_prefix = format!("{arg_name}=");
    get_env_args()
        .into_iter()
        .find_map(|arg| arg.strip_prefix(&arg_prefix).map(str::to_owned))
        .filter(|value| !value.is_empty())
}

/// Retrieve an arg value, failing with `error_if_missing` if it hasn't been passed.
pub fn retrieve_expected_arg_value<E>(arg_name: &str, error_if_missing: E) -> Result<String, E> {
    retrieve_arg_value(arg_name).ok_or(error_if_missing)
}

/// Retrieve an arg value and parse it.
/// A missing or unparsable value yields `default_value`.
pub fn retrieve_parsed_arg_value<T: FromStr>(arg_name: &str, default_value: T) -> T {
    retrieve_arg_value(arg_name)
        .and_then(|value| value.parse::<T>().ok())
        .unwrap_or(default_value)
}

#[cfg(not(test))]
fn get_env_args() -> Vec<String> {
    env::args().collect()
}

#[cfg(test)]
thread_local! {
    /// Args seen by the app while a test runs inside [with_env_args].
    static ENV_ARGS: RefCell<Vec<String>> = const { RefCell::new(vec![]) };
}

#[cfg(test)]
fn get_env_args() -> Vec<String> {
    ENV_ARGS.with(|args| args.borrow().clone())
}

/// Run `function` as if the app had been started with `args`.
/// Previous args are restored afterward.
#[cfg(test)]
pub fn with_env_args<F, T>(args: Vec<String>, function: F) -> T
where
    F: FnOnce() -> T,
{
    let old_args = ENV_ARGS.with(|refcell| refcell.replace(args));
    let result = function();
    ENV_ARGS.with(|refcell| refcell.replace(old_args));
    result
}
