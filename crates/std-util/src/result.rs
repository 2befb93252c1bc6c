/// Unwraps an `Err`, panicking with the `Ok` value otherwise. Extra
/// arguments are formatted into the panic message.
#[macro_export]
macro_rules! assert_err {
    ($e:expr $(,)?) => {
        match $e {
            Err(e) => e,
            actual => panic!("expected `Err`; actual={:?}", actual),
        }
    };
    ($e:expr, $($t:tt)+) => {
        match $e {
            Err(e) => e,
            actual => panic!(
                "expected `Err`; actual={:?}, {}",
                actual,
                format_args!($($t)+)
            ),
        }
    };
}

/// Unwraps an `Ok`, panicking with the error otherwise.
#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(e) => panic!("expected `Ok`; error={e}"),
        }
    };
}

/// Asserts that a result is an `Err` whose message equals the given text.
#[macro_export]
macro_rules! assert_err_msg {
    ($e:expr, $msg:expr) => {{
        let err = $crate::assert_err!($e);
        assert_eq!(err.to_string(), $msg);
        err
    }};
}
