/// Logs the message with the call site attached and evaluates to the message
/// so it can also be stored in an error slot
#[macro_export]
macro_rules! internal_error {
    ($arg: expr) => {{
        let internal_error_msg = format!(
            "{}\ninternal error: {}:{}:{}",
            $arg,
            file!(),
            line!(),
            column!()
        );
        tracing::error!(?internal_error_msg);
        internal_error_msg
    }};
}

/// For failures that are expected under normal operation (the server rejecting
/// a logout, a token file that cannot be written) but that we still want to see
/// in the traces
#[macro_export]
macro_rules! log_err_as_warn {
    ($arg: expr) => {
        if let Err(mishap) = $arg {
            tracing::warn!(?mishap);
        }
    };
}
