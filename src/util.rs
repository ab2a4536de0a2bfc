/// Numeric helpers.
///
/// This module converts literal digit strings into numbers without silent
/// data loss and checks that final results stay within the accepted range.
/// All functions return a `Result`, which is `Ok` if the value is valid, or
/// an error describing why it is not.
pub mod num;
