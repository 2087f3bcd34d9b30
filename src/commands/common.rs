use crate::error::{Error, Result};

/// Parse an issue number given on the command line. Issue numbers start at 1.
pub(crate) fn parse_issue_number(arg: &str) -> Result<u64> {
    match arg.trim().parse::<u64>() {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(Error::InvalidArgument(format!(
            "Invalid issue id '{arg}': expected a positive integer"
        ))),
    }
}
