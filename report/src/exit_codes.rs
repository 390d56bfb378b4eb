//! SIPp exit code explanations

/// Known SIPp exit codes. 0 ("all calls were successful") is never reported.
pub const EXIT_CODES: &[(i32, &str)] = &[
    (1, "At least one call failed"),
    (15, "Process was terminated"),
    (97, "Exit on internal command. Calls may have been processed"),
    (99, "Normal exit without calls processed"),
    (-1, "Fatal error"),
    (-2, "Fatal error binding a socket"),
    (-10, "Signalled to stop with SIGUSR1"),
    (254, "Connection Error: socket already in use"),
    (255, "Command or syntax error: check stderr output"),
];

pub const UNKNOWN_EXIT_CODE: &str = "unknown exit code";

/// Human readable explanation for an exit code
pub fn explain(code: i32) -> &'static str {
    EXIT_CODES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, explanation)| *explanation)
        .unwrap_or(UNKNOWN_EXIT_CODE)
}
