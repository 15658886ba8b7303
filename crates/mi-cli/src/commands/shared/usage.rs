//! Help text fragments shared by subcommands.

/// Binary name as shown in usage lines.
pub const PROGRAM_NAME: &str = "mi";

/// Prefix for user-facing failure lines.
pub const ERROR_PREFIX: &str = "[ERROR]: ";

/// `Usage:` block for `<program> <parent> <command> <args> [flags]`.
#[must_use]
pub fn cmd_usage(parent: &str, command: &str, args: &str) -> String {
    format!("Usage:\n  {PROGRAM_NAME} {parent} {command} {args} [flags]\n\n")
}

/// Generic `Flags:` footer.
#[must_use]
pub fn cmd_flags(subject: &str) -> String {
    format!(
        "Flags:\n  -h, --help   help for {subject}\n\n\
         Global Flags:\n  -f, --format <FORMAT>   table, json or raw\n  \
         -q, --quiet             errors only in logs\n  \
         -v, --verbose           debug logging\n      \
         --base-url <URL>    management API base URL\n"
    )
}
