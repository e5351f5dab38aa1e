pub const HELP: &str = r#"Summarize a saved tool log.

Usage:
    vivlog parse [options] <file>

Args:
    <file>              path to the tool's log file

Options:
    --kind <kind>...    list the messages of a kind: warning, error, info,
                        system, none, command, phase
    --json              print the messages as json

Use 'vivlog help parse' to read more about the command.
"#;
