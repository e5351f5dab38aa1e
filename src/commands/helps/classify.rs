pub const HELP: &str = r#"Classify lines of tool output.

Usage:
    vivlog classify [options] [--] [lines]...

Args:
    lines           lines to classify (read from stdin when omitted)

Options:
    --json          print each message as a line of json

Use 'vivlog help classify' to read more about the command.
"#;
