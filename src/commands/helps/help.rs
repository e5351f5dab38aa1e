pub const HELP: &str = r#"Read the help page of a command.

Usage:
    vivlog help [<topic>]

Args:
    <topic>         a listed topic or any vivlog subcommand

Options:
    --list          list the available topics

Use 'vivlog help --list' to see all available topics.
"#;
