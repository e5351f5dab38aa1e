pub const HELP: &str = r#"Vivlog follows Vivado output and reports on the build.

Usage:
    vivlog [options] [command]

Commands:
    watch           report live progress from tool output on stdin
    parse           summarize a saved tool log
    classify        classify lines of tool output
    help            read the help page of a command

Options:
    --version       print version information and exit
    --color <when>  coloring: auto, always, never
    --help, -h      print help information

Use 'vivlog help <command>' for more information about a command.
"#;
