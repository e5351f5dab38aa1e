pub const HELP: &str = r#"Report live progress from tool output on stdin.

Usage:
    vivlog watch [options]

Options:
    --severity <level>  lowest message level to show: info, warning, error
    --log <file>        save the raw tool output to a file
    --total <n>         number of commands the tool is expected to run
    --timestamp         prefix each reported line with the time
    --strict            fail if the tool reported any errors

Examples:
    vivado -mode batch -source build.tcl 2>&1 | vivlog watch --log build.log
    vivado -mode batch -source build.tcl 2>&1 | vivlog watch --total $(wc -l < build.tcl)

Use 'vivlog help watch' to read more about the command.
"#;
