pub const HELP: &str = r#"Draw the authored timeline as text.

Usage:
    wavebench show [options] [<file>]

Args:
    <file>                  vhdl file holding the entity (default: my_register.vhd)

Options:
    --segments              list active segments instead of drawing them
    --high-time <ns>        time the clock stays high
    --low-time <ns>         time the clock stays low
    --test-length <ns>      total time to simulate
    --segment-duration <ns> time between stimulus changes
    --timeline <file>       toml file of segments to drive
    --drive <port@seg[=value]>...  drive a port for one segment
    --toggle <port@seg>...  flip a segment on or off, applied last

Use 'wavebench help show' to read more about the command.
"#;
