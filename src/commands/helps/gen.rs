pub const HELP: &str = r#"Write a testbench for a component.

Usage:
    wavebench gen [options] [<file>]

Args:
    <file>                  vhdl file holding the entity (default: my_register.vhd)

Options:
    --stdout                print the testbench instead of writing it
    --high-time <ns>        time the clock stays high
    --low-time <ns>         time the clock stays low
    --test-length <ns>      total time to simulate
    --segment-duration <ns> time between stimulus changes
    --timeline <file>       toml file of segments to drive
    --drive <port@seg[=value]>...  drive a port for one segment
    --toggle <port@seg>...  flip a segment on or off, applied last

Use 'wavebench help gen' to read more about the command.
"#;
