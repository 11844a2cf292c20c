pub const HELP: &str = r#"Write, simulate, and view a testbench.

Usage:
    wavebench run [options] [<file>]

Args:
    <file>                  vhdl file holding the entity (default: my_register.vhd)

Options:
    --ghdl <path>           simulator executable
    --gtkwave <path>        waveform viewer executable
    --no-view               do not open the waveform viewer
    --verbose               display each command being executed
    --high-time <ns>        time the clock stays high
    --low-time <ns>         time the clock stays low
    --test-length <ns>      total time to simulate
    --segment-duration <ns> time between stimulus changes
    --timeline <file>       toml file of segments to drive
    --drive <port@seg[=value]>...  drive a port for one segment
    --toggle <port@seg>...  flip a segment on or off, applied last

Use 'wavebench help run' to read more about the command.
"#;
