pub const MANUAL: &str = r#"NAME
    gen - write a testbench for a component

SYNOPSIS
    wavebench gen [options] [<file>]

DESCRIPTION
    This command writes '<entity>_tb.vhd' next to the component. For every
    segment the stimulus process assigns each input its value and then waits
    for DATA_CHANGE_TIME. Inactive single-bit inputs are driven '0' and
    inactive vectors are driven (others => '0').

    The number of segments is the test length divided by the segment
    duration. Any remainder is not simulated, and a segment longer than the
    test leaves an empty stimulus loop.

OPTIONS
    --stdout
        Print the testbench instead of writing it

    --timeline <file>
        TOML file listing the segments to drive

    --drive <port@seg[=value]>...
        Drive a port for one segment

    --toggle <port@seg>...
        Flip a segment of a port on or off, applied after every drive

    --high-time <ns>
        Time the clock stays high (default: 10)

    --low-time <ns>
        Time the clock stays low (default: 10)

    --test-length <ns>
        Total time to simulate (default: 400)

    --segment-duration <ns>
        Time between stimulus changes (default: 20)

EXAMPLES
    wavebench gen --test-length 100 --drive EN@2 my_register.vhd
    wavebench gen --stdout > my_register_tb.vhd
"#;
