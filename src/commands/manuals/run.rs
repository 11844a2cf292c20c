pub const MANUAL: &str = r#"NAME
    run - write, simulate, and view a testbench

SYNOPSIS
    wavebench run [options] [<file>]

DESCRIPTION
    This command writes the testbench and then calls ghdl from the component's
    directory to analyze every declared component file '<name>.vhd' in the
    order it appears, the component itself, and the testbench. The testbench
    is then elaborated and simulated, dumping '<entity>_wave.ghw'. The first
    failing step stops the run.

    Finally the waveform is opened in gtkwave. Failing to open the viewer is
    reported as a note and does not fail the run.

    The simulator is located from '--ghdl', then WAVEBENCH_GHDL, then the
    configuration file, then the PATH, and finally 'ghdl/bin' next to the
    wavebench executable. The viewer is located the same way, using
    'gtkwave/gtkwave64/bin' as the bundled location.

OPTIONS
    --ghdl <path>
        Simulator executable

    --gtkwave <path>
        Waveform viewer executable

    --no-view
        Do not open the waveform viewer

    --verbose
        Display each command being executed

    --timeline <file>, --drive <port@seg[=value]>..., --toggle <port@seg>...
        Author the timeline (see 'wavebench help gen')

EXAMPLES
    wavebench run --verbose --drive EN@1 my_register.vhd
    wavebench run --no-view --ghdl /opt/ghdl/bin/ghdl
"#;
