pub const MANUAL: &str = "\
NAME
    wavebench - generate vhdl testbenches from timelines

SYNOPSIS
    wavebench [options] [command]

DESCRIPTION
    Wavebench reads the port clause of a VHDL entity and writes a testbench
    that drives its inputs segment by segment. A clock named 'clk' is always
    generated by the testbench and never driven as an input. The testbench
    can then be analyzed, elaborated, and simulated with ghdl and the
    resulting waveform opened in gtkwave.

    When no file is given, the component 'my_register.vhd' is loaded from the
    workspace directory.

OPTIONS
    --version
        Print version information and exit

    --color <when>
        Coloring: auto, always, never

    --help, -h
        Print help information

COMMANDS
    read, show, gen, run, help

ENVIRONMENT
    WAVEBENCH_HOME
        Directory holding the global config.toml (default: ~/.wavebench)

    WAVEBENCH_WORKSPACE
        Directory searched for the default component

    WAVEBENCH_GHDL, WAVEBENCH_GTKWAVE
        Paths to the simulator and waveform viewer executables

EXAMPLES
    wavebench read my_register.vhd
    wavebench gen --drive EN@1 my_register.vhd
    wavebench run --timeline stimulus.toml
";
