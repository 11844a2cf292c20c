pub const MANUAL: &str = "\
NAME
    read - print the interface of a component

SYNOPSIS
    wavebench read [options] [<file>]

DESCRIPTION
    This command reads the first entity with a port clause in the file and
    prints its name, the testbench name derived from it, its ports, and the
    components it declares. Port clause text that could not be understood is
    reported as a warning and otherwise skipped. Ports with mode 'inout' or
    'buffer' are skipped in the same way.

OPTIONS
    <file>
        VHDL file holding the entity

    --json
        Print the component as json, including any skipped fragments

EXAMPLES
    wavebench read alu.vhd
    wavebench read --json alu.vhd
";
