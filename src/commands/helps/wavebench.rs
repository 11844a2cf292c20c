pub const HELP: &str = "\
Wavebench generates VHDL testbenches from timelines.

Usage:
    wavebench [options] [command]

Commands:
    read            print the interface of a component
    show            draw the authored timeline as text
    gen             write a testbench for a component
    run             write, simulate, and view a testbench
    help            read documentation on a topic

Options:
    --version       print version information and exit
    --color <when>  coloring: auto, always, never
    --help, -h      print help information

Use 'wavebench help <command>' for more information about a command.
";
