pub const HELP: &str = r#"Print the interface of a component.

Usage:
    wavebench read [options] [<file>]

Args:
    <file>                  vhdl file holding the entity (default: my_register.vhd)

Options:
    --json                  print the component as json

Use 'wavebench help read' to read more about the command.
"#;
