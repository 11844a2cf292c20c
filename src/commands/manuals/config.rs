pub const MANUAL: &str = r#"NAME
    config - configuration file

DESCRIPTION
    Wavebench reads 'config.toml' from WAVEBENCH_HOME when it exists. Relative
    paths in the file are relative to the file's directory. Values given on
    the command line take precedence, followed by environment variables, the
    configuration file, and finally the defaults.

    [general]
    workspace = "path"          # directory holding the default component

    [timing]
    high-time = 10
    low-time = 10
    test-length = 400
    segment-duration = 20

    [toolchain]
    ghdl = "path"
    gtkwave = "path"

    Unknown keys are rejected.
"#;
