pub const MANUAL: &str = r#"NAME
    show - draw the authored timeline as text

SYNOPSIS
    wavebench show [options] [<file>]

DESCRIPTION
    This command authors a timeline from the '--timeline' file, any
    '--drive' entries, and any '--toggle' entries, then draws one row per input beneath a sampled clock.
    Single-bit inputs are drawn high or low per segment. Vector inputs show
    the value committed for each active segment.

OPTIONS
    --segments
        List the active segments of each input, with the value of each vector
        segment, instead of drawing the waveform

    --timeline <file>
        TOML file listing the segments to drive (see 'wavebench help timeline')

    --drive <port@seg[=value]>...
        Drive a port for one segment, applied after the timeline file

    --toggle <port@seg>...
        Flip a segment of a port on or off, applied after every drive

    --high-time <ns>, --low-time <ns>, --test-length <ns>, --segment-duration <ns>
        Override the timing values

EXAMPLES
    wavebench show --drive EN@1 --drive D@1=0101 my_register.vhd
    wavebench show --segments --toggle EN@45ns my_register.vhd
"#;
