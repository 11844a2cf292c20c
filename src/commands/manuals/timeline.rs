pub const MANUAL: &str = r#"NAME
    timeline - authoring stimulus

DESCRIPTION
    A timeline divides the test into segments of 'segment-duration' ns. Each
    input port holds a set of active segments. A single-bit input (std_logic,
    std_ulogic, or bit) is driven '1' during its active segments. A vector
    input must be given a value for every segment it is active in, which is
    written quoted into the testbench.

    Timeline files list the segments for each port:

    [[port]]
    name = "EN"
    segments = [{ index = 1 }, { index = 3 }]

    [[port]]
    name = "D"
    segments = [{ index = 1, value = "0101" }]

    The same can be given on the command line with '--drive EN@1' and
    '--drive D@1=0101'. Segments are numbered from 0. A segment may also be
    named by a time offset, so '--drive EN@45ns' lands in the segment holding
    45 ns.

    A drive always activates its segment. '--toggle EN@3' instead flips the
    segment: an active segment becomes inactive and loses its value, while an
    inactive single-bit segment becomes active. An inactive vector segment
    stays inactive until a drive gives it a value. Toggles apply after the
    timeline file and every drive.

    Segments span whole multiples of 'segment-duration'. Any remainder of
    'test-length' is not simulated, and a segment longer than the test leaves
    no segments at all. A test may span at most 10000 segments.
"#;
