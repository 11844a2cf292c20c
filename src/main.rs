use std::process::ExitCode;

fn main() -> ExitCode {
    wavebench::go()
}
