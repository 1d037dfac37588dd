use std::process::ExitCode;

fn main() -> ExitCode {
    caradvisor_cli::run()
}
