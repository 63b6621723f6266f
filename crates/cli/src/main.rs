use std::process::ExitCode;

fn main() -> ExitCode {
    careerfit_cli::run()
}
