use std::process::ExitCode;

fn main() -> ExitCode {
    match stackfilter::run() {
        Ok(status) => status,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        }
    }
}
