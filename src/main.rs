use std::process::ExitCode;

fn main() -> ExitCode {
    match yolo2cls::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
