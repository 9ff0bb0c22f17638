use std::process;

fn main() {
    if let Err(e) = rlaunch::cli::run() {
        if !e.is_reported() {
            eprintln!("Error: {}", e);
        }
        process::exit(e.exit_code());
    }
}
