//! clubtrack main entrypoint.

use clubtrack::run;

fn main() {
    env_logger::init();

    println!();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
