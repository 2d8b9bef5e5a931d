use std::process;

fn main() {
    if let Err(e) = rsa_console::shell::run() {
        eprintln!("Error running program: {}", e);
        process::exit(1);
    }
}
