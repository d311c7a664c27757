use std::process;

fn main() {
    if let Err(err) = pdfstitch::run() {
        eprintln!("Error: {err}");
        process::exit(err.exit_code());
    }
}
