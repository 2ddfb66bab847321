fn main() {
    if let Err(e) = heat_load_analyser::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
