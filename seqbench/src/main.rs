fn main() {
    if let Err(e) = seqbench::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
