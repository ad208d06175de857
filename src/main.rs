mod cli;

fn main() {
    // Delegate to CLI runner; errors are printed nicely here.
    if let Err(err) = cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
