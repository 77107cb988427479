use std::io;

fn main() {
    baccarat_cli::logging::init_logging();
    let code = baccarat_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
