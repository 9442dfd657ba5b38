use anyhow::Result;
use clap::Parser;
use nestout::cli::{init_tracing, run, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(&args, stdin.lock(), stdout.lock())
}
