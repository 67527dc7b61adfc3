use clap::Parser;
use log::{error, info, Level};
use simple_logger::init_with_level;

use altstart_cli::cli::Args;
use altstart_core::run;

fn main() {
    let start = std::time::Instant::now();
    let args: Args = Args::parse();

    let level = if args.verbose { Level::Debug } else { Level::Info };
    init_with_level(level).unwrap_or_else(|e| {
        eprintln!("failed to initialise logger: {e}");
        std::process::exit(1);
    });

    args.check().unwrap_or_else(|e| {
        error!("{}", e);
        std::process::exit(1);
    });

    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build_global()
    {
        error!("{}", e);
        std::process::exit(1);
    }

    let (scan, export) = args.configs();
    run(&args.input, &args.output, &scan, &export).unwrap_or_else(|e| {
        error!("{}", e);
        std::process::exit(1);
    });

    let elapsed = start.elapsed();
    info!("Elapsed time: {:.3?}", elapsed);
}
