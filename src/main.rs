// src/main.rs

use fakerun::{cli, helper, logging, run};

fn main() {
    // Fake process mode exits here and never touches logging or the CLI.
    helper::run_if_activated();

    if let Err(err) = run_main() {
        eprintln!("fakerun error: {err:?}");
        std::process::exit(1);
    }
}

#[tokio::main]
async fn run_main() -> anyhow::Result<()> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args).await
}
