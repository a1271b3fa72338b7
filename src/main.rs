use sealed_controller_meta::commands;

use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    args: commands::controller_meta::ControllerMetaArgs,
}

fn main() -> anyhow::Result<()> {
    // stdout carries the shell assignments, diagnostics stay on stderr
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    commands::controller_meta::run(cli.args)
}
