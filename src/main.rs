use clap::Parser;
use vertexai_llm::structs::cli::Cli;
use vertexai_llm::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut runner = CommandRunner::new(cli.config);

    if let Err(e) = runner.run_command(cli.command).await {
        log::error!("❌ {}", e);
        return Err(e.into());
    }

    Ok(())
}
