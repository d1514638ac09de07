use anyhow::Result;
use clap::Parser;
use rpgmvp_decrypt::cli::{execute_decrypt, Cli, DecryptCommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = setup_logging(cli.verbose) {
        eprintln!("❌ ログ初期化に失敗しました: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run(&cli).await {
        eprintln!("❌ エラー: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let command = DecryptCommand::from_cli(cli)?;
    let summary = execute_decrypt(command).await?;

    info!(
        produced = summary.produced,
        completed = summary.completed,
        converted = summary.converted,
        failed = summary.failed,
        elapsed_ms = summary.elapsed_ms(),
        "復号完了"
    );

    if summary.failed > 0 {
        warn!(failed = summary.failed, "一部のファイルを復号できませんでした");
    }

    Ok(())
}

fn setup_logging(verbose: bool) -> Result<()> {
    // RUST_LOGが設定されていればそちらを優先
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) if verbose => EnvFilter::new("rpgmvp_decrypt=debug,warn"),
        Err(_) => EnvFilter::new("rpgmvp_decrypt=info,warn"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    Ok(())
}
