// Logging and configuration are set up inside the library's `run`
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    annict_notifier_lib::run().await
}
