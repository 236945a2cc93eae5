#[tokio::main]
async fn main() -> anyhow::Result<()> {
    revlimits::start_server().await
}
