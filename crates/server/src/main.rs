#[tokio::main]
async fn main() -> anyhow::Result<()> {
    prism_server::start().await
}
