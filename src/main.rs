#[tokio::main]
async fn main() -> anyhow::Result<()> {
    unirate_proxy_lib::run().await
}
