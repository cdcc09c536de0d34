#[tokio::main]
async fn main() -> anyhow::Result<()> {
    palavra_backend::run().await
}
