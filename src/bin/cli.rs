use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    catalog::cli::run().await
}
