#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    apr_backend::run().await;
}
