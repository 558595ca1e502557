#[path = "sesame-ws/app/mod.rs"]
mod app;
#[path = "sesame-ws/args.rs"]
mod args;
#[path = "sesame-ws/logging.rs"]
mod logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    app::run().await
}
