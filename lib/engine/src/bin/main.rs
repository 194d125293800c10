extern crate engine;

use std::io;

use engine::engine::Engine;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // 日志写到 stderr，stdout 只留给协议输出
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    Engine::new().run(io::stdin().lock(), io::stdout().lock())
}
