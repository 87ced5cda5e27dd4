use cube_football::{EngineBuilder, EngineConfig};

fn main() {
    // info+ unless RUST_LOG overrides; winit's own chatter stays at warn
    let default = "info,winit=warn";
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp_secs()
        .try_init();

    let config = match EngineConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    EngineBuilder::new().with_config(config).build().run();
}
