use pr_activity_dashboard_lib::config::DashboardConfig;

fn main() {
    // Logs go to stderr so they don't interleave with the dashboard on stdout
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match DashboardConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(2);
        }
    };

    // Single-threaded: handlers only interleave at network awaits
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            log::error!("Failed to start async runtime: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(pr_activity_dashboard_lib::run(config)) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
