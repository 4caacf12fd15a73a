use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

fn init_logging() {
    // Load .env early so RUST_LOG and LOG_FORMAT take effect.
    dotenv().ok();
    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => common::utils::logging::init_logging_json(),
        _ => common::utils::logging::init_logging_default(),
    }
    info!(service = "user-data-api", event = "logger_init", "tracing subscriber initialized");
}

fn main() -> std::process::ExitCode {
    init_logging();

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    // Panic hook: log unhandled panics before the process dies.
    std::panic::set_hook(Box::new({
        let service_id = service_id;
        move |info| {
            error!(
                service = "user-data-api",
                event = "panic",
                %service_id,
                pid,
                message = %info,
                "unhandled panic occurred"
            );
        }
    }));

    // Thread count: config.toml first, then TOKIO_WORKER_THREADS.
    let worker_threads = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg.server.worker_threads,
        Err(_) => std::env::var("TOKIO_WORKER_THREADS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok()),
    };

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads {
        builder.worker_threads(w);
    }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(
                service = "user-data-api",
                event = "runtime_build_failed",
                error = %e,
                "failed to build tokio runtime"
            );
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "user-data-api",
        event = "start",
        %service_id,
        pid,
        version,
        "service starting"
    );

    match rt.block_on(server::run()) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            error!(
                service = "user-data-api",
                event = "fatal",
                error = %e,
                "server exited with error"
            );
            std::process::ExitCode::FAILURE
        }
    }
}
