use color_eyre::Result;

use watch_urls::cli;
use watch_urls::command::CommandTemplate;
use watch_urls::config;
use watch_urls::watcher;

fn main() -> Result<()> {
    // Writes to /tmp/watch-urls-in-pasteboard-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    init_debug_log();

    color_eyre::install()?;

    // Load config early so CLI defaults can fall back to it
    let config_result = config::load_config();

    let args = match cli::parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(err) => {
            print!("{}", err);
            let _ = std::io::Write::flush(&mut std::io::stdout());
            std::process::exit(cli::exit_code(&err));
        }
    };
    let options = args.into_options(&config_result.config);

    // Resolve once, before touching the pasteboard
    let template = match CommandTemplate::resolve(&options.command) {
        Ok(template) => template,
        Err(err) => {
            println!("{}", err);
            std::process::exit(err.exit_code());
        }
    };

    if let Some(warning) = config_result.warning {
        println!("Warning: {}", warning);
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let poll_interval = config_result.config.watch.poll_interval();
    if let Err(err) = runtime.block_on(watcher::run(options, template, poll_interval)) {
        println!("{}", err);
        std::process::exit(err.exit_code());
    }

    #[cfg(debug_assertions)]
    log::debug!("=== WATCH SESSION ENDED ===");

    Ok(())
}

#[cfg(debug_assertions)]
fn init_debug_log() {
    use std::io::Write;

    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/watch-urls-in-pasteboard-debug.log")
    else {
        return;
    };

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();

    log::debug!("=== WATCH SESSION STARTED ===");
}
