use eyre::Result;
use taskboard::app::{App, InitProps, Route, destruct_terminal_for_panic};
use taskboard::app::services::{ActionService, EventService};
use taskboard::cli::Command;
use taskboard::config::{Configuration, init_logger, verbose};
use taskboard::models::Action;
use taskboard::seed::{ArcSeedSource, Placeholder};
use tokio::{sync::mpsc, task};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<()> {
    let cmd = Command::new();
    if cmd.version() {
        cmd.print_version();
        return Ok(());
    }

    std::panic::set_hook(Box::new(|panic_info| {
        destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let config = cmd.get_config()?;
    init_logger(&config.log)?;
    Configuration::init(config)?;
    let config = Configuration::instance();
    verbose!("[+] Logger initialized");

    let seed: ArcSeedSource = Placeholder::from(&config.seed).into();
    if config.seed.enabled {
        verbose!("[+] Seeding tasks from {}", seed.name());
    } else {
        verbose!("[!] Seeding is disabled, starting with an empty board");
    }

    let (action_tx, action_rx) = mpsc::unbounded_channel::<Action>();
    let mut events = EventService::default();

    let mut task_set = task::JoinSet::new();
    let token = CancellationToken::new();

    let mut action_service =
        ActionService::new(events.event_tx(), action_rx, seed, token.clone());
    task_set.spawn(async move { action_service.run().await });

    let route = if config.general.skip_home {
        Route::Tasks
    } else {
        Route::Home
    };

    let mut app = App::new(
        action_tx,
        &mut events,
        token.clone(),
        InitProps {
            route,
            seed_enabled: config.seed.enabled,
            notice_duration: config.notice.duration(),
        },
    );

    if let Err(err) = app.run().await {
        eprintln!("Error: {}", err);
    }

    token.cancel();
    task_set.abort_all();
    while let Some(res) = task_set.join_next().await {
        match res {
            Ok(Err(err)) => log::error!("Service error: {}", err),
            Err(err) if !err.is_cancelled() => log::error!("Task error: {}", err),
            _ => {}
        }
    }

    Ok(())
}
