use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use livestream_scheduler::clock::{Clock, OffsetClock, SystemClock};
use livestream_scheduler::player::{TracingBackend, Volume};
use livestream_scheduler::{render, Config, CountdownView, MountedView, PlayerSettings, Scheduler};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;

#[derive(Parser)]
#[command(name = "livestream-scheduler", about = "Live audio session schedule and player")]
struct Cli {
    /// Config file (extension optional); defaults apply if it is missing
    #[arg(long, global = true, default_value = "config/livestream-scheduler")]
    config: String,

    /// Display timezone (IANA name), overriding config and $TZ
    #[arg(long, global = true)]
    tz: Option<String>,

    /// Pretend it is this instant (RFC 3339); time still advances from there
    #[arg(long, global = true)]
    at: Option<DateTime<Utc>>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the session list
    List {
        #[arg(long)]
        json: bool,
    },
    /// Print the selectable timezones
    Zones,
    /// Run the standalone countdown for a session
    Countdown {
        id: String,
        #[arg(long, default_value_t = 10)]
        ticks: u32,
    },
    /// Open the player for a session and watch it
    Watch {
        id: String,
        #[arg(long, default_value_t = 10)]
        ticks: u32,
        /// Initial volume percentage
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        volume: Option<u8>,
        #[arg(long)]
        muted: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = Config::load_or_default(&cli.config)?;

    let clock: Arc<dyn Clock> = match cli.at {
        Some(at) => Arc::new(OffsetClock::starting_at(at)),
        None => Arc::new(SystemClock),
    };
    let now = clock.now();

    let zone = cfg.display_zone(cli.tz.as_deref());
    let sessions = cfg.sessions(&zone, now);

    info!("Loaded config: {:?} schedule, {} sessions", cfg.schedule.source, sessions.len());

    let settings = PlayerSettings {
        stream_url: cfg.player.stream_url.clone(),
        volume: Volume::new(cfg.player.volume),
        tick_interval: cfg.tick_interval(),
    };
    let mut scheduler = Scheduler::new(
        sessions,
        zone,
        Arc::new(TracingBackend),
        Arc::clone(&clock),
        settings,
    )
    .with_fallback_timezone(cfg.display.fallback_timezone.clone());

    match cli.command {
        Command::List { json } => {
            let listing = scheduler.listing();
            if json {
                println!("{}", serde_json::to_string_pretty(&listing)?);
            } else {
                print!("{}", render::listing(&listing));
            }
        }

        Command::Zones => {
            print!("{}", render::zones(&scheduler.timezone(), now));
        }

        Command::Countdown { id, ticks } => {
            let session = scheduler
                .find(&id)
                .cloned()
                .with_context(|| format!("Session {} not found", id))?;

            println!(
                "{} - {} starts {}",
                session.title,
                session.location,
                scheduler.timezone().format(session.start_time)
            );

            let (notice_tx, mut notice_rx) = mpsc::unbounded_channel();
            let view = MountedView::mount(
                format!("countdown:{}", id),
                CountdownView::new(session).with_notices(notice_tx),
                Arc::clone(&clock),
                cfg.tick_interval(),
            );

            for _ in 0..ticks {
                tokio::time::sleep(cfg.tick_interval()).await;

                while let Ok(notice) = notice_rx.try_recv() {
                    println!("🔔 {} is {}", notice.title, notice.status);
                }
                println!("{}", render::countdown(&view.lock().await.snapshot()));
            }

            view.unmount().await;
        }

        Command::Watch {
            id,
            ticks,
            volume,
            muted,
        } => {
            scheduler.select(&id).await?;

            if let Some(player) = scheduler.player() {
                let mut player = player.lock().await;
                if let Some(volume) = volume {
                    player.set_volume(volume);
                }
                if muted {
                    player.set_muted(true);
                }
            }

            for _ in 0..ticks {
                tokio::time::sleep(cfg.tick_interval()).await;

                if let Some(player) = scheduler.player() {
                    println!("{}", render::player(&player.lock().await.snapshot()));
                }
            }

            scheduler.close_player().await;
        }
    }

    Ok(())
}
