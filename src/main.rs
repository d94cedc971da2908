use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tokio::sync::mpsc;
use tokio::time::sleep_until;

use dbtune::app::action::Action;
use dbtune::app::effect::Effect;
use dbtune::app::effect_runner::EffectRunner;
use dbtune::app::ports::SettingsStore;
use dbtune::app::reducer::reduce;
use dbtune::app::render_schedule::next_animation_deadline;
use dbtune::app::schema_loading::load_registry;
use dbtune::app::settings::SettingsOverrides;
use dbtune::app::state::AppState;
use dbtune::app::text_input::EditBuffer;
use dbtune::domain::Engine;
use dbtune::infra::adapters::{TomlSchemaSource, TomlSettingsStore};
use dbtune::infra::clipboard::ArboardClipboard;
use dbtune::ui::adapters::TuiAdapter;
use dbtune::ui::event::handler::handle_event;
use dbtune::ui::tui::TuiRunner;
use dbtune::{error, logging};

/// Tune advanced settings of a managed database and get the matching
/// curl and doctl commands.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Engine tab to open (mysql, postgres, redis, mongodb, kafka, opensearch)
    #[arg(short, long)]
    engine: Option<Engine>,

    /// Pre-fill the database ID
    #[arg(short, long)]
    database_id: Option<String>,

    /// Hide the doctl command
    #[arg(long, conflicts_with = "show_cli_command")]
    hide_cli_command: bool,

    /// Show the doctl command even if the settings file hides it
    #[arg(long)]
    show_cli_command: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn overrides(&self) -> SettingsOverrides {
        let show_cli_command = match (self.show_cli_command, self.hide_cli_command) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        SettingsOverrides {
            engine: self.engine,
            show_cli_command,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    error::install_hooks()?;

    let args = Args::parse();
    let _log_guard = logging::init(args.verbose)?;

    let settings_store = TomlSettingsStore::new()?;
    let settings = settings_store
        .load()
        .wrap_err_with(|| {
            format!(
                "failed to load settings from {}",
                settings_store.storage_path().display()
            )
        })?
        .with_overrides(&args.overrides());

    let schema_source = match &settings.schema_dir {
        Some(dir) => TomlSchemaSource::with_override_dir(dir.clone()),
        None => TomlSchemaSource::embedded(),
    };
    let registry = load_registry(&schema_source).wrap_err("failed to load engine schemas")?;
    tracing::info!(engine = %settings.default_engine, "starting");

    let (action_tx, mut action_rx) = mpsc::channel::<Action>(256);

    let effect_runner = EffectRunner::new(Arc::new(ArboardClipboard::new()), action_tx.clone());

    let mut state = AppState::new(Arc::new(registry), &settings);
    if let Some(id) = args.database_id {
        state.database_id = EditBuffer::with_text(id);
    }

    let mut tui = TuiRunner::new()?;
    tui.enter()?;

    loop {
        let deadline = next_animation_deadline(&state);

        tokio::select! {
            Some(event) = tui.next_event() => {
                let action = handle_event(event, &state);
                if !action.is_none() {
                    let _ = action_tx.send(action).await;
                }
            }
            Some(action) = action_rx.recv() => {
                let now = Instant::now();
                let mut effects = reduce(&mut state, action, now);

                if state.is_dirty() {
                    state.clear_expired_timers(now);
                    effects.push(Effect::Render);
                }

                let mut tui_adapter = TuiAdapter::new(&mut tui);
                effect_runner.run(effects, &mut tui_adapter, &state).await?;
                state.clear_dirty();
            }
            // "Copied!" acknowledgement expired
            _ = async {
                match deadline {
                    Some(d) => sleep_until(d.into()).await,
                    None => std::future::pending::<()>().await,
                }
            } => {
                let now = Instant::now();
                state.clear_expired_timers(now);
                let effects = reduce(&mut state, Action::Render, now);
                let mut tui_adapter = TuiAdapter::new(&mut tui);
                effect_runner.run(effects, &mut tui_adapter, &state).await?;
                state.clear_dirty();
            }
        }

        if state.should_quit {
            break;
        }
    }

    tui.exit()?;
    tracing::info!("exiting");
    Ok(())
}
