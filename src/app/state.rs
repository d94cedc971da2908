use std::sync::Arc;
use std::time::Instant;

use dbtune_domain::{ConfigValue, Engine, EngineSchema, Field, SchemaRegistry};

use crate::command_synthesis::{CommandOptions, CommandPair, synthesize};
use crate::form_state::FormState;
use crate::input_mode::InputMode;
use crate::settings::{DisplayOptions, Settings};
use crate::text_input::EditBuffer;

pub struct AppState {
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub engine: Engine,
    /// Shared by every engine; survives engine switches.
    pub database_id: EditBuffer,
    pub form: FormState,
    /// Bumped whenever `form` is replaced.
    pub form_generation: u64,
    pub display: DisplayOptions,
    pub command_options: CommandOptions,
    registry: Arc<SchemaRegistry>,
    render_dirty: bool,
}

impl AppState {
    pub fn new(registry: Arc<SchemaRegistry>, settings: &Settings) -> Self {
        Self {
            should_quit: false,
            input_mode: InputMode::default(),
            engine: settings.default_engine,
            database_id: EditBuffer::default(),
            form: FormState::new(),
            form_generation: 0,
            display: settings.display.clone(),
            command_options: settings.commands.clone(),
            registry,
            render_dirty: true,
        }
    }

    pub fn schema(&self) -> &EngineSchema {
        self.registry.schema(self.engine)
    }

    /// Switching to the active engine is a no-op; any other engine starts
    /// from a fresh form. Returns whether the engine changed.
    pub fn switch_engine(&mut self, engine: Engine) -> bool {
        if engine == self.engine {
            return false;
        }
        tracing::debug!(from = %self.engine, to = %engine, "switching engine");
        self.engine = engine;
        self.form = FormState::new();
        self.form_generation += 1;
        if matches!(self.input_mode, InputMode::EditField | InputMode::Dropdown) {
            self.input_mode = InputMode::Normal;
        }
        true
    }

    pub fn selected_field(&self) -> Option<&Field> {
        self.schema().fields().nth(self.form.selected)
    }

    pub fn selected_value(&self) -> Option<&ConfigValue> {
        self.selected_field()
            .and_then(|field| self.form.config.get(&field.name))
    }

    /// Derived on demand from the current form.
    pub fn commands(&self) -> CommandPair {
        synthesize(
            self.database_id.as_str(),
            &self.form.config,
            self.engine,
            &self.command_options,
        )
    }

    pub fn mark_dirty(&mut self) {
        self.render_dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.render_dirty = false;
    }

    pub fn is_dirty(&self) -> bool {
        self.render_dirty
    }

    pub fn clear_expired_timers(&mut self, now: Instant) {
        self.form.copy_feedback.clear_expired_feedback_at(now);
    }
}
