use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use minijinja::{context, Environment, Value};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::clipboard::{ClipboardRead, SystemClipboard};
use crate::dates::{self, Clock, SystemClock, DEFAULT_DATE_FORMAT};
use crate::document;
use crate::error::{Result, StencilError};
use crate::snippet::Snippet;

/// Renders snippet templates against a fixed helper-function set. The
/// impure collaborators (clock, clipboard, randomness) are owned here and
/// swappable, which is what makes rendered output reproducible in tests.
pub struct Renderer {
    clock: Arc<dyn Clock>,
    clipboard: Arc<dyn ClipboardRead>,
    rng: Arc<Mutex<StdRng>>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            clock: Arc::new(SystemClock),
            clipboard: Arc::new(SystemClipboard),
            rng: Arc::new(Mutex::new(StdRng::from_entropy())),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_clipboard(mut self, clipboard: Arc<dyn ClipboardRead>) -> Self {
        self.clipboard = clipboard;
        self
    }

    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = Arc::new(Mutex::new(StdRng::seed_from_u64(seed)));
        self
    }

    /// Render a snippet to final text.
    ///
    /// The template body is re-read from `snippet.path` on every call so
    /// externally edited documents take effect immediately. Unresolved and
    /// undeclared variable references degrade to defaults or empty text;
    /// only a genuinely malformed template is an error.
    pub fn render(&self, snippet: &Snippet) -> Result<String> {
        let doc = document::load(&snippet.path)?;

        let mut env = Environment::new();
        self.register_helpers(&mut env, snippet);

        env.render_str(&doc.body, context! {})
            .map_err(|source| StencilError::Template {
                path: snippet.path.clone(),
                source,
            })
    }

    // The template sees exactly this named callable set and nothing else.
    fn register_helpers(&self, env: &mut Environment<'_>, snippet: &Snippet) {
        let clock = Arc::clone(&self.clock);
        env.add_function("date", move |expression: String, format: Option<String>| {
            let format = format.as_deref().unwrap_or(DEFAULT_DATE_FORMAT);
            match dates::parse_expression(&expression, clock.now()) {
                Some(instant) => instant.format(format).to_string(),
                None => String::new(),
            }
        });

        let clipboard = Arc::clone(&self.clipboard);
        env.add_function("clipboard", move || {
            clipboard.read_text().unwrap_or_default()
        });

        let rng = Arc::clone(&self.rng);
        env.add_function("random_int", move |min: i64, max: i64| {
            let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
            lock_rng(&rng).gen_range(lo..=hi)
        });

        let rng = Arc::clone(&self.rng);
        env.add_function("random_item", move |items: Vec<Value>| {
            if items.is_empty() {
                return Value::UNDEFINED;
            }
            let index = lock_rng(&rng).gen_range(0..items.len());
            items[index].clone()
        });

        let rng = Arc::clone(&self.rng);
        env.add_function("random_uuid", move || {
            let bytes: [u8; 16] = lock_rng(&rng).gen();
            uuid::Builder::from_random_bytes(bytes)
                .into_uuid()
                .simple()
                .to_string()
        });

        // Snapshot of effective values at render time; lookups of
        // undeclared names read as empty rather than failing the render.
        let values: HashMap<String, String> = snippet
            .variables
            .iter()
            .map(|var| (var.name.clone(), var.effective_value().to_string()))
            .collect();
        env.add_function("vars", move |name: String| {
            values.get(&name).cloned().unwrap_or_default()
        });
    }
}

fn lock_rng(rng: &Mutex<StdRng>) -> std::sync::MutexGuard<'_, StdRng> {
    rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
