//! Status line - the row of components printed once per tick

use rayon::prelude::*;

use crate::core::{Sample, Settings};
use crate::meters::{Meter, MeterType};

/// Placeholder replaced by a component's value in its template
pub const PLACEHOLDER: &str = "{}";

/// A meter plus the template its value is inserted into
#[derive(Debug)]
pub struct Component {
    pub meter: Box<dyn Meter>,
    pub template: String,
}

impl Component {
    pub fn new(meter: Box<dyn Meter>, template: &str) -> Self {
        Component {
            meter,
            template: template.to_string(),
        }
    }

    /// Render the meter into its template, substituting `settings.unknown`
    /// when the value is unavailable.
    pub fn render(&self, settings: &Settings) -> String {
        let value = self.meter.render(settings);
        apply_template(&self.template, value.as_deref().unwrap_or(&settings.unknown))
    }
}

/// Replace the first `{}` in `template` with `value`, or append `value` when
/// there is none.
pub fn apply_template(template: &str, value: &str) -> String {
    match template.split_once(PLACEHOLDER) {
        Some((before, after)) => {
            let mut out = String::with_capacity(template.len() + value.len());
            out.push_str(before);
            out.push_str(value);
            out.push_str(after);
            out
        }
        None => format!("{}{}", template, value),
    }
}

/// Status line containing components
#[derive(Debug, Default)]
pub struct StatusLine {
    components: Vec<Component>,
}

impl StatusLine {
    pub fn new() -> Self {
        StatusLine::default()
    }

    /// Build components from settings
    pub fn from_settings(settings: &Settings) -> Self {
        let mut status_line = StatusLine::new();
        for config in &settings.components {
            let meter = MeterType::create_from_config(config, settings);
            status_line.add_component(Component::new(meter, &config.template));
        }
        status_line
    }

    pub fn add_component(&mut self, component: Component) {
        self.components.push(component);
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Update component data (parallel using rayon)
    pub fn update(&mut self, sample: &Sample) {
        self.components.par_iter_mut().for_each(|component| {
            component.meter.update(sample);
        });
    }

    /// Compose the line. Composition stops before the first component that
    /// would take the line past `settings.max_length` bytes.
    pub fn render(&self, settings: &Settings) -> String {
        let mut line = String::new();

        for component in &self.components {
            let piece = component.render(settings);
            if line.len() + piece.len() > settings.max_length {
                log::warn!(
                    "output truncated at {} bytes (max_length {})",
                    line.len(),
                    settings.max_length
                );
                break;
            }
            line.push_str(&piece);
        }

        line
    }
}
