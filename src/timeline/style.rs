use std::fmt;

use serde::{Serialize, Serializer};

use crate::model::config::ViewConfig;
use crate::model::task::{Priority, Task, TaskStatus};

/// An RGB color, serialized as `#rrggbb` for the rendering surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Parse a hex color string like "#ef5350" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    // len counts bytes, so also reject multibyte input before slicing
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color(r, g, b))
}

/// Bar fill plus progress fill for one display row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleDescriptor {
    pub fill: Color,
    pub progress_fill: Color,
}

/// The style table mapping row roles to colors
///
/// Completed wins over priority for task rows. Project rows take the style
/// of their aggregated member set, falling back to the project base style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub completed: StyleDescriptor,
    pub high: StyleDescriptor,
    pub medium: StyleDescriptor,
    pub low: StyleDescriptor,
    pub project: StyleDescriptor,
    pub placeholder: StyleDescriptor,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            completed: StyleDescriptor {
                fill: Color(0x4c, 0xaf, 0x50),
                progress_fill: Color(0x2e, 0x7d, 0x32),
            },
            high: StyleDescriptor {
                fill: Color(0xef, 0x53, 0x50),
                progress_fill: Color(0xc6, 0x28, 0x28),
            },
            medium: StyleDescriptor {
                fill: Color(0xff, 0x98, 0x00),
                progress_fill: Color(0xef, 0x6c, 0x00),
            },
            low: StyleDescriptor {
                fill: Color(0x66, 0xbb, 0x6a),
                progress_fill: Color(0x38, 0x8e, 0x3c),
            },
            project: StyleDescriptor {
                fill: Color(0x21, 0x96, 0xf3),
                progress_fill: Color(0x15, 0x65, 0xc0),
            },
            placeholder: StyleDescriptor {
                fill: Color(0xe0, 0xe0, 0xe0),
                progress_fill: Color(0x9e, 0x9e, 0x9e),
            },
        }
    }
}

impl Palette {
    /// Create a palette from view config, falling back to defaults
    ///
    /// Unknown role keys are ignored; a value that does not parse as
    /// `#rrggbb` is skipped with a warning and the default stays.
    pub fn from_config(config: &ViewConfig) -> Self {
        let mut palette = Palette::default();

        // Apply bar fill overrides from [colors]
        for (key, value) in &config.colors {
            match parse_hex_color(value) {
                Some(color) => match key.as_str() {
                    "completed" => palette.completed.fill = color,
                    "high" => palette.high.fill = color,
                    "medium" => palette.medium.fill = color,
                    "low" => palette.low.fill = color,
                    "project" => palette.project.fill = color,
                    "placeholder" => palette.placeholder.fill = color,
                    _ => {}
                },
                None => log::warn!("ignoring invalid color override {} = {:?}", key, value),
            }
        }

        // Apply progress fill overrides from [progress_colors]
        for (key, value) in &config.progress_colors {
            match parse_hex_color(value) {
                Some(color) => match key.as_str() {
                    "completed" => palette.completed.progress_fill = color,
                    "high" => palette.high.progress_fill = color,
                    "medium" => palette.medium.progress_fill = color,
                    "low" => palette.low.progress_fill = color,
                    "project" => palette.project.progress_fill = color,
                    "placeholder" => palette.placeholder.progress_fill = color,
                    _ => {}
                },
                None => log::warn!(
                    "ignoring invalid progress color override {} = {:?}",
                    key,
                    value
                ),
            }
        }

        palette
    }

    /// Style for a task row. Completed status wins over any priority.
    pub fn style_for(&self, priority: Priority, status: TaskStatus) -> StyleDescriptor {
        if status == TaskStatus::Completed {
            return self.completed;
        }
        match priority {
            Priority::High => self.high,
            Priority::Medium => self.medium,
            Priority::Low => self.low,
        }
    }

    /// Style for a project row, derived from its member set
    ///
    /// A non-empty set of all-completed members reads as completed; otherwise
    /// the most urgent member priority decides, with all-low (or empty)
    /// falling back to the project base style.
    pub fn style_for_project(&self, members: &[&Task]) -> StyleDescriptor {
        if !members.is_empty() && members.iter().all(|t| t.status == TaskStatus::Completed) {
            return self.completed;
        }
        match members.iter().map(|t| t.priority).max() {
            Some(Priority::High) => self.high,
            Some(Priority::Medium) => self.medium,
            _ => self.project,
        }
    }
}
