// src/utils/logger.rs

use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

static STDERR_LOGGER: StderrLogger = StderrLogger;

struct StderrLogger;

/// Command-line logger: one line per record on stderr.
pub fn init_stderr(level: LevelFilter) -> Result<(), SetLoggerError> {
  log::set_logger(&STDERR_LOGGER).map(|()| log::set_max_level(level))
}

fn level_icon(level: Level) -> (&'static str, &'static str) {
  match level {
    Level::Error => ("🔴", "error"),
    Level::Warn => ("🟠", "warn"),
    Level::Info => ("🔵", "info"),
    Level::Debug => ("⚪", "debug"),
    Level::Trace => ("▫️", "debug"),
  }
}

impl log::Log for StderrLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= log::max_level()
  }

  fn log(&self, record: &Record) {
    if self.enabled(record.metadata()) {
      let (icon, _) = level_icon(record.level());
      eprintln!("{}  {}", icon, record.args());
    }
  }

  fn flush(&self) {}
}

#[cfg(feature = "gui")]
pub use console::init as init_console;

#[cfg(feature = "gui")]
mod console {
  use super::level_icon;
  use gtk4::prelude::*;
  use gtk4::{glib, TextView};
  use log::{LevelFilter, Metadata, Record, SetLoggerError};
  use std::sync::OnceLock;

  static LOG_VIEW: OnceLock<glib::SendWeakRef<TextView>> = OnceLock::new();
  static LOGGER: GtkLogger = GtkLogger;

  struct GtkLogger;

  /// Routes log records into the console view, colored by level.
  pub fn init(view: &TextView, level: LevelFilter) -> Result<(), SetLoggerError> {
    let buffer = view.buffer();
    let tag_table = buffer.tag_table();

    for (name, color) in [
      ("error", "#ff4444"),
      ("warn", "#ffbb33"),
      ("info", "#33b5e5"),
      ("debug", "#aaaaaa"),
    ] {
      if tag_table.lookup(name).is_none() {
        let tag = gtk4::TextTag::new(Some(name));
        tag.set_property("foreground", color);
        if name == "error" {
          tag.set_property("weight", 700);
        }
        tag_table.add(&tag);
      }
    }

    let _ = LOG_VIEW.set(view.downgrade().into());
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
  }

  impl log::Log for GtkLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
      metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
      if self.enabled(record.metadata()) {
        let (icon, tag_name) = level_icon(record.level());
        let msg = format!("{}  {}\n", icon, record.args());

        glib::MainContext::default().spawn_local(async move {
          if let Some(weak_ref) = LOG_VIEW.get() {
            if let Some(view) = weak_ref.upgrade() {
              let buffer = view.buffer();
              let mut end = buffer.end_iter();

              buffer.insert_with_tags_by_name(&mut end, &msg, &[tag_name]);

              // Auto-scroll
              let mark = buffer.create_mark(None, &buffer.end_iter(), false);
              view.scroll_to_mark(&mark, 0.0, true, 0.0, 1.0);
              buffer.delete_mark(&mark);
            }
          }
        });
      }
    }

    fn flush(&self) {}
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_level_icons() {
    assert_eq!(level_icon(Level::Error).1, "error");
    assert_eq!(level_icon(Level::Trace).1, "debug");
  }
}
