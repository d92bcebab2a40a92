// src/menu/mod.rs

use crate::state::AppState;
use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, TextView};
use std::cell::RefCell;
use std::rc::Rc;

pub mod actions_file;
pub mod actions_help;
pub mod actions_tools;

pub fn build_menu_and_actions(
  app: &Application,
  window: &ApplicationWindow,
  state: Rc<RefCell<AppState>>,
  input_view: &TextView,   // Composition text
  output_view: &TextView,  // mol% report
  console_view: &TextView, // Summaries
) -> gtk4::Box {
  // Register Actions
  actions_file::setup(app, window, state.clone(), input_view);
  actions_tools::setup(app, state.clone(), input_view, output_view, console_view);
  actions_help::setup(app, window);

  // Keyboard Shortcuts
  app.set_accels_for_action("app.open", &["<Primary>o"]);
  app.set_accels_for_action("app.save_as", &["<Primary><Shift>s"]);
  app.set_accels_for_action("app.quit", &["<Primary>q"]);
  app.set_accels_for_action("app.convert", &["<Primary>Return"]);
  app.set_accels_for_action("app.clear", &["<Primary><Shift>k"]);

  // --- BUILD MENU BAR ---
  let menu_bar = gtk4::Box::new(gtk4::Orientation::Horizontal, 0);
  let root_model = gtk4::gio::Menu::new();

  // --- FILE MENU ---
  let file_menu = gtk4::gio::Menu::new();
  file_menu.append(Some("Open Composition..."), Some("app.open"));
  file_menu.append(Some("Save Report As..."), Some("app.save_as"));
  file_menu.append(Some("Quit"), Some("app.quit"));
  root_model.append_submenu(Some("File"), &file_menu);

  // --- TOOLS MENU ---
  let tools_menu = gtk4::gio::Menu::new();
  tools_menu.append(Some("Convert to mol% Element"), Some("app.convert"));
  tools_menu.append(Some("Clear"), Some("app.clear"));
  root_model.append_submenu(Some("Tools"), &tools_menu);

  // --- HELP MENU ---
  let help_menu = gtk4::gio::Menu::new();
  help_menu.append(Some("Input Format"), Some("app.help_format"));
  help_menu.append(Some("About"), Some("app.about"));
  root_model.append_submenu(Some("Help"), &help_menu);

  let popover_bar = gtk4::PopoverMenuBar::from_model(Some(&root_model));
  menu_bar.append(&popover_bar);

  menu_bar
}
