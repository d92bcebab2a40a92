use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, FileChooserAction, FileChooserNative, FileFilter, ResponseType, TextView};
use std::cell::RefCell;
use std::rc::Rc;
use crate::io;
use crate::state::AppState;

pub fn setup(
    app: &Application,
    window: &ApplicationWindow,
    state: Rc<RefCell<AppState>>,
    input_view: &TextView,
) {

    // --- OPEN ACTION ---
    let open_action = gtk4::gio::SimpleAction::new("open", None);
    let win_weak = window.downgrade();
    let state_weak = Rc::downgrade(&state);
    let input_weak = input_view.downgrade();

    open_action.connect_activate(move |_, _| {
        let win = match win_weak.upgrade() { Some(w) => w, None => return };

        let dialog = FileChooserNative::new(
            Some("Open Composition Text"),
            Some(&win),
            FileChooserAction::Open,
            Some("Open"),
            Some("Cancel"),
        );

        let filter_text = FileFilter::new();
        filter_text.set_name(Some("Text Files"));
        filter_text.add_pattern("*.txt");
        filter_text.add_pattern("*.dat");
        filter_text.add_pattern("*.md");
        dialog.add_filter(&filter_text);

        let filter_all = FileFilter::new();
        filter_all.set_name(Some("All Files"));
        filter_all.add_pattern("*");
        dialog.add_filter(&filter_all);

        let state_weak_inner = state_weak.clone();
        let input_weak_inner = input_weak.clone();

        dialog.connect_response(move |d, response| {
            if response == ResponseType::Accept {
                if let Some(path) = d.file().and_then(|f| f.path()) {
                    let path_str = path.to_string_lossy().to_string();
                    match io::load_text(&path_str) {
                        Ok(text) => {
                            if let Some(input) = input_weak_inner.upgrade() {
                                input.buffer().set_text(&text);
                            }
                            if let Some(st) = state_weak_inner.upgrade() {
                                st.borrow_mut().file_name = path
                                    .file_name()
                                    .unwrap_or_default()
                                    .to_string_lossy()
                                    .to_string();
                            }
                            log::info!("Loaded {}", path_str);
                        }
                        Err(e) => log::error!("Error loading file: {}", e),
                    }
                }
            }
            d.destroy();
        });
        dialog.show();
    });
    app.add_action(&open_action);


    // --- SAVE AS ACTION ---
    let save_action = gtk4::gio::SimpleAction::new("save_as", None);
    let win_weak_s = window.downgrade();
    let state_weak_s = Rc::downgrade(&state);

    save_action.connect_activate(move |_, _| {
        let win = match win_weak_s.upgrade() { Some(w) => w, None => return };
        let dialog = FileChooserNative::new(Some("Save Report As"), Some(&win), FileChooserAction::Save, Some("Save"), Some("Cancel"));

        let filter_txt = FileFilter::new(); filter_txt.set_name(Some("Text Report (*.txt)")); filter_txt.add_pattern("*.txt"); dialog.add_filter(&filter_txt);
        let filter_json = FileFilter::new(); filter_json.set_name(Some("JSON Report (*.json)")); filter_json.add_pattern("*.json"); dialog.add_filter(&filter_json);
        dialog.set_current_name("mol_percent.txt");

        let state_weak_inner = state_weak_s.clone();
        dialog.connect_response(move |d, response| {
            if response == ResponseType::Accept {
                if let (Some(path), Some(st)) = (d.file().and_then(|f| f.path()), state_weak_inner.upgrade()) {
                    let path_str = path.to_string_lossy().to_string();
                    match st.borrow().save_report(&path_str) {
                        Ok(true) => log::info!("Report saved to {}", path_str),
                        Ok(false) => log::warn!("Nothing to save yet, run Convert first"),
                        Err(e) => log::error!("Failed to save report: {}", e),
                    }
                }
            }
            d.destroy();
        });
        dialog.show();
    });
    app.add_action(&save_action);


    // --- QUIT ACTION ---
    let quit_action = gtk4::gio::SimpleAction::new("quit", None);
    let app_weak = app.downgrade();
    quit_action.connect_activate(move |_, _| {
        if let Some(app) = app_weak.upgrade() {
            app.quit();
        }
    });
    app.add_action(&quit_action);
}
