use gtk4::prelude::*;
use gtk4::{Application, TextView};
use std::rc::Rc;
use std::cell::RefCell;
use crate::state::AppState;
use crate::ui::{buffer_text, log_to_console};

pub fn setup(
    app: &Application,
    state: Rc<RefCell<AppState>>,
    input_view: &TextView,
    output_view: &TextView,
    console_view: &TextView,
) {
    // --- CONVERT ---
    let convert_action = gtk4::gio::SimpleAction::new("convert", None);
    let state_weak = Rc::downgrade(&state);
    let input_weak = input_view.downgrade();
    let output_weak = output_view.downgrade();
    let console_weak = console_view.downgrade();

    convert_action.connect_activate(move |_, _| {
        if let Some(st) = state_weak.upgrade() {
            if let (Some(input), Some(output)) = (input_weak.upgrade(), output_weak.upgrade()) {
                let text = buffer_text(&input);
                let mut s = st.borrow_mut();

                match s.convert(&text) {
                    Ok(report) => {
                        output.buffer().set_text(&report);
                        if let (Some(con), Some(summary)) = (console_weak.upgrade(), s.summary()) {
                            log_to_console(&con, &summary);
                        }
                    }
                    Err(e) => {
                        // The offending fragment is in the message
                        output.buffer().set_text("");
                        log::error!("{}", e);
                    }
                }
            }
        }
    });
    app.add_action(&convert_action);

    // --- CLEAR ---
    let clear_action = gtk4::gio::SimpleAction::new("clear", None);
    let state_weak = Rc::downgrade(&state);
    let input_weak = input_view.downgrade();
    let output_weak = output_view.downgrade();

    clear_action.connect_activate(move |_, _| {
        if let Some(input) = input_weak.upgrade() { input.buffer().set_text(""); }
        if let Some(output) = output_weak.upgrade() { output.buffer().set_text(""); }
        if let Some(st) = state_weak.upgrade() {
            let mut s = st.borrow_mut();
            s.last_result = None;
            s.file_name.clear();
        }
    });
    app.add_action(&clear_action);
}
