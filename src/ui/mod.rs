// src/ui/mod.rs

use crate::config::Config;
use crate::menu;
use crate::state::AppState;
use gtk4::prelude::*;
use gtk4::Box as GtkBox;
use gtk4::{Application, ApplicationWindow, Button, Frame, Orientation, Paned, ScrolledWindow, TextView};
use std::cell::RefCell;
use std::rc::Rc;

/// Builds and shows the main window. Returns the console view for the logger.
pub fn build_window(app: &Application, config: Config) -> TextView {
    let (width, height) = (config.window_width, config.window_height);
    let state = Rc::new(RefCell::new(AppState::new(config)));

    let window = ApplicationWindow::builder()
        .application(app)
        .title("GlassConv - Glass Composition Converter")
        .default_width(width)
        .default_height(height)
        .build();

    // 1. TOP LEVEL: menu, editors, convert button, console
    let root_vbox = GtkBox::new(Orientation::Vertical, 0);
    window.set_child(Some(&root_vbox));

    // 2. Editors: composition text | mol% element report
    let input_view = TextView::builder()
        .monospace(true)
        .left_margin(10).right_margin(10).top_margin(10).bottom_margin(10)
        .build();
    let output_view = TextView::builder()
        .editable(false).cursor_visible(false).monospace(true)
        .left_margin(10).right_margin(10).top_margin(10).bottom_margin(10)
        .build();

    let paned = Paned::new(Orientation::Horizontal);
    paned.set_start_child(Some(&framed("Composition", &input_view)));
    paned.set_end_child(Some(&framed("mol% element", &output_view)));
    paned.set_position(width / 2);
    paned.set_vexpand(true);

    let convert_button = Button::with_label("Convert");
    convert_button.set_action_name(Some("app.convert"));
    convert_button.set_margin_top(6);
    convert_button.set_margin_bottom(6);

    // Console
    let info_frame = Frame::new(None);
    let console_view = TextView::builder()
        .editable(false).cursor_visible(false).monospace(true)
        .left_margin(10).right_margin(10).top_margin(10).bottom_margin(10)
        .build();
    let scroll_win = ScrolledWindow::builder()
        .min_content_height(150)
        .child(&console_view)
        .build();
    info_frame.set_child(Some(&scroll_win));

    // 3. Menu Bar (registers the actions too)
    let menu_bar = menu::build_menu_and_actions(
        app,
        &window,
        state,
        &input_view,
        &output_view,
        &console_view,
    );

    root_vbox.append(&menu_bar);
    root_vbox.append(&paned);
    root_vbox.append(&convert_button);
    root_vbox.append(&info_frame);

    window.present();
    console_view
}

fn framed(title: &str, view: &TextView) -> Frame {
    let scroll = ScrolledWindow::builder()
        .hexpand(true)
        .vexpand(true)
        .child(view)
        .build();
    let frame = Frame::new(Some(title));
    frame.set_child(Some(&scroll));
    frame
}

/// Whole buffer contents of `view`.
pub fn buffer_text(view: &TextView) -> String {
    let buffer = view.buffer();
    buffer.text(&buffer.start_iter(), &buffer.end_iter(), false).to_string()
}

pub fn log_to_console(console_view: &TextView, message: &str) {
    let buffer = console_view.buffer();
    let mut end_iter = buffer.end_iter();
    if buffer.char_count() > 0 { buffer.insert(&mut end_iter, "\n--------------------------------\n\n"); }
    buffer.insert(&mut end_iter, message);
    let mark = buffer.create_mark(None, &end_iter, false);
    console_view.scroll_to_mark(&mark, 0.0, true, 0.0, 1.0);
    buffer.delete_mark(&mark);
}
