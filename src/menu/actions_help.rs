use gtk4::prelude::*;
use gtk4::{AboutDialog, Application, ApplicationWindow, ButtonsType, License, MessageDialog, MessageType};

const FORMAT_HELP: &str = "\
Glass 1: optional description
1. [SiO2][Si] : [70][wt%][oxide];
2. [Na2O][Na] : [30][wt%][oxide];

Units: [wt%][oxide], [wt%][element], [mol%][oxide]
Several parts per line are separated by ';'.
mol% oxide is used first, then wt% oxide, then wt% element.";

pub fn setup(app: &Application, window: &ApplicationWindow) {

    // --- ABOUT ACTION ---
    let about_action = gtk4::gio::SimpleAction::new("about", None);
    let win_weak = window.downgrade();

    about_action.connect_activate(move |_, _| {
        if let Some(win) = win_weak.upgrade() {
            let dialog = AboutDialog::builder()
                .transient_for(&win)
                .modal(true)
                .program_name("glassconv")
                .version(env!("CARGO_PKG_VERSION"))
                .comments("Converts glass compositions (wt% / mol%, oxide / element) to elemental mol%.")
                .authors(vec!["Rudra".to_string()])
                .website("https://github.com/mavensgroup/glassconv")
                .license_type(License::MitX11)
                .logo_icon_name("applications-science")
                .build();

            dialog.present();
        }
    });
    app.add_action(&about_action);


    // --- INPUT FORMAT ACTION ---
    let format_action = gtk4::gio::SimpleAction::new("help_format", None);
    let win_weak_h = window.downgrade();

    format_action.connect_activate(move |_, _| {
        if let Some(win) = win_weak_h.upgrade() {
            let dialog = MessageDialog::builder()
                .transient_for(&win)
                .modal(true)
                .message_type(MessageType::Info)
                .buttons(ButtonsType::Close)
                .text("Composition Input Format")
                .secondary_text(FORMAT_HELP)
                .build();
            dialog.connect_response(|d, _| d.destroy());
            dialog.present();
        }
    });
    app.add_action(&format_action);
}
