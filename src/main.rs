use glassconv::config::Config;
use glassconv::utils;

#[cfg(not(feature = "gui"))]
#[derive(clap::Parser)]
#[command(name = "glassconv", version, about = "Converts glass compositions to elemental mol%")]
struct Cli {
    /// Composition text file; stdin when omitted
    file: Option<String>,

    /// Print JSON instead of the text report
    #[arg(long)]
    json: bool,
}

#[cfg(not(feature = "gui"))]
fn main() -> std::process::ExitCode {
    use clap::Parser;
    use glassconv::config::OutputFormat;
    use glassconv::io;
    use std::io::Read;
    use std::process::ExitCode;

    let cli = Cli::parse();
    let (mut config, config_msg) = Config::load();
    let _ = utils::logger::init_stderr(config.log_level.to_filter());
    log::debug!("{}", config_msg);
    if cli.json {
        config.output_format = OutputFormat::Json;
    }

    let input = match cli.file {
        Some(path) => io::load_text(&path),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map(|_| buf)
                .map_err(glassconv::Error::from)
        }
    };

    let result = input.and_then(|text| {
        let glasses = glassconv::run(&text)?;
        log::debug!("\n{}", utils::report::conversion_summary(&glasses));
        io::render(&glasses, config.output_format)
    });

    match result {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(feature = "gui")]
fn main() -> gtk4::glib::ExitCode {
    use gtk4::prelude::*;
    use gtk4::Application;

    let app = Application::builder()
        .application_id("org.mavensgroup.glassconv")
        .build();

    app.connect_activate(|app| {
        let (config, config_msg) = Config::load();
        let level = config.log_level.to_filter();
        let console = glassconv::ui::build_window(app, config);
        let _ = utils::logger::init_console(&console, level);
        log::info!("{}", config_msg);
    });
    app.run()
}
