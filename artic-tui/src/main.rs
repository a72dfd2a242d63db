mod app;
mod ui;

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};

#[tokio::main]
async fn main() {
    let log_file = File::create("artic-tui.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut terminal = ratatui::init();
    let result = app::run(&mut terminal).await;
    ratatui::restore();

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }
}
