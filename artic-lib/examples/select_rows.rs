//! Cross-page selection: loads a page, then selects the first 15 artworks.
//!
//! Run with: cargo run --example select_rows

use std::sync::Arc;

use artic_lib::ArticClient;
use artic_lib::table::ApiSource;
use artic_lib::table::TableController;
use simplelog::ColorChoice;
use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::TermLogger;
use simplelog::TerminalMode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = TermLogger::init(
        LevelFilter::Warn,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );

    let source = Arc::new(ApiSource::new(ArticClient::new()));
    let mut table = TableController::new(source);

    table.load_page(1, 10).await;
    println!(
        "page 1 loaded, collection holds {} artworks",
        table.pagination().total_records()
    );

    let count = table.select_first_n("15").await?;
    println!("selected the first {} artworks:", count);
    for artwork in table.selection().items() {
        println!("{:>8}  {}", artwork.id, artwork.title);
    }

    Ok(())
}
