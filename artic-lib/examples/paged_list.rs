//! Walks the artworks collection page by page and prints the first pages.
//!
//! Run with: cargo run --example paged_list

use artic_lib::ArticClient;
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

    let client = ArticClient::new();
    let mut pages = client.artworks().page_size(10).into_pages();

    let mut fetched = 0;
    while let Some(page) = pages.next().await {
        let page = page?;
        println!(
            "-- page {} ({} of {} artworks)",
            page.page(),
            page.len(),
            page.total()
        );
        for artwork in page.records() {
            println!("{:>8}  {}", artwork.id, artwork.title);
        }

        fetched += 1;
        if fetched == 3 {
            break;
        }
    }

    Ok(())
}
