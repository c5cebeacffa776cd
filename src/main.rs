use anyhow::Result;

use checkout_locale::{app::App, shared::logging};

#[tokio::main]
async fn main() -> Result<()> {
    // Logging is best effort; the UI still works without a log file
    if let Err(e) = logging::init() {
        eprintln!("Warning: logging disabled: {e}");
    }

    // Initialize the application
    let mut app = App::new();

    // Run the TUI
    app.run().await?;

    Ok(())
}
