use crmlog::runtime::{boot, run};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    boot::init_logging();
    let config = boot::boot()?;
    let stats = run::run(&config).map_err(|e| {
        tracing::error!("Failed to process log file: {}", e);
        e
    })?;
    tracing::debug!(?stats, "crmlog: done");
    Ok(())
}
