use solid_demos::shell::config::DemoConfig;
use solid_demos::shell::{demo, logging};

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::default();
    logging::init_logging(&config.log_filter)?;

    let report = demo::run(&config);
    demo::log_summary(&report);
    Ok(())
}
