use storefront_demo::{DemoConfig, render, report, sample};
use storefront_products::CodeRegistry;

fn main() {
    let config = DemoConfig::from_env();
    storefront_observability::init(config.log_output);
    config.warn_rejected();

    let inputs = sample::sample_inputs();
    let registry = CodeRegistry::new();

    tracing::info!(
        orders = inputs.orders.len(),
        products = inputs.catalog.len(),
        format = ?config.format,
        "running storefront reports"
    );

    let report = report::run(&inputs, &registry);

    let stdout = std::io::stdout();
    if let Err(err) = render::write(&report, config.format, &mut stdout.lock()) {
        tracing::error!(error = %err, "failed to write report");
    }
}
