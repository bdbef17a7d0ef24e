//! Writes a [`StorefrontReport`] as text or JSON.

use std::io::Write;

use anyhow::Context;

use crate::config::ReportFormat;
use crate::report::StorefrontReport;

pub fn write(
    report: &StorefrontReport<'_>,
    format: ReportFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match format {
        ReportFormat::Text => write_text(report, out),
        ReportFormat::Json => write_json(report, out),
    }
}

pub fn write_json(report: &StorefrontReport<'_>, out: &mut impl Write) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report).context("serializing report")?;
    writeln!(out)?;
    Ok(())
}

pub fn write_text(report: &StorefrontReport<'_>, out: &mut impl Write) -> anyhow::Result<()> {
    let check = &report.code_check;
    writeln!(out, "1. Activation code registry\n")?;
    writeln!(out, "Is code '{}' used: {}\n", check.code, check.used_before)?;
    writeln!(out, "Is code '{}' used: {}\n", check.code, check.used_after)?;

    writeln!(out, "2. Most expensive product: {}\n", or_none(report.most_expensive))?;
    writeln!(out, "3. Most popular product: {}\n", or_none(report.most_popular))?;
    writeln!(
        out,
        "4. Average age of {} buyers: {}\n",
        report.average_age.product.name(),
        report.average_age.average
    )?;

    writeln!(out, "5. Products and the users who bought them\n")?;
    for entry in &report.product_buyers {
        writeln!(out, "key: {} value: {}\n", entry.product, join(&entry.buyers))?;
    }

    writeln!(out, "6. a) Products sorted by price: {}\n", join(&report.products_by_price))?;
    writeln!(
        out,
        "6. b) Orders sorted by user age, descending: {}\n",
        join(&report.orders_by_user_age_desc)
    )?;

    writeln!(out, "7. Total weight of each order\n")?;
    for entry in &report.order_weights {
        writeln!(out, "order: {} total weight: {}\n", entry.order, entry.total_weight)?;
    }

    Ok(())
}

fn or_none(value: Option<impl core::fmt::Display>) -> String {
    value.map_or_else(|| "none".to_string(), |v| v.to_string())
}

fn join(items: &[impl core::fmt::Display]) -> String {
    let parts: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(", "))
}
