use std::io::Write;

use anyhow::Context;

use gildedrose_inventory::{Shop, Violation, violations};

use crate::cli::{CommandLine, OutputFormat};
use crate::fixture::fixture_items;
use crate::report::{BANNER, DayReport, render_text_day};

/// Simulate the fixture inventory for `cli.days` days, writing day 0 through
/// day N to `out`.
pub fn run(cli: &CommandLine, out: &mut impl Write) -> anyhow::Result<()> {
    let mut shop = Shop::new(fixture_items());

    tracing::info!(days = cli.days, items = shop.items().len(), "starting simulation");

    if cli.format == OutputFormat::Text {
        writeln!(out, "{BANNER}").context("failed to write banner")?;
    }

    for day in 0..=cli.days {
        if day > 0 {
            advance(&mut shop);
        }
        if cli.validate {
            for (name, violation) in shop_violations(&shop) {
                tracing::warn!(day = shop.day(), item = %name, %violation, "item failed validity check");
            }
        }
        match cli.format {
            OutputFormat::Text => {
                out.write_all(render_text_day(day, shop.items()).as_bytes())
                    .with_context(|| format!("failed to write day {day}"))?;
            }
            OutputFormat::Json => {
                let line = serde_json::to_string(&DayReport::new(day, shop.items()))
                    .with_context(|| format!("failed to serialize day {day}"))?;
                writeln!(out, "{line}").with_context(|| format!("failed to write day {day}"))?;
            }
        }
    }

    out.flush().context("failed to flush output")?;
    tracing::info!(day = shop.day(), "simulation finished");
    Ok(())
}

/// Every failed validity check in the shop, paired with the item name.
pub fn shop_violations(shop: &Shop) -> Vec<(String, Violation)> {
    shop.items()
        .iter()
        .flat_map(|item| {
            violations(&item.snapshot())
                .into_iter()
                .map(|v| (item.name().to_string(), v))
        })
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn advance(shop: &mut Shop) {
    shop.update_quality();
}

#[cfg(feature = "parallel")]
fn advance(shop: &mut Shop) {
    shop.update_quality_par();
}
