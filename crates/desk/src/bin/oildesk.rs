//! Minimal operational entry point: open the CSV-backed desk and print the
//! dashboard figures. The interactive UI sits on top of the same desk API.

use std::sync::Arc;

use anyhow::Result;

use oildesk_core::{Grade, Pool};
use oildesk_desk::Desk;
use oildesk_pricing::{PricingEngine, SimulatedFeed};
use oildesk_store::CsvStore;

fn main() -> Result<()> {
    oildesk_observability::init();

    let data_dir = std::env::args().nth(1).unwrap_or_else(|| "data".to_string());
    let store = CsvStore::open(&data_dir)?;
    let pricing = PricingEngine::new(Arc::new(SimulatedFeed::new()));
    let desk = Desk::open(store, pricing)?;

    println!("Market prices (per MT):");
    for (grade, pair) in desk.market_prices() {
        println!(
            "  {:<22} current {:>12.2}  previous {:>12.2}  delta {:>+9.2}",
            grade.to_string(),
            pair.current,
            pair.previous,
            pair.delta()
        );
    }

    let overview = desk.overview()?;
    println!();
    println!("Crude stock:      {:>10.2} MT", overview.crude_stock_mt);
    println!("Refined stock:    {:>10.2} MT", overview.refined_stock_mt);
    println!("Active shipments: {:>10}", overview.active_shipments);
    println!("Pending orders:   {:>10}", overview.pending_orders);

    println!();
    println!("Stock by grade (MT):");
    let snapshot = desk.stock()?;
    for grade in Grade::ALL {
        println!(
            "  {:<22} crude {:>10.2}  refined {:>10.2}",
            grade.to_string(),
            snapshot.available(grade, Pool::Crude),
            snapshot.available(grade, Pool::Refined)
        );
    }

    Ok(())
}
