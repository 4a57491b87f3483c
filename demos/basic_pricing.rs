//! Example: pricing, Greeks, P&L, implied vol and a grid preview
//!
//! Run with: cargo run --example basic_pricing

use bs_engine::prelude::*;

fn main() {
    // Option parameters
    let spot = 100.0;
    let strike = 100.0;
    let time = 1.0; // 1 year
    let rate = 0.05; // 5% risk-free rate
    let vol = 0.20; // 20% volatility
    let purchase_price = 8.0;
    let kind = OptionKind::Call;

    println!("=== Black-Scholes Pricing ===\n");
    println!("Spot:     ${:.2}", spot);
    println!("Strike:   ${:.2}", strike);
    println!("Time:     {:.2} years", time);
    println!("Rate:     {:.1}%", rate * 100.0);
    println!("Vol:      {:.1}%\n", vol * 100.0);

    let value = price(spot, strike, time, rate, vol, kind);
    println!("Option Price: ${:.2}", value);

    let g = greeks(spot, strike, time, rate, vol, kind);
    println!(
        "Delta: {:.4}, Gamma: {:.4}, Vega: {:.4}, Theta: {:.4}, Rho: {:.4}",
        g.delta, g.gamma, g.vega, g.theta, g.rho
    );

    let profit = pnl(spot, strike, time, rate, vol, purchase_price, kind);
    println!("P&L vs ${:.2} cost basis: ${:.2}", purchase_price, profit);

    println!("\n=== Implied Volatility ===\n");
    let market_price = 10.45;
    match implied_volatility(market_price, spot, strike, time, rate, kind) {
        Some(iv) => println!(
            "Market price ${:.2} implies vol: {:.2}%",
            market_price,
            iv * 100.0
        ),
        None => println!("No vol in range reproduces ${:.2}", market_price),
    }

    println!("\n=== Price Grid (Preview) ===\n");
    let s_range: Vec<f64> = (0..10).map(|i| 80.0 + i as f64 * 40.0 / 9.0).collect();
    let vol_range: Vec<f64> = (0..10).map(|i| 0.1 + i as f64 * 0.4 / 9.0).collect();
    let grid = price_grid(&s_range, &vol_range, strike, time, rate, kind);

    print!("{:>10}", grid.row_axis);
    for label in &grid.col_labels {
        print!("{:>9}", label);
    }
    println!();
    for i in 0..grid.nrows().min(5) {
        print!("{:>10}", grid.row_labels[i]);
        for j in 0..grid.ncols() {
            print!("{:>9.2}", grid.get(i, j));
        }
        println!();
    }
}
