//! Vanilla Options CLI
//!
//! Non-interactive demo: prices a reference contract with all three models,
//! prints its Greeks, and aggregates a small mixed portfolio.

use vanilla_options::prelude::*;

fn main() {
    println!("Vanilla Options Pricing");
    println!("=======================\n");

    let spot = 100.0;
    let strike = 100.0;
    let expiry = 1.0; // 1 year
    let rate = 0.05;
    let vol = 0.20;

    println!("Contract:");
    println!("  Spot:   ${:.2}", spot);
    println!("  Strike: ${:.2}", strike);
    println!("  Expiry: {:.2} years", expiry);
    println!("  Rate:   {:.1}%", rate * 100.0);
    println!("  Vol:    {:.1}%\n", vol * 100.0);

    let call = match VanillaOption::european(spot, strike, expiry, rate, vol, OptionType::Call) {
        Ok(contract) => contract,
        Err(e) => {
            eprintln!("Invalid contract: {}", e);
            std::process::exit(1);
        }
    };

    println!("European Call Prices:");
    println!("  Black-Scholes: ${:.4}", black_scholes::price(&call));
    println!(
        "  Binomial ({} steps): ${:.4}",
        binomial::DEFAULT_STEPS,
        binomial::price(&call, binomial::DEFAULT_STEPS)
    );
    let mc = monte_carlo::estimate(&call, monte_carlo::DEFAULT_PATHS, monte_carlo::DEFAULT_SEED);
    println!(
        "  Monte Carlo ({} paths): ${:.4} +/- {:.4}",
        monte_carlo::DEFAULT_PATHS,
        mc.price,
        mc.std_error
    );

    let g = greeks::greeks(&call);
    println!("\nCall Greeks:");
    println!("  Delta: {:.4}", g.delta);
    println!("  Gamma: {:.4}", g.gamma);
    println!("  Vega:  {:.4}", g.vega);
    println!("  Theta: {:.4}", g.theta);
    println!("  Rho:   {:.4}", g.rho);

    // Small mixed book: long calls, short puts, one American put
    println!("\nPortfolio:");
    let mut book = Portfolio::new();

    let put = VanillaOption::european(spot, 95.0, expiry, rate, vol, OptionType::Put)
        .unwrap_or_else(|e| {
            eprintln!("Invalid contract: {}", e);
            std::process::exit(1);
        });
    let amer_put = VanillaOption::american(spot, 110.0, expiry, rate, vol, OptionType::Put)
        .unwrap_or_else(|e| {
            eprintln!("Invalid contract: {}", e);
            std::process::exit(1);
        });

    book.add(call, 10.0);
    book.add(put, -5.0);
    let id = book.add(amer_put, 2.0);

    println!("  Positions: {}", book.len());
    println!("  Total value: ${:.2}", book.total_value());
    let net = book.greeks();
    println!(
        "  Net Greeks: delta {:.2}, gamma {:.4}, vega {:.2}, theta {:.2}, rho {:.2}",
        net.delta, net.gamma, net.vega, net.theta, net.rho
    );

    match book.remove(id) {
        Ok(removed) => println!(
            "  Removed position {} (qty {:.0}), value now ${:.2}",
            removed.id(),
            removed.quantity(),
            book.total_value()
        ),
        Err(e) => eprintln!("  Remove failed: {}", e),
    }
}
