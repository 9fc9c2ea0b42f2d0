//! Cross-model consistency tests
//!
//! Properties that tie the three pricing models and the analytic Greeks
//! together: parity, convergence, finite-difference agreement, and portfolio
//! linearity.

use vanilla_options::prelude::*;

fn reference_call() -> VanillaOption {
    VanillaOption::european(100.0, 100.0, 1.0, 0.05, 0.20, OptionType::Call).unwrap()
}

fn with_type(base: &VanillaOption, option_type: OptionType) -> VanillaOption {
    VanillaOption {
        option_type,
        ..*base
    }
}

#[test]
fn put_call_parity_across_parameters() {
    let scenarios = [
        (100.0, 100.0, 1.0, 0.05, 0.20),
        (120.0, 100.0, 0.5, 0.03, 0.35),
        (80.0, 100.0, 2.0, 0.01, 0.15),
        (100.0, 130.0, 0.25, -0.01, 0.40),
    ];

    for (spot, strike, expiry, rate, vol) in scenarios {
        let call =
            VanillaOption::european(spot, strike, expiry, rate, vol, OptionType::Call).unwrap();
        let put = with_type(&call, OptionType::Put);

        let lhs = black_scholes::price(&call) - black_scholes::price(&put);
        let rhs = spot - strike * (-rate * expiry).exp();
        assert!(
            (lhs - rhs).abs() < 1e-9,
            "parity violated for S={spot} K={strike}: {lhs} vs {rhs}"
        );
    }
}

#[test]
fn lattice_converges_to_closed_form() {
    let call = reference_call();
    let analytic = black_scholes::price(&call);
    let lattice = binomial::price(&call, 1000);
    assert!(
        (lattice - analytic).abs() / analytic < 0.01,
        "lattice {lattice} vs analytic {analytic}"
    );

    // Error shrinks with depth
    let coarse = (binomial::price(&call, 10) - analytic).abs();
    let fine = (binomial::price(&call, 1000) - analytic).abs();
    assert!(fine < coarse);
}

#[test]
fn monte_carlo_converges_to_closed_form() {
    let call = reference_call();
    let analytic = black_scholes::price(&call);
    let simulated = monte_carlo::price(&call, 1_000_000, 42);
    assert!(
        (simulated - analytic).abs() / analytic < 0.01,
        "mc {simulated} vs analytic {analytic}"
    );
}

#[test]
fn monte_carlo_is_seed_deterministic() {
    let put = with_type(&reference_call(), OptionType::Put);
    let first = monte_carlo::estimate(&put, 100_000, 42);
    let second = monte_carlo::estimate(&put, 100_000, 42);
    assert_eq!(first.price, second.price);
    assert_eq!(first.std_error, second.std_error);
}

#[test]
fn analytic_greeks_match_finite_differences() {
    for option_type in [OptionType::Call, OptionType::Put] {
        let base = with_type(&reference_call(), option_type);
        let price_at = |spot: f64, expiry: f64, rate: f64, vol: f64| {
            let bumped =
                VanillaOption::new(spot, base.strike, expiry, rate, vol, option_type, base.exercise)
                    .unwrap();
            black_scholes::price(&bumped)
        };

        let h = 1e-4;

        // Delta: central difference in spot
        let fd_delta = (price_at(base.spot + h, base.expiry, base.rate, base.vol)
            - price_at(base.spot - h, base.expiry, base.rate, base.vol))
            / (2.0 * h);
        assert!((greeks::delta(&base) - fd_delta).abs() < 1e-6);

        // Gamma: second central difference in spot
        let hg = 0.05;
        let fd_gamma = (price_at(base.spot + hg, base.expiry, base.rate, base.vol)
            - 2.0 * price_at(base.spot, base.expiry, base.rate, base.vol)
            + price_at(base.spot - hg, base.expiry, base.rate, base.vol))
            / (hg * hg);
        assert!((greeks::gamma(&base) - fd_gamma).abs() < 1e-5);

        // Vega: central difference in vol
        let fd_vega = (price_at(base.spot, base.expiry, base.rate, base.vol + h)
            - price_at(base.spot, base.expiry, base.rate, base.vol - h))
            / (2.0 * h);
        assert!((greeks::vega(&base) - fd_vega).abs() < 1e-4);

        // Theta is -dV/dT (price rises with more time on the clock)
        let fd_dv_dt = (price_at(base.spot, base.expiry + h, base.rate, base.vol)
            - price_at(base.spot, base.expiry - h, base.rate, base.vol))
            / (2.0 * h);
        assert!((greeks::theta(&base) + fd_dv_dt).abs() < 1e-4);

        // Rho: central difference in rate
        let fd_rho = (price_at(base.spot, base.expiry, base.rate + h, base.vol)
            - price_at(base.spot, base.expiry, base.rate - h, base.vol))
            / (2.0 * h);
        assert!((greeks::rho(&base) - fd_rho).abs() < 1e-4);
    }
}

#[test]
fn reference_scenario_values() {
    // S=100, K=100, T=1, r=5%, vol=20% call: textbook values
    let call = reference_call();
    assert!((black_scholes::price(&call) - 10.45).abs() < 0.01);

    let g = greeks::greeks(&call);
    assert!((g.delta - 0.6368).abs() < 0.01);
    assert!((g.gamma - 0.0188).abs() < 0.01);
    assert!((g.vega - 37.52).abs() < 0.01);
    assert!((g.theta - (-6.41)).abs() < 0.01);
    assert!((g.rho - 53.23).abs() < 0.01);
}

#[test]
fn portfolio_matches_hand_weighted_sum() {
    let call = reference_call();
    let put = VanillaOption::european(100.0, 95.0, 0.5, 0.03, 0.25, OptionType::Put).unwrap();

    let mut book = Portfolio::new();
    book.add(call, 4.0);
    book.add(put, -7.0);

    let expected = 4.0 * black_scholes::price(&call) - 7.0 * black_scholes::price(&put);
    assert!((book.total_value() - expected).abs() < 1e-9);

    let net = book.greeks();
    let expected_greeks = greeks::greeks(&call)
        .scale(4.0)
        .add(&greeks::greeks(&put).scale(-7.0));
    assert!((net.delta - expected_greeks.delta).abs() < 1e-9);
    assert!((net.gamma - expected_greeks.gamma).abs() < 1e-9);
    assert!((net.vega - expected_greeks.vega).abs() < 1e-9);
    assert!((net.theta - expected_greeks.theta).abs() < 1e-9);
    assert!((net.rho - expected_greeks.rho).abs() < 1e-9);
}

#[test]
fn boundary_near_expiry_price_is_intrinsic() {
    let itm_call =
        VanillaOption::european(110.0, 100.0, 1e-8, 0.05, 0.20, OptionType::Call).unwrap();
    assert!((black_scholes::price(&itm_call) - 10.0).abs() < 1e-4);

    let itm_put = VanillaOption::european(90.0, 100.0, 1e-8, 0.05, 0.20, OptionType::Put).unwrap();
    assert!((black_scholes::price(&itm_put) - 10.0).abs() < 1e-4);
}

#[test]
fn empty_portfolio_remove_is_an_error() {
    let mut book = Portfolio::new();
    let id = book.add_default(reference_call());
    book.remove(id).unwrap();

    let result = book.remove(id);
    assert!(matches!(result, Err(PricingError::PositionNotFound(_))));
}
