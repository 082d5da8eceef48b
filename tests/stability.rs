use approx::assert_relative_eq;
use spherical_bessel::*;

const ARGS: [f64; 9] = [-3.0, 0.05, 0.3, 1.0, 2.5, 5.0, 7.5, 10.0, 20.0];

#[test]
fn lowest_orders_match_closed_forms() {
    for x in ARGS {
        let seq = evaluate_upward(x, 1).unwrap();
        assert_eq!(seq.len(), 2);
        assert_relative_eq!(seq[0], x.sin() / x, max_relative = 1e-15);
        assert_relative_eq!(
            seq[1],
            x.sin() / (x * x) - x.cos() / x,
            max_relative = 1e-15
        );
    }
}

#[test]
fn upward_at_zero_is_limiting_sequence() {
    for lmax in [0, 1, 7, 30] {
        let seq = evaluate_upward(0.0_f64, lmax).unwrap();
        assert_eq!(seq.len(), lmax + 1);
        assert_eq!(seq[0], 1.0);
        assert!(seq.as_slice()[1..].iter().all(|&v| v == 0.0));
    }
}

#[test]
fn upward_satisfies_recurrence_exactly() {
    for x in ARGS {
        let lmax = 20;
        let j = evaluate_upward(x, lmax).unwrap();
        for l in 1..lmax {
            let next = (2 * l + 1) as f64 / x * j[l] - j[l - 1];
            assert_eq!(j[l + 1].to_bits(), next.to_bits(), "x={x} l={l}");
        }
    }
}

#[test]
fn downward_order_zero_is_normalized() {
    for x in ARGS {
        for lmax in [0, 4, 12] {
            let j = evaluate_downward(x, lmax).unwrap();
            assert_eq!(j.lmax(), lmax);
            assert_relative_eq!(j[0], x.sin() / x, max_relative = 1e-15);
        }
    }
}

#[test]
fn upward_diverges_where_downward_holds() {
    let table = compare(0.1_f64, &[8], 25).unwrap();
    let row = table.row(8).unwrap();
    let up = row.rel_err_upward.unwrap();
    let down = row.rel_err_downward.unwrap();
    assert!(up > 1.0, "upward error {up:e}");
    assert!(down < 1e-13, "downward error {down:e}");
    assert!(up > 1e10 * down);
}

#[test]
fn both_directions_agree_below_x() {
    for lmax in [3, 8, 25] {
        let table = compare(10.0_f64, &[3], lmax).unwrap();
        let row = table.row(3).unwrap();
        assert!(row.rel_err_upward.unwrap() < 1e-6, "lmax={lmax}");
        assert!(row.rel_err_downward.unwrap() < 1e-6, "lmax={lmax}");
    }
}

#[test]
fn larger_margin_never_hurts() {
    // Errors bottom out at roundoff, where they fluctuate by a few ulps
    const ROUNDOFF_FLOOR: f64 = 1e-14;
    let margins = [2, 4, 8, 15, 30, 60];
    let oracle = AnalyticReference::default();

    for x in [0.1_f64, 0.5, 1.0, 2.0] {
        for lmax in [3, 8, 25] {
            let seqs: Vec<OrderSequence<f64>> = margins
                .iter()
                .map(|&m| evaluate_downward_with(x, lmax, &MillerConfig::with_margin(m)).unwrap())
                .collect();
            for l in 0..=lmax {
                let reference = oracle.reference(l, x).unwrap();
                let errs: Vec<f64> = seqs
                    .iter()
                    .map(|s| relative_error(s[l], reference).unwrap())
                    .collect();
                for (m, pair) in margins.windows(2).zip(errs.windows(2)) {
                    assert!(
                        pair[1] <= pair[0].max(ROUNDOFF_FLOOR),
                        "x={x} lmax={lmax} l={l}: margin {} -> {} raised error {:e} -> {:e}",
                        m[0],
                        m[1],
                        pair[0],
                        pair[1]
                    );
                }
            }
        }
    }
}

#[test]
fn demonstrated_scenario() {
    let expected = [
        (0.1, [9.51851972086557e-06, 9.616310232916448e-10, 2.901200102530191e-16]),
        (1.0, [0.009006581117112515, 9.256115861125816e-05, 2.8264988022147296e-08]),
        (10.0, [-0.03949584498447033, -0.05553451162145218, 0.12557802364956783]),
    ];
    for (x, values) in expected {
        let table = compare(x, &[3, 5, 8], 25).unwrap();
        assert_eq!(table.rows.len(), 3);
        for (row, want) in table.rows.iter().zip(values) {
            assert_relative_eq!(row.reference.unwrap(), want, max_relative = 1e-13);
            assert_relative_eq!(row.downward, want, max_relative = 1e-13);
        }
    }

    // Upward is only trustworthy at x = 10 for these orders
    let near = compare(10.0_f64, &[3, 5, 8], 25).unwrap();
    assert!(near.errors(Direction::Upward).iter().all(|&(_, e)| e < 1e-12));
    let far = compare(0.1_f64, &[3, 5, 8], 25).unwrap();
    assert!(far.errors(Direction::Upward).iter().all(|&(_, e)| e > 1e-8));
}

#[test]
fn downward_rejects_zero_and_comparator_surfaces_it() {
    assert_eq!(evaluate_downward(0.0_f64, 5), Err(Error::SingularInput));
    assert_eq!(compare(0.0_f64, &[0], 5).unwrap_err(), Error::SingularInput);
}

#[test]
fn sum_rule_without_margin_returns_a_value() {
    let config = MillerConfig {
        seed_margin: 0,
        normalization: Normalization::SumRule,
        ..MillerConfig::default()
    };
    let seq = evaluate_downward_with(core::f64::consts::PI, 0, &config).unwrap();
    assert_eq!(seq.len(), 1);
    assert!(seq[0].is_finite());
}

#[test]
fn large_argument_needs_start_above_x() {
    let x = 100.0_f64;
    let oracle = AnalyticReference::default();
    let reference = oracle.reference(5, x).unwrap();

    let short = evaluate_downward(x, 5).unwrap();
    assert!(relative_error(short[5], reference).unwrap() > 1e-3);

    let wide = evaluate_downward_with(x, 5, &MillerConfig::with_margin(130)).unwrap();
    assert!(relative_error(wide[5], reference).unwrap() < 1e-12);
}

#[test]
fn sum_rule_survives_zero_of_j0() {
    let x = core::f64::consts::PI;
    let oracle = AnalyticReference::default();
    let orders = [1, 2, 3, 4, 5];

    let anchored = compare_with(x, &orders, 8, &MillerConfig::default(), &oracle).unwrap();
    let (_, err) = anchored.worst_error(Direction::Downward).unwrap();
    assert!(err > 1e-2, "order-0 anchor error {err:e}");

    let config = MillerConfig {
        normalization: Normalization::SumRule,
        ..MillerConfig::default()
    };
    let summed = compare_with(x, &orders, 8, &config, &oracle).unwrap();
    let (_, err) = summed.worst_error(Direction::Downward).unwrap();
    assert!(err < 1e-13, "sum-rule error {err:e}");
}

#[test]
fn concurrent_calls_match_sequential() {
    let xs = [0.1_f64, 0.7, 1.0, 3.3, 10.0];
    let sequential: Vec<_> = xs.iter().map(|&x| compare_sweep(x, 15).unwrap()).collect();

    let concurrent: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = xs
            .iter()
            .map(|&x| s.spawn(move || compare_sweep(x, 15).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, concurrent);
}

#[test]
fn single_precision_shows_the_same_divergence() {
    let up = evaluate_upward(0.5_f32, 10).unwrap();
    let down = evaluate_downward(0.5_f32, 10).unwrap();
    // j_10(0.5) = 7.064124e-14
    let reference = 7.064124e-14_f32;
    assert!(relative_error(up[10], reference).unwrap() > 1.0);
    assert!(relative_error(down[10], reference).unwrap() < 1e-2);
}
