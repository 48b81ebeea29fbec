use std::sync::Arc;
use std::thread;

use approx::assert_relative_eq;
use beam_core::calculations::{
    analyze, sample, AnalysisCondition, Beam, Equation, Quantity, Side, TwoSpanReactions,
};
use beam_core::{BeamAnalysis, CalcError, Material};

fn material() -> Arc<Material> {
    Arc::new(Material::new("CLT 5s", [("EI", 1.0e9), ("GA", 5.0e7), ("j2", 1.0)]))
}

fn equation(
    beam: &Beam,
    load: f64,
    condition: AnalysisCondition,
    quantity: Quantity,
) -> Equation {
    analyze(beam, load, condition, quantity).unwrap().equation
}

#[test]
fn simply_supported_six_metre_span() {
    let beam = Beam::single_span(6.0, material()).unwrap();
    let c = AnalysisCondition::SimplySupported;

    let moment = equation(&beam, 10.0, c, Quantity::BendingMoment);
    assert_relative_eq!(moment.evaluate(3.0, None).unwrap().y, -45.0);

    let shear = equation(&beam, 10.0, c, Quantity::ShearForce);
    assert_relative_eq!(shear.evaluate(0.0, None).unwrap().y, 30.0);
    assert_relative_eq!(shear.evaluate(6.0, None).unwrap().y, -30.0);
}

#[test]
fn two_span_four_and_six_metres() {
    let beam = Beam::new(4.0, 6.0, material()).unwrap();
    let r = TwoSpanReactions::solve(4.0, 6.0, 5.0);
    assert_relative_eq!(r.m1, -17.5);
    assert_relative_eq!(r.r1, 5.625);
    assert_relative_eq!(r.r3, 12.083_333_333_333_334, max_relative = 1e-12);
    assert_relative_eq!(r.r2, 32.291_666_666_666_664, max_relative = 1e-12);

    let shear = equation(&beam, 5.0, AnalysisCondition::TwoSpanUnequal, Quantity::ShearForce);
    assert_relative_eq!(shear.evaluate(4.0, Some(Side::Left)).unwrap().y, -14.375);
    assert_relative_eq!(
        shear.evaluate(4.0, Some(Side::Right)).unwrap().y,
        17.916_666_666_666_664,
        max_relative = 1e-12
    );
    assert_relative_eq!(shear.evaluate(0.0, None).unwrap().y, r.r1);
    assert_relative_eq!(
        shear.evaluate(10.0, None).unwrap().y,
        r.r1 + r.r2 - 50.0,
        max_relative = 1e-12
    );
}

#[test]
fn moment_vanishes_at_free_ends() {
    let beam = Beam::new(3.5, 5.25, material()).unwrap();
    for condition in AnalysisCondition::ALL {
        let moment = equation(&beam, 7.0, condition, Quantity::BendingMoment);
        let total = beam.total_length(condition);
        assert_eq!(moment.evaluate(0.0, None).unwrap().y, 0.0);
        assert!(moment.evaluate(total, None).unwrap().y.abs() < 1e-9);
    }
}

#[test]
fn two_span_moment_branches_agree_at_support() {
    for (l1, l2, w) in [(4.0, 6.0, 5.0), (2.5, 7.5, 1.2), (6.0, 3.0, 12.0)] {
        let r = TwoSpanReactions::solve(l1, l2, w);
        let left = -(r.r1 * l1 - w * l1 * l1 / 2.0);
        let right = -(r.r1 * l1 + r.r2 * (l1 - l1) - w * l1 * l1 / 2.0);
        assert_relative_eq!(left, right, max_relative = 1e-9);
        assert_relative_eq!(left, -r.m1, max_relative = 1e-9);
    }
}

#[test]
fn two_span_shear_jumps_by_interior_reaction() {
    let beam = Beam::new(2.5, 7.5, material()).unwrap();
    let shear = equation(&beam, 1.2, AnalysisCondition::TwoSpanUnequal, Quantity::ShearForce);
    let left = shear.evaluate(2.5, Some(Side::Left)).unwrap().y;
    let right = shear.evaluate(2.5, Some(Side::Right)).unwrap().y;
    let r = TwoSpanReactions::solve(2.5, 7.5, 1.2);

    assert_ne!(left, right);
    assert_relative_eq!(right - left, r.r2, max_relative = 1e-9);
    assert!(matches!(
        shear.evaluate(2.5, None),
        Err(CalcError::InvalidArgument { .. })
    ));
}

#[test]
fn every_equation_rejects_positions_outside_domain() {
    let beam = Beam::new(4.0, 6.0, material()).unwrap();
    for condition in AnalysisCondition::ALL {
        let total = beam.total_length(condition);
        for quantity in Quantity::ALL {
            let eq = equation(&beam, 5.0, condition, quantity);
            for x in [-0.001, total + 0.001, f64::NAN] {
                let err = eq.evaluate(x, Some(Side::Left)).unwrap_err();
                assert_eq!(
                    err.error_code(),
                    "INVALID_ARGUMENT",
                    "{:?} {:?} x={}",
                    condition,
                    quantity,
                    x
                );
            }
        }
    }
}

#[test]
fn sampled_shear_plots_vertical_jump() {
    let beam = Beam::new(4.0, 6.0, material()).unwrap();
    let c = AnalysisCondition::TwoSpanUnequal;
    let shear = equation(&beam, 5.0, c, Quantity::ShearForce);

    let samples: Vec<_> = sample(&beam, c, 10).unwrap().collect();
    let points: Vec<_> = samples
        .iter()
        .map(|&s| shear.evaluate_sample(s).unwrap())
        .collect();

    let support: Vec<_> = points.iter().filter(|p| p.x == 4.0).collect();
    assert_eq!(support.len(), 2);
    assert_relative_eq!(support[0].y, -14.375);
    assert_relative_eq!(support[1].y, 17.916_666_666_666_664, max_relative = 1e-12);
}

#[test]
fn sampled_deflection_has_no_jump() {
    let beam = Beam::new(4.0, 6.0, material()).unwrap();
    let result = BeamAnalysis::default()
        .get_deflection(&beam, 5.0, AnalysisCondition::TwoSpanUnequal)
        .unwrap();
    let diagram = result.diagram(40).unwrap();

    let support: Vec<_> = diagram.points.iter().filter(|p| p.x == 4.0).collect();
    assert_eq!(support.len(), 2);
    assert_relative_eq!(support[0].y, support[1].y);
    assert!(diagram.min.y < 0.0);
    assert!(diagram.min.x > 4.0);
}

#[test]
fn equations_evaluate_across_threads() {
    let beam = Beam::new(4.0, 6.0, material()).unwrap();
    let eq = Arc::new(equation(
        &beam,
        5.0,
        AnalysisCondition::TwoSpanUnequal,
        Quantity::Deflection,
    ));
    let expected: Vec<f64> = (0..=10)
        .map(|i| eq.evaluate(i as f64, Some(Side::Right)).unwrap().y)
        .collect();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let eq = Arc::clone(&eq);
            thread::spawn(move || {
                (0..=10)
                    .map(|i| eq.evaluate(i as f64, Some(Side::Right)).unwrap().y)
                    .collect::<Vec<f64>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
