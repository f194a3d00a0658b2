use approx::assert_relative_eq;
use std::sync::Arc;
use unifac::parameter::{ParameterError, UnifacParameters};
use unifac::{
    builtin_parameters, estimate_diffusion, list_available_compounds, DiffusivityEstimator,
    UnifacError, UnifacResult,
};

#[test]
fn ethanol_water_regression() -> UnifacResult<()> {
    let result = estimate_diffusion("Ethanol", "Water", 0.3, 298.15, Some(1.2e-9))?;
    println!("{result}");
    assert_relative_eq!(
        result.diffusion_coefficient,
        5.611059186702369e-6,
        max_relative = 1e-12
    );
    let error = result.relative_error_percent.unwrap();
    assert!(error >= 0.0);
    assert_relative_eq!(error, 467488.26555853075, max_relative = 1e-10);
    Ok(())
}

#[test]
fn all_pairs_give_finite_positive_values() -> UnifacResult<()> {
    let compounds = list_available_compounds()?;
    for c1 in &compounds {
        for c2 in &compounds {
            for x1 in [0.01, 0.3, 0.5, 0.7, 0.99] {
                for t in [250.0, 298.15, 400.0] {
                    let d = estimate_diffusion(c1, c2, x1, t, None)?.diffusion_coefficient;
                    assert!(
                        d.is_finite() && d > 0.0,
                        "{c1}/{c2} at x1={x1}, T={t}: D={d}"
                    );
                }
            }
        }
    }
    Ok(())
}

#[test]
fn swapping_components() -> UnifacResult<()> {
    // The blend weights ln(gamma_1) with x2 and ln(gamma_2) with x1, so
    // swapping both the compounds and the composition gives the same estimate
    // up to rounding.
    for (c1, c2, x1) in [
        ("Ethanol", "Water", 0.3),
        ("Toluene", "Acetaldehyde", 0.8),
        ("Propylene", "MethylEthylamine", 0.45),
    ] {
        let d = estimate_diffusion(c1, c2, x1, 310.0, None)?.diffusion_coefficient;
        let d_swapped = estimate_diffusion(c2, c1, 1.0 - x1, 310.0, None)?.diffusion_coefficient;
        assert!(d_swapped.is_finite() && d_swapped > 0.0);
        assert_relative_eq!(d, d_swapped, max_relative = 1e-10);
    }
    Ok(())
}

#[test]
fn composition_dependence() -> UnifacResult<()> {
    let d1 = estimate_diffusion("Ethanol", "Water", 0.2, 298.15, None)?;
    let d2 = estimate_diffusion("Ethanol", "Water", 0.8, 298.15, None)?;
    assert_ne!(d1.diffusion_coefficient, d2.diffusion_coefficient);
    Ok(())
}

#[test]
fn identical_inputs_give_identical_results() -> UnifacResult<()> {
    let r1 = estimate_diffusion("Toluene", "Water", 0.42, 315.0, Some(2.0e-9))?;
    let r2 = estimate_diffusion("Toluene", "Water", 0.42, 315.0, Some(2.0e-9))?;
    assert_eq!(
        r1.diffusion_coefficient.to_bits(),
        r2.diffusion_coefficient.to_bits()
    );
    assert_eq!(r1, r2);
    Ok(())
}

#[test]
fn reference_value() -> UnifacResult<()> {
    let result = estimate_diffusion("Ethanol", "Water", 0.3, 298.15, None)?;
    assert!(result.relative_error_percent.is_none());

    let result = estimate_diffusion("Ethanol", "Water", 0.3, 298.15, Some(0.0));
    assert!(matches!(result, Err(UnifacError::InvalidReferenceValue(_))));

    // signed reference values are divided as given
    let result = estimate_diffusion("Ethanol", "Water", 0.3, 298.15, Some(-1.2e-9))?;
    assert_relative_eq!(
        result.diffusion_coefficient,
        5.611059186702369e-6,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        result.relative_error_percent.unwrap(),
        -467688.26555853075,
        max_relative = 1e-10
    );
    Ok(())
}

#[test]
fn unknown_compound() {
    let result = estimate_diffusion("Xenon", "Water", 0.5, 298.15, None);
    match result {
        Err(UnifacError::ParameterError(ParameterError::UnknownCompound { name, available })) => {
            assert_eq!(name, "Xenon");
            assert!(available.contains(&"Water".to_string()));
        }
        other => panic!("unexpected result: {other:?}"),
    }
    let err = estimate_diffusion("Water", "Xenon", 0.5, 298.15, None).unwrap_err();
    assert!(err.to_string().contains("Available compounds"));
    assert!(err.to_string().contains("Ethanol"));
}

#[test]
fn invalid_state() {
    for (x1, t) in [
        (0.0, 298.15),
        (1.0, 298.15),
        (-0.1, 298.15),
        (f64::NAN, 298.15),
        (0.5, 0.0),
        (0.5, -20.0),
    ] {
        let result = estimate_diffusion("Ethanol", "Water", x1, t, None);
        assert!(
            matches!(result, Err(UnifacError::DomainError(..))),
            "x1={x1}, T={t}"
        );
    }
}

#[test]
fn table_consistency() -> UnifacResult<()> {
    let parameters = builtin_parameters()?;
    for record in parameters.compounds.records() {
        assert!(record.segment_map(&parameters.groups).is_ok());
    }
    Ok(())
}

#[test]
fn parameters_from_json() -> UnifacResult<()> {
    let parameters = UnifacParameters::from_json(
        &["Ethanol", "Water", "1-Propanol"],
        "tests/parameters/compounds.json",
        "tests/parameters/groups.json",
        Some("tests/parameters/interactions.json"),
    )?;
    let estimator = DiffusivityEstimator::new(Arc::new(parameters));
    assert_eq!(
        estimator.list_available(),
        vec!["Ethanol", "Water", "1-Propanol"]
    );

    // same subgroups and interactions as the built-in set for this pair
    let from_json = estimator.estimate("Ethanol", "Water", 0.3, 298.15, None)?;
    let builtin = estimate_diffusion("Ethanol", "Water", 0.3, 298.15, None)?;
    assert_relative_eq!(
        from_json.diffusion_coefficient,
        builtin.diffusion_coefficient,
        max_relative = 1e-14
    );

    let propanol = estimator.estimate("1-Propanol", "Water", 0.3, 298.15, None)?;
    assert!(propanol.diffusion_coefficient > 0.0);

    assert!(matches!(
        estimator.estimate("Toluene", "Water", 0.3, 298.15, None),
        Err(UnifacError::ParameterError(ParameterError::UnknownCompound { .. }))
    ));
    Ok(())
}

#[test]
fn shared_between_threads() -> UnifacResult<()> {
    let estimator = DiffusivityEstimator::new(builtin_parameters()?);
    let reference = estimator.estimate("Benzene", "Ethanol", 0.5, 300.0, None)?;
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| estimator.estimate("Benzene", "Ethanol", 0.5, 300.0, None)))
            .collect();
        for h in handles {
            let result = h.join().unwrap().unwrap();
            assert_eq!(result, reference);
        }
    });
    Ok(())
}
