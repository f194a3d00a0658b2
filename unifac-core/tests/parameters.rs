use approx::assert_relative_eq;
use unifac_core::parameter::*;

#[test]
fn from_json_all_compounds() -> Result<(), ParameterError> {
    let parameters = UnifacParameters::from_json(
        &[],
        "tests/test_compounds.json",
        "tests/test_groups.json",
        Some("tests/test_interactions.json"),
    )?;
    assert_eq!(
        parameters.list_available(),
        vec!["Ethanol", "Water", "Benzene", "Toluene"]
    );
    assert_eq!(parameters.groups.len(), 5);
    assert_eq!(parameters.interactions.len(), 6);
    assert_eq!(parameters.compounds.decomposition("Benzene")?["ACH"], 6);
    assert_relative_eq!(parameters.interactions.interaction("CH3", "OH"), 1500.0);
    assert_relative_eq!(parameters.interactions.interaction("ACH", "AC"), 200.0);
    assert_relative_eq!(parameters.interactions.interaction("CH2", "ACH"), 0.0);

    let (r, q) = parameters.groups.r_q("ACH")?;
    assert_relative_eq!(r, 0.5313);
    assert_relative_eq!(q, 0.4);
    assert_relative_eq!(
        parameters.interactions.tau("OH", "CH2", 350.0),
        (-4.0f64).exp(),
        max_relative = 1e-14
    );
    Ok(())
}

#[test]
fn from_json_keeps_query_order() -> Result<(), ParameterError> {
    let parameters = UnifacParameters::from_json(
        &["Water", "Ethanol"],
        "tests/test_compounds.json",
        "tests/test_groups.json",
        None,
    )?;
    assert_eq!(parameters.list_available(), vec!["Water", "Ethanol"]);
    assert!(parameters.interactions.is_empty());
    Ok(())
}

#[test]
fn from_json_duplicates_input() {
    let parameters = UnifacParameters::from_json(
        &["Water", "Water"],
        "tests/test_compounds.json",
        "tests/test_groups.json",
        None,
    );
    assert!(matches!(
        parameters,
        Err(ParameterError::IncompatibleParameters(t))
        if t == "A substance was defined more than once."
    ));
}

#[test]
fn from_json_missing_compound() {
    let parameters = UnifacParameters::from_json(
        &["Water", "Xenon"],
        "tests/test_compounds.json",
        "tests/test_groups.json",
        None,
    );
    match parameters {
        Err(ParameterError::UnknownCompound { name, available }) => {
            assert_eq!(name, "Xenon");
            assert_eq!(available.len(), 4);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn from_json_unknown_group() {
    let parameters = UnifacParameters::from_json(
        &[],
        "tests/test_compounds_unknown_group.json",
        "tests/test_groups.json",
        None,
    );
    assert!(matches!(
        parameters,
        Err(ParameterError::IncompatibleParameters(t))
        if t.contains("HCO")
    ));
}

#[test]
fn from_json_missing_file() {
    let parameters = UnifacParameters::from_json(
        &[],
        "tests/does_not_exist.json",
        "tests/test_groups.json",
        None,
    );
    assert!(matches!(parameters, Err(ParameterError::FileIO(_))));
}

#[test]
fn records_from_json() -> Result<(), ParameterError> {
    let groups = SubgroupRecord::from_json("tests/test_groups.json")?;
    assert_eq!(groups[2], SubgroupRecord::new("OH", 0.92, 1.4));
    let interactions = InteractionRecord::from_json("tests/test_interactions.json")?;
    assert_eq!(interactions[0], InteractionRecord::new("CH3", "ACH", 476.4));
    let compounds = ChemicalRecord::from_json("tests/test_compounds.json")?;
    assert_eq!(compounds[1], ChemicalRecord::from_segments("Water", &["OH"]));
    Ok(())
}
