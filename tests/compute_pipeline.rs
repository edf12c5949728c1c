//! End-to-end checks: raw parameters and CSV batches through validation and
//! projection.

use approx::assert_abs_diff_eq;
use compounding_calculator::params::load_scenarios_from_reader;
use compounding_calculator::{
    compute, CompoundingFrequency, ContributionFrequency, InvestmentParameters, ScenarioRunner,
    Violation,
};

fn params(
    initial: f64,
    rate: f64,
    compounding: CompoundingFrequency,
    contribution: f64,
    contribution_frequency: ContributionFrequency,
    months: f64,
) -> InvestmentParameters {
    InvestmentParameters {
        initial_investment: initial,
        annual_interest_rate_percent: rate,
        compounding_frequency: compounding,
        contribution_amount: contribution,
        contribution_frequency,
        duration_months: months,
    }
}

#[test]
fn zero_rate_without_contributions_keeps_principal() {
    for compounding in [
        CompoundingFrequency::Yearly,
        CompoundingFrequency::Monthly,
        CompoundingFrequency::Weekly,
    ] {
        let none = compute(params(750.0, 0.0, compounding, 200.0, ContributionFrequency::None, 37.0)).unwrap();
        assert_abs_diff_eq!(none.future_value, 750.0, epsilon = 1e-9);

        let zero_amount = compute(params(750.0, 0.0, compounding, 0.0, ContributionFrequency::Weekly, 37.0)).unwrap();
        assert_abs_diff_eq!(zero_amount.future_value, 750.0, epsilon = 1e-9);
    }
}

#[test]
fn zero_rate_monthly_contributions_sum_exactly() {
    for years in [1.0, 2.5, 10.0] {
        let result = compute(params(
            300.0,
            0.0,
            CompoundingFrequency::Monthly,
            25.0,
            ContributionFrequency::Monthly,
            12.0 * years,
        ))
        .unwrap();
        assert_abs_diff_eq!(result.future_value, 300.0 + 25.0 * 12.0 * years, epsilon = 1e-9);
    }
}

#[test]
fn listed_scenarios() {
    let one = compute(params(1000.0, 3.0, CompoundingFrequency::Yearly, 0.0, ContributionFrequency::None, 12.0)).unwrap();
    assert_eq!(format!("{:.2}", one.future_value), "1030.00");
    assert_eq!(format!("{:.2}", one.interest_component), "30.00");

    let two = compute(params(1000.0, 0.0, CompoundingFrequency::Yearly, 100.0, ContributionFrequency::Monthly, 12.0)).unwrap();
    assert_eq!(format!("{:.2}", two.future_value), "2200.00");

    let three = compute(params(0.0, 5.0, CompoundingFrequency::Monthly, 0.0, ContributionFrequency::None, 0.0)).unwrap();
    assert_eq!(format!("{:.2}", three.future_value), "0.00");

    let four = compute(InvestmentParameters {
        initial_investment: 500.0,
        annual_interest_rate_percent: -1.0,
        ..Default::default()
    });
    assert!(four.is_err());
}

#[test]
fn malformed_numbers_are_rejected() {
    let nan_rate = compute(InvestmentParameters {
        annual_interest_rate_percent: f64::NAN,
        ..Default::default()
    })
    .unwrap_err();
    assert_eq!(nan_rate.violations(), &[Violation::NotFinite { field: "Interest rate" }]);

    let negative_months = compute(InvestmentParameters {
        duration_months: -12.0,
        ..Default::default()
    })
    .unwrap_err();
    assert_eq!(negative_months.to_string(), "Number of months cannot be negative");
}

#[test]
fn csv_batch_end_to_end() {
    let data = "\
scenario_id,initial_investment,annual_interest_rate_percent,compounding_frequency,contribution_amount,contribution_frequency,duration_months
growth,1000,3,yearly,0,none,12
saver,1000,0,yearly,100,monthly,12
blank,,3,yearly,0,none,12
negative,500,-1,monthly,0,none,12
";
    let scenarios = load_scenarios_from_reader(data.as_bytes()).unwrap();
    let outcomes = ScenarioRunner::new().run_batch(&scenarios);

    assert_eq!(outcomes.len(), 4);
    assert_abs_diff_eq!(outcomes[0].result.as_ref().unwrap().future_value, 1030.0, epsilon = 1e-9);
    assert_abs_diff_eq!(outcomes[1].result.as_ref().unwrap().future_value, 2200.0, epsilon = 1e-9);

    let blank = outcomes[2].result.as_ref().unwrap_err();
    assert_eq!(blank.first(), &Violation::NotFinite { field: "Initial investment" });

    let negative = outcomes[3].to_record();
    assert_eq!(negative.status, "invalid");
    assert_eq!(negative.error.as_deref(), Some("Interest rate cannot be negative"));
}
