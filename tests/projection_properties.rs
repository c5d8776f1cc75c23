//! Behavioural properties of the projection engine across both modes

use approx::assert_relative_eq;
use halal_projection::{
    project, ContributionFrequency, ContributionSchedule, ContributionSegment, ProjectionInput,
    ProjectionParams, ProjectionResult,
};

fn flat(initial: f64, amount: f64, frequency: ContributionFrequency, annual_return: f64, years: u32) -> ProjectionResult {
    project(&ProjectionInput::flat(initial, amount, frequency, annual_return, years))
}

#[test]
fn contributions_never_decrease() {
    for frequency in ContributionFrequency::ALL {
        let result = flat(1_000.0, 250.0, frequency, 6.0, 25);
        for pair in result.samples.windows(2) {
            assert!(pair[1].contributions >= pair[0].contributions);
        }
    }
}

#[test]
fn zero_contributions_reduce_to_compound_formula() {
    let result = flat(10_000.0, 0.0, ContributionFrequency::Monthly, 4.0, 30);
    for sample in &result.samples {
        let expected = 10_000.0 * (1.0_f64 + 4.0 / 1200.0).powi(12 * sample.year as i32);
        assert_relative_eq!(sample.conventional_value, expected, max_relative = 1e-10);
        assert_eq!(sample.contributions, 10_000.0);
    }
}

#[test]
fn zero_return_is_pure_principal() {
    let result = flat(5_000.0, 75.0, ContributionFrequency::Biweekly, 0.0, 15);
    for sample in &result.samples {
        assert_eq!(sample.conventional_value, sample.contributions);
        assert_eq!(sample.growth_only, 0.0);
    }
}

#[test]
fn single_checkpoint_matches_simple_mode() {
    for frequency in ContributionFrequency::ALL {
        let schedule = ContributionSchedule::new(vec![ContributionSegment::new(0.0, 320.0, frequency)]).unwrap();
        let variable = project(&ProjectionInput::scheduled(2_000.0, schedule, 5.5, 20));
        let simple = flat(2_000.0, 320.0, frequency, 5.5, 20);
        assert_eq!(variable, simple);
    }
}

#[test]
fn halal_value_bounded_by_conventional() {
    let result = flat(10_000.0, 500.0, ContributionFrequency::Monthly, 8.0, 40);
    for sample in &result.samples {
        // Both tracks share deposits, so halal value = growth_only + contributions
        let halal_value = sample.growth_only + sample.contributions;
        assert!(halal_value <= sample.conventional_value);
    }
}

#[test]
fn monthly_and_annual_deposits_equivalent() {
    let monthly = flat(1_000.0, 100.0, ContributionFrequency::Monthly, 4.0, 20);
    let annually = flat(1_000.0, 1_200.0, ContributionFrequency::Annually, 4.0, 20);
    for (m, a) in monthly.samples.iter().zip(&annually.samples) {
        assert_relative_eq!(m.conventional_value, a.conventional_value, max_relative = 1e-12);
        assert_relative_eq!(m.contributions, a.contributions, max_relative = 1e-12);
    }
}

#[test]
fn calculator_defaults_one_year() {
    let params = ProjectionParams { years: 1, ..Default::default() };
    let result = project(&params.to_input().unwrap());

    let year0 = result.samples[0];
    assert_eq!(year0.label(), "Year 0");
    assert_eq!((year0.contributions, year0.conventional_value, year0.growth_only), (10_000.0, 10_000.0, 0.0));

    let mut value = 10_000.0;
    for _ in 0..12 {
        value = value * (1.0 + 0.04 / 12.0) + 500.0;
    }
    assert_eq!(result.samples[1].contributions, 16_000.0);
    assert_relative_eq!(result.samples[1].conventional_value, value, max_relative = 1e-12);
}

#[test]
fn checkpoint_step_up_has_no_discontinuity() {
    let schedule = ContributionSchedule::new(vec![
        ContributionSegment::new(0.0, 500.0, ContributionFrequency::Monthly),
        ContributionSegment::new(10.0, 1_000.0, ContributionFrequency::Monthly),
    ])
    .unwrap();
    let variable = project(&ProjectionInput::scheduled(10_000.0, schedule, 4.0, 20));
    let simple = flat(10_000.0, 500.0, ContributionFrequency::Monthly, 4.0, 20);

    // Year 10 is sampled before any month of the new checkpoint runs
    for year in 0..=10 {
        assert_eq!(variable.samples[year], simple.samples[year]);
    }

    // Carry on from year 10 with the larger deposit, no reset
    let mut value = variable.samples[10].conventional_value;
    for year in 11..=20 {
        for _ in 0..12 {
            value = value * (1.0 + 0.04 / 12.0) + 1_000.0;
        }
        assert_relative_eq!(variable.samples[year].conventional_value, value, max_relative = 1e-12);
        assert_eq!(
            variable.samples[year].contributions - variable.samples[year - 1].contributions,
            12_000.0
        );
    }

    let slope_before = variable.samples[10].contributions - variable.samples[9].contributions;
    let slope_after = variable.samples[11].contributions - variable.samples[10].contributions;
    assert!(slope_after > slope_before);
}

#[test]
fn recompute_is_deterministic() {
    let input = ProjectionParams::default().to_input().unwrap();
    assert_eq!(project(&input), project(&input));
}
