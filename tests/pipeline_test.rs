// End-to-end tests for the ETo pipeline:
// CSV text -> records -> daily results -> monthly summaries -> rendered tables

use eto_tracker::{
    aggregate_monthly, compute_series, export_daily_csv, export_monthly_csv, parse_climate_csv,
    LocationParams,
};

const BANGKOK: LocationParams = LocationParams {
    latitude: 13.73,
    altitude: 2.0,
};

const SAMPLE_CSV: &str = "\
Date,Tmax,Tmin,RH,Wind,Sunshine
2024-07-06,34.8,25.6,64,2.06,9.25
2024-07-07,33.9,25.1,68,1.80,8.50
2024-08-01,32.5,24.8,72,1.50,7.00
";

#[test]
fn full_pipeline_produces_daily_and_monthly_tables() {
    let records = parse_climate_csv(SAMPLE_CSV);
    assert_eq!(records.len(), 3);

    let results = compute_series(&records, &BANGKOK);
    assert_eq!(results.len(), 3);
    for r in &results {
        assert!(r.eto >= 0.0 && r.eto.is_finite());
        assert!(r.es > r.ea && r.ea > 0.0);
        assert!(r.rn > 0.0);
    }

    let daily = export_daily_csv(&results);
    let daily_lines: Vec<&str> = daily.split('\n').collect();
    assert_eq!(daily_lines.len(), 4);
    assert_eq!(daily_lines[0], "Date,ETo (mm/day),Rn (MJ/m2/d),es (kPa),ea (kPa)");
    assert!(daily_lines[1].starts_with("2024-07-06,"));

    let monthly = aggregate_monthly(&results);
    assert_eq!(monthly.len(), 2);
    assert_eq!(monthly[0].month, "2024-07");
    assert_eq!(monthly[0].count, 2);
    assert_eq!(monthly[1].month, "2024-08");
    assert_eq!(monthly[1].count, 1);

    let monthly_csv = export_monthly_csv(&monthly);
    let monthly_lines: Vec<&str> = monthly_csv.split('\n').collect();
    assert_eq!(monthly_lines.len(), 3);
    assert_eq!(monthly_lines[0], "Month,Mean ETo (mm/day),Total ETo (mm),Days");
}

#[test]
fn bangkok_reference_day_lands_in_published_range() {
    let records = parse_climate_csv(SAMPLE_CSV);
    let results = compute_series(&records, &BANGKOK);
    // FAO-56 Example 18 conditions give roughly 5 mm/day
    assert!(
        results[0].eto > 4.0 && results[0].eto < 6.5,
        "ETo out of range: {}",
        results[0].eto
    );
}

#[test]
fn monthly_totals_are_consistent_with_means() {
    let records = parse_climate_csv(SAMPLE_CSV);
    let results = compute_series(&records, &BANGKOK);
    let monthly = aggregate_monthly(&results);

    let mut previous: Option<&str> = None;
    for s in &monthly {
        let reconstructed = s.mean_eto * s.count as f64;
        let tolerance = 1e-6 * s.total_eto.abs().max(1.0);
        assert!((s.total_eto - reconstructed).abs() <= tolerance);

        if let Some(p) = previous {
            assert!(s.month.as_str() > p, "months not strictly ascending");
        }
        previous = Some(s.month.as_str());
    }
}

#[test]
fn empty_input_is_idempotent_all_the_way_down() {
    let records = parse_climate_csv("");
    assert!(records.is_empty());

    let results = compute_series(&records, &BANGKOK);
    assert!(results.is_empty());

    let monthly = aggregate_monthly(&results);
    assert!(monthly.is_empty());

    assert_eq!(
        export_daily_csv(&results),
        "Date,ETo (mm/day),Rn (MJ/m2/d),es (kPa),ea (kPa)"
    );
    assert_eq!(
        export_monthly_csv(&monthly),
        "Month,Mean ETo (mm/day),Total ETo (mm),Days"
    );
}

#[test]
fn malformed_rows_are_dropped_but_rest_of_series_survives() {
    let csv = "\
Date,Tmax,Tmin,RH,Wind,Sunshine
2024-07-06,34.8,25.6,64,2.06,9.25
garbage row
2024-07-08,33.0,25.0,70,2.00,9.00
";
    let records = parse_climate_csv(csv);
    assert_eq!(records.len(), 2);

    let results = compute_series(&records, &BANGKOK);
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.eto.is_finite()));
}

#[test]
fn nan_fields_propagate_without_panicking() {
    let csv = "Date,Tmax,Tmin,RH,Wind,Sunshine\n2024-07-06,bad,25.6,64,2.06,9.25";
    let records = parse_climate_csv(csv);
    assert_eq!(records.len(), 1);
    assert!(records[0].tmax.is_nan());

    // The defined degradation mode: NaN rides through the physics, nothing
    // crashes, the result is NaN rather than a number
    let results = compute_series(&records, &BANGKOK);
    assert!(results[0].eto.is_nan());
    assert!(results[0].es.is_nan());
}

#[test]
fn high_latitude_winter_series_stays_non_negative() {
    let csv = "\
Date,Tmax,Tmin,RH,Wind,Sunshine
2024-12-20,-12.0,-25.0,85,4.0,0
2024-12-21,-14.0,-28.0,88,3.5,0
";
    let tromso = LocationParams {
        latitude: 69.6,
        altitude: 10.0,
    };
    let results = compute_series(&parse_climate_csv(csv), &tromso);
    assert_eq!(results.len(), 2);
    for r in &results {
        assert!(r.eto >= 0.0 && r.eto.is_finite());
    }
}
