use approx::assert_relative_eq;

use integration_tests::{from_json, from_toml, wire};
use slate_charts::Page;
use slate_exercises::{
    DimensionReductionParams, LikelihoodRatioParams, LinearParams, LogisticParams, SvmParams,
    dimension_reduction_exercise, linear_exercise, svm_exercise,
};

#[test]
fn svm_from_toml() {
    let params: SvmParams = from_toml(
        r"
        wi = 1.0
        wj = 1.0
        b = 0.0
        lambda = 0.0
        ",
    )
    .expect("valid svm config");

    let wired = wire(params, svm_exercise::<Page>).expect("coordinate system exists");

    assert_relative_eq!(wired.store.output("loss").unwrap(), 4.093_75);
}

#[test]
fn linear_from_json() {
    let params: LinearParams =
        from_json(r#"{ "beta_0": 0.0, "beta_1": 0.0, "beta_2": 1.0 }"#).expect("valid json");

    let wired = wire(params, linear_exercise::<Page>).expect("coordinate system exists");

    assert_eq!(wired.store.output("loss"), Some(6.0625));
}

#[test]
fn missing_fields_take_slider_defaults() {
    let params: LogisticParams = from_json(r#"{ "alpha": 2.5 }"#).expect("valid json");

    assert_eq!(
        params,
        LogisticParams {
            alpha: 2.5,
            ..LogisticParams::default()
        }
    );
}

#[test]
fn unknown_fields_are_rejected() {
    let result: Result<DimensionReductionParams, _> = from_toml("sigma = 1.0\nbandwidth = 2.0");
    assert!(result.is_err());

    let result: Result<LikelihoodRatioParams, _> = from_json(r#"{ "mu": 1.0, "threshold": 2.0 }"#);
    assert!(result.is_err());
}

#[test]
fn params_round_trip_through_json() {
    let params = DimensionReductionParams { sigma: 0.75 };

    let text = serde_json::to_string(&params).expect("serializable");
    let parsed = from_json(&text).expect("parsable");
    let wired =
        wire(parsed, dimension_reduction_exercise::<Page>).expect("coordinate system exists");

    assert_eq!(*wired.store.params(), params);
}
