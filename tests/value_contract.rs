use std::collections::hash_map::DefaultHasher;
use std::fmt::{Debug, Display};
use std::hash::{Hash, Hasher};

use chrono::{SubsecRound, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use aws_personalize_model::personalize::requests::*;
use aws_personalize_model::personalize::types::*;
use aws_personalize_model::{PersonalizeError, Status, TrainingMode};

fn renders_field(rendered: &str, field: &str) -> bool {
    rendered.starts_with(&format!("{{{field}: ")) || rendered.contains(&format!(",{field}: "))
}

/// `base` must leave `field` unset; `set` must set exactly that field.
fn assert_value_contract<T>(base: T, field: &str, set: impl Fn(T) -> T)
where
    T: Clone + Debug + PartialEq + Display + Serialize + DeserializeOwned,
{
    assert_eq!(base, base.clone());

    let copy: T = serde_json::from_value(serde_json::to_value(&base).unwrap()).unwrap();
    assert_eq!(copy, base);

    assert!(!renders_field(&base.to_string(), field), "{field} rendered while unset: {base}");
    let changed = set(base.clone());
    assert!(renders_field(&changed.to_string(), field), "{field} missing: {changed}");

    assert_ne!(changed, base);
    assert_eq!(set(base.clone()), changed);
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn assert_equal_and_same_hash<T: Hash + Eq + Debug>(a: &T, b: &T) {
    assert_eq!(a, b);
    assert_eq!(hash_of(a), hash_of(b));
}

const DATASET_GROUP_ARN: &str = "arn:aws:personalize:us-east-1:123:dataset-group/movies";

// --- Value contract per shape ---

#[test]
fn algorithm_contract() {
    let algo = Algorithm::default()
        .name("algo-1")
        .algorithm_arn("arn:aws:personalize:us-east-1:123:algorithm/algo-1");
    assert_value_contract(algo, "roleArn", |a| a.role_arn("arn:aws:iam::123:role/p"));
}

#[test]
fn dataset_contract() {
    let dataset = Dataset::default()
        .name("interactions")
        .dataset_group_arn(DATASET_GROUP_ARN)
        .dataset_type("Interactions");
    assert_value_contract(dataset.clone(), "status", |d| d.status(Status::CreatePending));
    assert_equal_and_same_hash(&dataset, &dataset.clone());
}

#[test]
fn dataset_group_contract() {
    let group = DatasetGroup::default().name("movies").status(Status::Active);
    assert_value_contract(group, "failureReason", |g| g.failure_reason("role not assumable"));
}

#[test]
fn dataset_import_job_contract() {
    let job = DatasetImportJob::default()
        .job_name("import-1")
        .data_source(DataSource::default().data_location("s3://bucket/interactions.csv"));
    assert_value_contract(job, "roleArn", |j| j.role_arn("arn:aws:iam::123:role/p"));
}

#[test]
fn solution_contract() {
    let mut config = SolutionConfig::default();
    config.add_algorithm_hyper_parameters_entry("hidden_dimension", "64").unwrap();
    let solution = Solution::default()
        .name("movies")
        .perform_auto_ml(true)
        .solution_config(config.auto_ml_config(AutoMLConfig::default().metric_name("precision_at_25")));
    assert_value_contract(solution, "recipeArn", |s| {
        s.recipe_arn("arn:aws:personalize:::recipe/aws-hrnn")
    });
}

#[test]
fn solution_version_contract() {
    let version = SolutionVersion::default()
        .solution_version_arn("arn:aws:personalize:us-east-1:123:solution/movies/1")
        .training_hours(0.25);
    assert_value_contract(version, "trainingMode", |v| v.training_mode(TrainingMode::Full));
}

#[test]
fn campaign_contract() {
    let created = Utc.with_ymd_and_hms(2020, 6, 1, 12, 0, 0).unwrap();
    let campaign = Campaign::default()
        .name("movies-live")
        .min_provisioned_tps(1)
        .creation_date_time(created);
    assert_value_contract(campaign.clone(), "latestCampaignUpdate", |c| {
        c.latest_campaign_update(CampaignUpdateSummary::default().status("UPDATE PENDING"))
    });
    assert_equal_and_same_hash(&campaign, &campaign.clone());
}

#[test]
fn campaign_timestamps_survive_a_copy_at_wire_precision() {
    let created = Utc.timestamp_opt(1_591_012_800, 775_645_960).unwrap();
    let campaign = Campaign::default().creation_date_time(created.trunc_subsecs(3));
    let copy: Campaign =
        serde_json::from_value(serde_json::to_value(&campaign).unwrap()).unwrap();
    assert_equal_and_same_hash(&copy, &campaign);
}

#[test]
fn event_tracker_contract() {
    let tracker = EventTracker::default().name("clicks").tracking_id("t-1");
    assert_value_contract(tracker, "accountId", |t| t.account_id("123456789012"));
}

#[test]
fn filter_contract() {
    let filter = Filter::default().name("no-purchased").dataset_group_arn(DATASET_GROUP_ARN);
    assert_value_contract(filter, "filterExpression", |f| {
        f.filter_expression("EXCLUDE itemId WHERE INTERACTIONS.event_type in (\"purchase\")")
    });
}

#[test]
fn recipe_contract() {
    let recipe = Recipe::default().name("aws-hrnn").recipe_type("USER_PERSONALIZATION");
    assert_value_contract(recipe, "description", |r| r.description("hierarchical RNN"));
}

#[test]
fn batch_inference_job_summary_contract() {
    let summary = BatchInferenceJobSummary::default().job_name("nightly").status(Status::Active);
    assert_value_contract(summary, "solutionVersionArn", |s| s.solution_version_arn("v1"));
}

#[test]
fn solution_metrics_contract() {
    let mut result = GetSolutionMetricsResult::default();
    result.add_metrics_entry("coverage", 0.27).unwrap();
    assert_value_contract(result, "solutionVersionArn", |r| r.solution_version_arn("v1"));
}

#[test]
fn list_result_contract() {
    let result = ListCampaignsResult::default()
        .campaigns(vec![CampaignSummary::default().name("a"), CampaignSummary::default().name("b")]);
    assert_value_contract(result, "nextToken", |r| r.next_token("page-2"));
}

// --- Equality ---

#[test]
fn shapes_differing_in_one_field_are_unequal() {
    let a = Recipe::default().name("aws-hrnn").status(Status::Active);
    let b = Recipe::default().name("aws-hrnn").status(Status::CreatePending);
    assert_ne!(a, b);
}

#[test]
fn both_absent_fields_compare_equal() {
    let a = DatasetGroup::default().name("movies");
    let b = DatasetGroup::default().name("movies");
    assert!(a.kms_key_arn.is_none() && b.kms_key_arn.is_none());
    assert_equal_and_same_hash(&a, &b);
}

#[test]
fn map_insertion_order_does_not_affect_equality() {
    let mut a = FeatureTransformation::default();
    a.add_default_parameters_entry("x", "1")
        .and_then(|t| t.add_default_parameters_entry("y", "2"))
        .unwrap();
    let mut b = FeatureTransformation::default();
    b.add_default_parameters_entry("y", "2")
        .and_then(|t| t.add_default_parameters_entry("x", "1"))
        .unwrap();
    assert_equal_and_same_hash(&a, &b);
    assert_eq!(a.to_string(), b.to_string());
}

// --- Fluent construction ---

#[test]
fn fluent_chain_matches_field_assignment() {
    let fluent = CreateCampaignRequest::default()
        .name("movies-live")
        .solution_version_arn("v1")
        .min_provisioned_tps(5);

    let mut assigned = CreateCampaignRequest::default();
    assigned.name = Some("movies-live".to_string());
    assigned.solution_version_arn = Some("v1".to_string());
    assigned.min_provisioned_tps = Some(5);

    assert_equal_and_same_hash(&fluent, &assigned);
}

#[test]
fn fluent_setters_overwrite_earlier_values() {
    let filter = Filter::default().name("a").name("b");
    assert_eq!(filter.name.as_deref(), Some("b"));
}

// --- Map-entry adders ---

macro_rules! map_entry_contract {
    ($test:ident, $shape:ty, $field:ident, $add:ident, $clear:ident, $first:expr, $second:expr) => {
        #[test]
        fn $test() {
            let mut shape = <$shape>::default();
            shape.$add("k", $first).unwrap();

            let err = shape.$add("k", $second).unwrap_err();
            assert!(matches!(err, PersonalizeError::DuplicateKey { ref key, .. } if key == "k"));
            let entries = shape.$field.as_ref().unwrap();
            assert_eq!(entries.len(), 1);
            assert_eq!(entries["k"], $first);

            shape.$add("other", $second).unwrap();
            shape.$clear();
            assert!(shape.$field.is_none());
            assert_eq!(shape, <$shape>::default());
        }
    };
}

map_entry_contract!(
    algorithm_default_hyper_parameters,
    Algorithm,
    default_hyper_parameters,
    add_default_hyper_parameters_entry,
    clear_default_hyper_parameters_entries,
    "v1",
    "v2"
);

map_entry_contract!(
    algorithm_default_resource_config,
    Algorithm,
    default_resource_config,
    add_default_resource_config_entry,
    clear_default_resource_config_entries,
    "v1",
    "v2"
);

map_entry_contract!(
    feature_transformation_default_parameters,
    FeatureTransformation,
    default_parameters,
    add_default_parameters_entry,
    clear_default_parameters_entries,
    "v1",
    "v2"
);

map_entry_contract!(
    solution_config_algorithm_hyper_parameters,
    SolutionConfig,
    algorithm_hyper_parameters,
    add_algorithm_hyper_parameters_entry,
    clear_algorithm_hyper_parameters_entries,
    "v1",
    "v2"
);

map_entry_contract!(
    solution_config_feature_transformation_parameters,
    SolutionConfig,
    feature_transformation_parameters,
    add_feature_transformation_parameters_entry,
    clear_feature_transformation_parameters_entries,
    "v1",
    "v2"
);

map_entry_contract!(
    tuned_hpo_params_algorithm_hyper_parameters,
    TunedHPOParams,
    algorithm_hyper_parameters,
    add_algorithm_hyper_parameters_entry,
    clear_algorithm_hyper_parameters_entries,
    "v1",
    "v2"
);

map_entry_contract!(
    solution_metrics,
    GetSolutionMetricsResult,
    metrics,
    add_metrics_entry,
    clear_metrics_entries,
    0.5,
    0.75
);

#[test]
fn algorithm_scenario() {
    let mut algo = Algorithm::default()
        .name("algo-1")
        .algorithm_arn("arn:aws:personalize:us-east-1:123:algorithm/algo-1");
    algo.add_default_hyper_parameters_entry("lr", "0.01").unwrap();
    assert_eq!(
        algo.to_string(),
        "{name: algo-1,algorithmArn: arn:aws:personalize:us-east-1:123:algorithm/algo-1,defaultHyperParameters: {lr: 0.01}}"
    );

    let err = algo.add_default_hyper_parameters_entry("lr", "0.02").unwrap_err();
    assert_eq!(err.error_code(), "InvalidArgument");
    assert_eq!(
        algo.default_hyper_parameters.as_ref().and_then(|m| m.get("lr")).map(String::as_str),
        Some("0.01")
    );
}
