use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::Status;
use super::error::PersonalizeError;
use super::shape::{epoch_seconds, insert_entry};

// --- Algorithm ---

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct AlgorithmImage {
        name: String,
        #[serde(rename = "dockerURI")]
        docker_uri: String,
    }
}

shape! {
    /// A service-provided training algorithm. Recipes reference one of these.
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct Algorithm {
        name: String,
        algorithm_arn: String,
        algorithm_image: AlgorithmImage,
        default_hyper_parameters: BTreeMap<String, String>,
        default_hyper_parameter_ranges: DefaultHyperParameterRanges,
        default_resource_config: BTreeMap<String, String>,
        training_input_mode: String,
        role_arn: String,
        #[serde(with = "epoch_seconds")]
        creation_date_time: DateTime<Utc>,
        #[serde(with = "epoch_seconds")]
        last_updated_date_time: DateTime<Utc>,
    }
}

impl Algorithm {
    pub fn add_default_hyper_parameters_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self, PersonalizeError> {
        insert_entry(
            &mut self.default_hyper_parameters,
            "defaultHyperParameters",
            key.into(),
            value.into(),
        )?;
        Ok(self)
    }

    pub fn clear_default_hyper_parameters_entries(&mut self) -> &mut Self {
        self.default_hyper_parameters = None;
        self
    }

    pub fn add_default_resource_config_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self, PersonalizeError> {
        insert_entry(
            &mut self.default_resource_config,
            "defaultResourceConfig",
            key.into(),
            value.into(),
        )?;
        Ok(self)
    }

    pub fn clear_default_resource_config_entries(&mut self) -> &mut Self {
        self.default_resource_config = None;
        self
    }
}

// --- Hyperparameter ranges ---

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DefaultIntegerHyperParameterRange {
        name: String,
        min_value: i32,
        max_value: i32,
        is_tunable: bool,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct DefaultContinuousHyperParameterRange {
        name: String,
        min_value: f64,
        max_value: f64,
        is_tunable: bool,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DefaultCategoricalHyperParameterRange {
        name: String,
        values: Vec<String>,
        is_tunable: bool,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct DefaultHyperParameterRanges {
        integer_hyper_parameter_ranges: Vec<DefaultIntegerHyperParameterRange>,
        continuous_hyper_parameter_ranges: Vec<DefaultContinuousHyperParameterRange>,
        categorical_hyper_parameter_ranges: Vec<DefaultCategoricalHyperParameterRange>,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct IntegerHyperParameterRange {
        name: String,
        min_value: i32,
        max_value: i32,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct ContinuousHyperParameterRange {
        name: String,
        min_value: f64,
        max_value: f64,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CategoricalHyperParameterRange {
        name: String,
        values: Vec<String>,
    }
}

shape! {
    /// Ranges HPO searches over; any hyperparameter not listed keeps its
    /// recipe default.
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct HyperParameterRanges {
        integer_hyper_parameter_ranges: Vec<IntegerHyperParameterRange>,
        continuous_hyper_parameter_ranges: Vec<ContinuousHyperParameterRange>,
        categorical_hyper_parameter_ranges: Vec<CategoricalHyperParameterRange>,
    }
}

// --- HPO and AutoML ---

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct HPOObjective {
        /// `Maximize` or `Minimize`.
        #[serde(rename = "type")]
        objective_type: String,
        metric_name: String,
        metric_regex: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct HPOResourceConfig {
        max_number_of_training_jobs: String,
        max_parallel_training_jobs: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct HPOConfig {
        hpo_objective: HPOObjective,
        hpo_resource_config: HPOResourceConfig,
        algorithm_hyper_parameter_ranges: HyperParameterRanges,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct AutoMLConfig {
        metric_name: String,
        recipe_list: Vec<String>,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct AutoMLResult {
        best_recipe_arn: String,
    }
}

// --- Solution ---

shape! {
    /// Training configuration shared by a solution and every version
    /// trained from it.
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct SolutionConfig {
        event_value_threshold: String,
        hpo_config: HPOConfig,
        algorithm_hyper_parameters: BTreeMap<String, String>,
        feature_transformation_parameters: BTreeMap<String, String>,
        #[serde(rename = "autoMLConfig")]
        auto_ml_config: AutoMLConfig,
    }
}

impl SolutionConfig {
    pub fn add_algorithm_hyper_parameters_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self, PersonalizeError> {
        insert_entry(
            &mut self.algorithm_hyper_parameters,
            "algorithmHyperParameters",
            key.into(),
            value.into(),
        )?;
        Ok(self)
    }

    pub fn clear_algorithm_hyper_parameters_entries(&mut self) -> &mut Self {
        self.algorithm_hyper_parameters = None;
        self
    }

    pub fn add_feature_transformation_parameters_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self, PersonalizeError> {
        insert_entry(
            &mut self.feature_transformation_parameters,
            "featureTransformationParameters",
            key.into(),
            value.into(),
        )?;
        Ok(self)
    }

    pub fn clear_feature_transformation_parameters_entries(&mut self) -> &mut Self {
        self.feature_transformation_parameters = None;
        self
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct Solution {
        name: String,
        solution_arn: String,
        #[serde(rename = "performHPO")]
        perform_hpo: bool,
        #[serde(rename = "performAutoML")]
        perform_auto_ml: bool,
        recipe_arn: String,
        dataset_group_arn: String,
        event_type: String,
        solution_config: SolutionConfig,
        #[serde(rename = "autoMLResult")]
        auto_ml_result: AutoMLResult,
        status: Status,
        #[serde(with = "epoch_seconds")]
        creation_date_time: DateTime<Utc>,
        #[serde(with = "epoch_seconds")]
        last_updated_date_time: DateTime<Utc>,
        latest_solution_version: SolutionVersionSummary,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct SolutionSummary {
        name: String,
        solution_arn: String,
        status: Status,
        #[serde(with = "epoch_seconds")]
        creation_date_time: DateTime<Utc>,
        #[serde(with = "epoch_seconds")]
        last_updated_date_time: DateTime<Utc>,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct TunedHPOParams {
        algorithm_hyper_parameters: BTreeMap<String, String>,
    }
}

impl TunedHPOParams {
    pub fn add_algorithm_hyper_parameters_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self, PersonalizeError> {
        insert_entry(
            &mut self.algorithm_hyper_parameters,
            "algorithmHyperParameters",
            key.into(),
            value.into(),
        )?;
        Ok(self)
    }

    pub fn clear_algorithm_hyper_parameters_entries(&mut self) -> &mut Self {
        self.algorithm_hyper_parameters = None;
        self
    }
}

shape! {
    /// One trained model of a solution.
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct SolutionVersion {
        solution_version_arn: String,
        solution_arn: String,
        #[serde(rename = "performHPO")]
        perform_hpo: bool,
        #[serde(rename = "performAutoML")]
        perform_auto_ml: bool,
        recipe_arn: String,
        event_type: String,
        dataset_group_arn: String,
        solution_config: SolutionConfig,
        training_hours: f64,
        /// Reported by the service, so kept as the raw wire string; parse
        /// with [`TrainingMode`](super::enums::TrainingMode) when needed.
        training_mode: String,
        #[serde(rename = "tunedHPOParams")]
        tuned_hpo_params: TunedHPOParams,
        status: Status,
        failure_reason: String,
        #[serde(with = "epoch_seconds")]
        creation_date_time: DateTime<Utc>,
        #[serde(with = "epoch_seconds")]
        last_updated_date_time: DateTime<Utc>,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct SolutionVersionSummary {
        solution_version_arn: String,
        status: Status,
        #[serde(with = "epoch_seconds")]
        creation_date_time: DateTime<Utc>,
        #[serde(with = "epoch_seconds")]
        last_updated_date_time: DateTime<Utc>,
        failure_reason: String,
    }
}

// --- Campaign ---

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Campaign {
        name: String,
        campaign_arn: String,
        solution_version_arn: String,
        #[serde(rename = "minProvisionedTPS")]
        min_provisioned_tps: i32,
        status: Status,
        failure_reason: String,
        #[serde(with = "epoch_seconds")]
        creation_date_time: DateTime<Utc>,
        #[serde(with = "epoch_seconds")]
        last_updated_date_time: DateTime<Utc>,
        latest_campaign_update: CampaignUpdateSummary,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CampaignUpdateSummary {
        solution_version_arn: String,
        #[serde(rename = "minProvisionedTPS")]
        min_provisioned_tps: i32,
        status: Status,
        failure_reason: String,
        #[serde(with = "epoch_seconds")]
        creation_date_time: DateTime<Utc>,
        #[serde(with = "epoch_seconds")]
        last_updated_date_time: DateTime<Utc>,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CampaignSummary {
        name: String,
        campaign_arn: String,
        status: Status,
        #[serde(with = "epoch_seconds")]
        creation_date_time: DateTime<Utc>,
        #[serde(with = "epoch_seconds")]
        last_updated_date_time: DateTime<Utc>,
        failure_reason: String,
    }
}

// --- Datasets ---

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Dataset {
        name: String,
        dataset_arn: String,
        dataset_group_arn: String,
        /// `Interactions`, `Items` or `Users`.
        dataset_type: String,
        schema_arn: String,
        status: Status,
        #[serde(with = "epoch_seconds")]
        creation_date_time: DateTime<Utc>,
        #[serde(with = "epoch_seconds")]
        last_updated_date_time: DateTime<Utc>,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DatasetSummary {
        name: String,
        dataset_arn: String,
        dataset_type: String,
        status: Status,
        #[serde(with = "epoch_seconds")]
        creation_date_time: DateTime<Utc>,
        #[serde(with = "epoch_seconds")]
        last_updated_date_time: DateTime<Utc>,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DatasetGroup {
        name: String,
        dataset_group_arn: String,
        status: Status,
        role_arn: String,
        kms_key_arn: String,
        #[serde(with = "epoch_seconds")]
        creation_date_time: DateTime<Utc>,
        #[serde(with = "epoch_seconds")]
        last_updated_date_time: DateTime<Utc>,
        failure_reason: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DatasetGroupSummary {
        name: String,
        dataset_group_arn: String,
        status: Status,
        #[serde(with = "epoch_seconds")]
        creation_date_time: DateTime<Utc>,
        #[serde(with = "epoch_seconds")]
        last_updated_date_time: DateTime<Utc>,
        failure_reason: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DataSource {
        /// S3 path of the CSV to import.
        data_location: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DatasetImportJob {
        job_name: String,
        dataset_import_job_arn: String,
        dataset_arn: String,
        data_source: DataSource,
        role_arn: String,
        status: Status,
        #[serde(with = "epoch_seconds")]
        creation_date_time: DateTime<Utc>,
        #[serde(with = "epoch_seconds")]
        last_updated_date_time: DateTime<Utc>,
        failure_reason: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DatasetImportJobSummary {
        dataset_import_job_arn: String,
        job_name: String,
        status: Status,
        #[serde(with = "epoch_seconds")]
        creation_date_time: DateTime<Utc>,
        #[serde(with = "epoch_seconds")]
        last_updated_date_time: DateTime<Utc>,
        failure_reason: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DatasetSchema {
        name: String,
        schema_arn: String,
        /// Avro schema, as a JSON string.
        schema: String,
        #[serde(with = "epoch_seconds")]
        creation_date_time: DateTime<Utc>,
        #[serde(with = "epoch_seconds")]
        last_updated_date_time: DateTime<Utc>,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DatasetSchemaSummary {
        name: String,
        schema_arn: String,
        #[serde(with = "epoch_seconds")]
        creation_date_time: DateTime<Utc>,
        #[serde(with = "epoch_seconds")]
        last_updated_date_time: DateTime<Utc>,
    }
}

// --- Event trackers ---

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct EventTracker {
        name: String,
        event_tracker_arn: String,
        account_id: String,
        tracking_id: String,
        dataset_group_arn: String,
        status: Status,
        #[serde(with = "epoch_seconds")]
        creation_date_time: DateTime<Utc>,
        #[serde(with = "epoch_seconds")]
        last_updated_date_time: DateTime<Utc>,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct EventTrackerSummary {
        name: String,
        event_tracker_arn: String,
        status: Status,
        #[serde(with = "epoch_seconds")]
        creation_date_time: DateTime<Utc>,
        #[serde(with = "epoch_seconds")]
        last_updated_date_time: DateTime<Utc>,
    }
}

// --- Feature transformations ---

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct FeatureTransformation {
        name: String,
        feature_transformation_arn: String,
        default_parameters: BTreeMap<String, String>,
        #[serde(with = "epoch_seconds")]
        creation_date_time: DateTime<Utc>,
        #[serde(with = "epoch_seconds")]
        last_updated_date_time: DateTime<Utc>,
        status: Status,
    }
}

impl FeatureTransformation {
    pub fn add_default_parameters_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self, PersonalizeError> {
        insert_entry(
            &mut self.default_parameters,
            "defaultParameters",
            key.into(),
            value.into(),
        )?;
        Ok(self)
    }

    pub fn clear_default_parameters_entries(&mut self) -> &mut Self {
        self.default_parameters = None;
        self
    }
}

// --- Filters ---

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Filter {
        name: String,
        filter_arn: String,
        #[serde(with = "epoch_seconds")]
        creation_date_time: DateTime<Utc>,
        #[serde(with = "epoch_seconds")]
        last_updated_date_time: DateTime<Utc>,
        dataset_group_arn: String,
        failure_reason: String,
        status: Status,
        filter_expression: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct FilterSummary {
        name: String,
        filter_arn: String,
        #[serde(with = "epoch_seconds")]
        creation_date_time: DateTime<Utc>,
        #[serde(with = "epoch_seconds")]
        last_updated_date_time: DateTime<Utc>,
        dataset_group_arn: String,
        failure_reason: String,
        status: Status,
    }
}

// --- Recipes ---

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Recipe {
        name: String,
        recipe_arn: String,
        algorithm_arn: String,
        feature_transformation_arn: String,
        status: Status,
        description: String,
        #[serde(with = "epoch_seconds")]
        creation_date_time: DateTime<Utc>,
        /// e.g. `USER_PERSONALIZATION`, `PERSONALIZED_RANKING`, `RELATED_ITEMS`.
        recipe_type: String,
        #[serde(with = "epoch_seconds")]
        last_updated_date_time: DateTime<Utc>,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct RecipeSummary {
        name: String,
        recipe_arn: String,
        status: Status,
        #[serde(with = "epoch_seconds")]
        creation_date_time: DateTime<Utc>,
        #[serde(with = "epoch_seconds")]
        last_updated_date_time: DateTime<Utc>,
    }
}

// --- Batch inference ---

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct S3DataConfig {
        path: String,
        kms_key_arn: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct BatchInferenceJobInput {
        s3_data_source: S3DataConfig,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct BatchInferenceJobOutput {
        s3_data_destination: S3DataConfig,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct BatchInferenceJob {
        job_name: String,
        batch_inference_job_arn: String,
        filter_arn: String,
        failure_reason: String,
        solution_version_arn: String,
        num_results: i32,
        job_input: BatchInferenceJobInput,
        job_output: BatchInferenceJobOutput,
        role_arn: String,
        status: Status,
        #[serde(with = "epoch_seconds")]
        creation_date_time: DateTime<Utc>,
        #[serde(with = "epoch_seconds")]
        last_updated_date_time: DateTime<Utc>,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct BatchInferenceJobSummary {
        batch_inference_job_arn: String,
        job_name: String,
        status: Status,
        #[serde(with = "epoch_seconds")]
        creation_date_time: DateTime<Utc>,
        #[serde(with = "epoch_seconds")]
        last_updated_date_time: DateTime<Utc>,
        failure_reason: String,
        solution_version_arn: String,
    }
}
