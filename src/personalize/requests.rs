use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::enums::{RecipeProvider, TrainingMode};
use super::error::PersonalizeError;
use super::shape::insert_entry;
use super::types::*;

// --- Shared ---

shape! {
    /// Body of the operations that answer with `{}`.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct EmptyResult {}
}

// --- CreateBatchInferenceJob ---

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CreateBatchInferenceJobRequest {
        job_name: String,
        solution_version_arn: String,
        filter_arn: String,
        num_results: i32,
        job_input: BatchInferenceJobInput,
        job_output: BatchInferenceJobOutput,
        role_arn: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CreateBatchInferenceJobResult {
        batch_inference_job_arn: String,
    }
}

// --- CreateCampaign ---

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CreateCampaignRequest {
        name: String,
        solution_version_arn: String,
        #[serde(rename = "minProvisionedTPS")]
        min_provisioned_tps: i32,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CreateCampaignResult {
        campaign_arn: String,
    }
}

// --- CreateDataset ---

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CreateDatasetRequest {
        name: String,
        schema_arn: String,
        dataset_group_arn: String,
        dataset_type: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CreateDatasetResult {
        dataset_arn: String,
    }
}

// --- CreateDatasetGroup ---

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CreateDatasetGroupRequest {
        name: String,
        role_arn: String,
        kms_key_arn: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CreateDatasetGroupResult {
        dataset_group_arn: String,
    }
}

// --- CreateDatasetImportJob ---

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CreateDatasetImportJobRequest {
        job_name: String,
        dataset_arn: String,
        data_source: DataSource,
        role_arn: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CreateDatasetImportJobResult {
        dataset_import_job_arn: String,
    }
}

// --- CreateEventTracker ---

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CreateEventTrackerRequest {
        name: String,
        dataset_group_arn: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CreateEventTrackerResult {
        event_tracker_arn: String,
        /// Passed as `trackingId` to PutEvents.
        tracking_id: String,
    }
}

// --- CreateFilter ---

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CreateFilterRequest {
        name: String,
        dataset_group_arn: String,
        filter_expression: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CreateFilterResult {
        filter_arn: String,
    }
}

// --- CreateSchema ---

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CreateSchemaRequest {
        name: String,
        schema: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CreateSchemaResult {
        schema_arn: String,
    }
}

// --- CreateSolution ---

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct CreateSolutionRequest {
        name: String,
        #[serde(rename = "performHPO")]
        perform_hpo: bool,
        #[serde(rename = "performAutoML")]
        perform_auto_ml: bool,
        recipe_arn: String,
        dataset_group_arn: String,
        event_type: String,
        solution_config: SolutionConfig,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CreateSolutionResult {
        solution_arn: String,
    }
}

// --- CreateSolutionVersion ---

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CreateSolutionVersionRequest {
        solution_arn: String,
        training_mode: TrainingMode,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CreateSolutionVersionResult {
        solution_version_arn: String,
    }
}

// --- Delete* ---

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DeleteCampaignRequest {
        campaign_arn: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DeleteDatasetRequest {
        dataset_arn: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DeleteDatasetGroupRequest {
        dataset_group_arn: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DeleteEventTrackerRequest {
        event_tracker_arn: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DeleteFilterRequest {
        filter_arn: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DeleteSchemaRequest {
        schema_arn: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DeleteSolutionRequest {
        solution_arn: String,
    }
}

// --- Describe* ---

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DescribeAlgorithmRequest {
        algorithm_arn: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct DescribeAlgorithmResult {
        algorithm: Algorithm,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DescribeBatchInferenceJobRequest {
        batch_inference_job_arn: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DescribeBatchInferenceJobResult {
        batch_inference_job: BatchInferenceJob,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DescribeCampaignRequest {
        campaign_arn: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DescribeCampaignResult {
        campaign: Campaign,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DescribeDatasetRequest {
        dataset_arn: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DescribeDatasetResult {
        dataset: Dataset,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DescribeDatasetGroupRequest {
        dataset_group_arn: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DescribeDatasetGroupResult {
        dataset_group: DatasetGroup,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DescribeDatasetImportJobRequest {
        dataset_import_job_arn: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DescribeDatasetImportJobResult {
        dataset_import_job: DatasetImportJob,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DescribeEventTrackerRequest {
        event_tracker_arn: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DescribeEventTrackerResult {
        event_tracker: EventTracker,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DescribeFeatureTransformationRequest {
        feature_transformation_arn: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DescribeFeatureTransformationResult {
        feature_transformation: FeatureTransformation,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DescribeFilterRequest {
        filter_arn: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DescribeFilterResult {
        filter: Filter,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DescribeRecipeRequest {
        recipe_arn: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DescribeRecipeResult {
        recipe: Recipe,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DescribeSchemaRequest {
        schema_arn: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DescribeSchemaResult {
        schema: DatasetSchema,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DescribeSolutionRequest {
        solution_arn: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct DescribeSolutionResult {
        solution: Solution,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DescribeSolutionVersionRequest {
        solution_version_arn: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct DescribeSolutionVersionResult {
        solution_version: SolutionVersion,
    }
}

// --- GetSolutionMetrics ---

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct GetSolutionMetricsRequest {
        solution_version_arn: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct GetSolutionMetricsResult {
        solution_version_arn: String,
        metrics: BTreeMap<String, f64>,
    }
}

impl GetSolutionMetricsResult {
    pub fn add_metrics_entry(
        &mut self,
        key: impl Into<String>,
        value: f64,
    ) -> Result<&mut Self, PersonalizeError> {
        insert_entry(&mut self.metrics, "metrics", key.into(), value)?;
        Ok(self)
    }

    pub fn clear_metrics_entries(&mut self) -> &mut Self {
        self.metrics = None;
        self
    }
}

// --- List* ---

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ListBatchInferenceJobsRequest {
        solution_version_arn: String,
        next_token: String,
        max_results: i32,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ListBatchInferenceJobsResult {
        batch_inference_jobs: Vec<BatchInferenceJobSummary>,
        next_token: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ListCampaignsRequest {
        solution_arn: String,
        next_token: String,
        max_results: i32,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ListCampaignsResult {
        campaigns: Vec<CampaignSummary>,
        next_token: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ListDatasetGroupsRequest {
        next_token: String,
        max_results: i32,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ListDatasetGroupsResult {
        dataset_groups: Vec<DatasetGroupSummary>,
        next_token: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ListDatasetImportJobsRequest {
        dataset_arn: String,
        next_token: String,
        max_results: i32,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ListDatasetImportJobsResult {
        dataset_import_jobs: Vec<DatasetImportJobSummary>,
        next_token: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ListDatasetsRequest {
        dataset_group_arn: String,
        next_token: String,
        max_results: i32,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ListDatasetsResult {
        datasets: Vec<DatasetSummary>,
        next_token: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ListEventTrackersRequest {
        dataset_group_arn: String,
        next_token: String,
        max_results: i32,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ListEventTrackersResult {
        event_trackers: Vec<EventTrackerSummary>,
        next_token: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ListFiltersRequest {
        dataset_group_arn: String,
        next_token: String,
        max_results: i32,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ListFiltersResult {
        // The service capitalises this one member.
        #[serde(rename = "Filters")]
        filters: Vec<FilterSummary>,
        next_token: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ListRecipesRequest {
        recipe_provider: RecipeProvider,
        next_token: String,
        max_results: i32,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ListRecipesResult {
        recipes: Vec<RecipeSummary>,
        next_token: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ListSchemasRequest {
        next_token: String,
        max_results: i32,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ListSchemasResult {
        schemas: Vec<DatasetSchemaSummary>,
        next_token: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ListSolutionVersionsRequest {
        solution_arn: String,
        next_token: String,
        max_results: i32,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ListSolutionVersionsResult {
        solution_versions: Vec<SolutionVersionSummary>,
        next_token: String,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ListSolutionsRequest {
        dataset_group_arn: String,
        next_token: String,
        max_results: i32,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ListSolutionsResult {
        solutions: Vec<SolutionSummary>,
        next_token: String,
    }
}

// --- UpdateCampaign ---

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct UpdateCampaignRequest {
        campaign_arn: String,
        solution_version_arn: String,
        #[serde(rename = "minProvisionedTPS")]
        min_provisioned_tps: i32,
    }
}

shape! {
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct UpdateCampaignResult {
        campaign_arn: String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VERSION_ARN: &str = "arn:aws:personalize:us-east-1:123:solution/movies/abc123";

    #[test]
    fn metrics_map_rejects_duplicates() {
        let mut result = GetSolutionMetricsResult::default().solution_version_arn(VERSION_ARN);
        result
            .add_metrics_entry("coverage", 0.27)
            .and_then(|r| r.add_metrics_entry("precision_at_5", 0.11))
            .unwrap();
        let err = result.add_metrics_entry("coverage", 0.3).unwrap_err();
        assert_eq!(err.to_string(), "Duplicated keys (coverage) are provided.");
        assert_eq!(result.metrics.as_ref().unwrap()["coverage"], 0.27);

        result.clear_metrics_entries();
        assert_eq!(result.metrics, None);
        assert_eq!(result.to_string(), format!("{{solutionVersionArn: {VERSION_ARN}}}"));
    }

    #[test]
    fn list_filters_uses_capitalised_member() {
        let body = r#"{"Filters": [{"name": "f1", "status": "ACTIVE"}], "nextToken": "t2"}"#;
        let result: ListFiltersResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.filters.as_ref().map(Vec::len), Some(1));
        assert_eq!(result.next_token.as_deref(), Some("t2"));
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("Filters").is_some());
        assert!(json.get("filters").is_none());
    }

    #[test]
    fn create_solution_version_serialises_training_mode() {
        let request = CreateSolutionVersionRequest::default()
            .solution_arn("arn:aws:personalize:us-east-1:123:solution/movies")
            .training_mode(TrainingMode::Full);
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"solutionArn":"arn:aws:personalize:us-east-1:123:solution/movies","trainingMode":"FULL"}"#
        );
    }

    #[test]
    fn unknown_training_mode_is_rejected_on_input() {
        let err = serde_json::from_str::<CreateSolutionVersionRequest>(r#"{"trainingMode": "PARTIAL"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn empty_result_accepts_empty_object() {
        let result: EmptyResult = serde_json::from_str("{}").unwrap();
        assert_eq!(result, EmptyResult::default());
        assert_eq!(result.to_string(), "{}");
    }

    #[test]
    fn campaign_requests_spell_tps_in_capitals() {
        let request = UpdateCampaignRequest::default()
            .campaign_arn("arn:aws:personalize:us-east-1:123:campaign/movies")
            .min_provisioned_tps(10);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["minProvisionedTPS"], 10);
    }

    #[test]
    fn list_recipes_request_carries_provider() {
        let request = ListRecipesRequest::default()
            .recipe_provider(RecipeProvider::Service)
            .max_results(25);
        assert_eq!(request.to_string(), "{recipeProvider: SERVICE,maxResults: 25}");
    }
}
