//! The Personalize operation catalogue.
//!
//! Every operation is addressed on the JSON 1.1 protocol through the
//! `X-Amz-Target` header, `AmazonPersonalize.<Operation>`. Each request shape
//! is bound to its operation and result shape through [`OperationRequest`].

use std::fmt;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::error::PersonalizeError;
use super::requests::*;

pub const TARGET_PREFIX: &str = "AmazonPersonalize";
pub const ENDPOINT_PREFIX: &str = "personalize";
pub const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

pub fn endpoint(region: &str) -> String {
    format!("{ENDPOINT_PREFIX}.{region}.amazonaws.com")
}

pub trait OperationRequest: Serialize + DeserializeOwned + fmt::Display {
    type Output: Serialize + DeserializeOwned + fmt::Display;
    const OPERATION: Operation;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Request,
    Result,
}

/// A JSON document decoded as one of the operation's shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct Inspection {
    pub operation: Operation,
    pub direction: Direction,
    pub display: String,
    pub json: Value,
    /// Top-level members of the input that the shape does not carry.
    pub ignored_members: Vec<String>,
}

fn inspect_as<T>(
    operation: Operation,
    direction: Direction,
    body: &[u8],
) -> Result<Inspection, PersonalizeError>
where
    T: Serialize + DeserializeOwned + fmt::Display,
{
    let raw: Value = serde_json::from_slice(body)?;
    let shape: T = serde_json::from_value(raw.clone())?;
    let json = serde_json::to_value(&shape)?;
    let ignored_members = match (&raw, &json) {
        (Value::Object(input), Value::Object(kept)) => input
            .iter()
            .filter(|(key, value)| !value.is_null() && !kept.contains_key(key.as_str()))
            .map(|(key, _)| key.clone())
            .collect(),
        _ => Vec::new(),
    };
    Ok(Inspection {
        operation,
        direction,
        display: shape.to_string(),
        json,
        ignored_members,
    })
}

macro_rules! operations {
    ($($variant:ident => $request:ty, $output:ty;)+) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Operation {
            $($variant,)+
        }

        impl Operation {
            pub const ALL: &'static [Operation] = &[$(Operation::$variant,)+];

            pub fn name(&self) -> &'static str {
                match self {
                    $(Operation::$variant => stringify!($variant),)+
                }
            }

            fn inspect_shape(
                self,
                direction: Direction,
                body: &[u8],
            ) -> Result<Inspection, PersonalizeError> {
                match (self, direction) {
                    $(
                        (Operation::$variant, Direction::Request) => {
                            inspect_as::<$request>(self, direction, body)
                        }
                        (Operation::$variant, Direction::Result) => {
                            inspect_as::<$output>(self, direction, body)
                        }
                    )+
                }
            }
        }

        $(
            impl OperationRequest for $request {
                type Output = $output;
                const OPERATION: Operation = Operation::$variant;
            }
        )+
    };
}

operations! {
    CreateBatchInferenceJob => CreateBatchInferenceJobRequest, CreateBatchInferenceJobResult;
    CreateCampaign => CreateCampaignRequest, CreateCampaignResult;
    CreateDataset => CreateDatasetRequest, CreateDatasetResult;
    CreateDatasetGroup => CreateDatasetGroupRequest, CreateDatasetGroupResult;
    CreateDatasetImportJob => CreateDatasetImportJobRequest, CreateDatasetImportJobResult;
    CreateEventTracker => CreateEventTrackerRequest, CreateEventTrackerResult;
    CreateFilter => CreateFilterRequest, CreateFilterResult;
    CreateSchema => CreateSchemaRequest, CreateSchemaResult;
    CreateSolution => CreateSolutionRequest, CreateSolutionResult;
    CreateSolutionVersion => CreateSolutionVersionRequest, CreateSolutionVersionResult;
    DeleteCampaign => DeleteCampaignRequest, EmptyResult;
    DeleteDataset => DeleteDatasetRequest, EmptyResult;
    DeleteDatasetGroup => DeleteDatasetGroupRequest, EmptyResult;
    DeleteEventTracker => DeleteEventTrackerRequest, EmptyResult;
    DeleteFilter => DeleteFilterRequest, EmptyResult;
    DeleteSchema => DeleteSchemaRequest, EmptyResult;
    DeleteSolution => DeleteSolutionRequest, EmptyResult;
    DescribeAlgorithm => DescribeAlgorithmRequest, DescribeAlgorithmResult;
    DescribeBatchInferenceJob => DescribeBatchInferenceJobRequest, DescribeBatchInferenceJobResult;
    DescribeCampaign => DescribeCampaignRequest, DescribeCampaignResult;
    DescribeDataset => DescribeDatasetRequest, DescribeDatasetResult;
    DescribeDatasetGroup => DescribeDatasetGroupRequest, DescribeDatasetGroupResult;
    DescribeDatasetImportJob => DescribeDatasetImportJobRequest, DescribeDatasetImportJobResult;
    DescribeEventTracker => DescribeEventTrackerRequest, DescribeEventTrackerResult;
    DescribeFeatureTransformation => DescribeFeatureTransformationRequest, DescribeFeatureTransformationResult;
    DescribeFilter => DescribeFilterRequest, DescribeFilterResult;
    DescribeRecipe => DescribeRecipeRequest, DescribeRecipeResult;
    DescribeSchema => DescribeSchemaRequest, DescribeSchemaResult;
    DescribeSolution => DescribeSolutionRequest, DescribeSolutionResult;
    DescribeSolutionVersion => DescribeSolutionVersionRequest, DescribeSolutionVersionResult;
    GetSolutionMetrics => GetSolutionMetricsRequest, GetSolutionMetricsResult;
    ListBatchInferenceJobs => ListBatchInferenceJobsRequest, ListBatchInferenceJobsResult;
    ListCampaigns => ListCampaignsRequest, ListCampaignsResult;
    ListDatasetGroups => ListDatasetGroupsRequest, ListDatasetGroupsResult;
    ListDatasetImportJobs => ListDatasetImportJobsRequest, ListDatasetImportJobsResult;
    ListDatasets => ListDatasetsRequest, ListDatasetsResult;
    ListEventTrackers => ListEventTrackersRequest, ListEventTrackersResult;
    ListFilters => ListFiltersRequest, ListFiltersResult;
    ListRecipes => ListRecipesRequest, ListRecipesResult;
    ListSchemas => ListSchemasRequest, ListSchemasResult;
    ListSolutionVersions => ListSolutionVersionsRequest, ListSolutionVersionsResult;
    ListSolutions => ListSolutionsRequest, ListSolutionsResult;
    UpdateCampaign => UpdateCampaignRequest, UpdateCampaignResult;
}

impl Operation {
    /// Value of the `X-Amz-Target` header.
    pub fn target(&self) -> String {
        format!("{TARGET_PREFIX}.{}", self.name())
    }

    pub fn has_empty_result(&self) -> bool {
        self.name().starts_with("Delete")
    }

    pub fn inspect(self, direction: Direction, body: &[u8]) -> Result<Inspection, PersonalizeError> {
        tracing::debug!(operation = self.name(), ?direction, len = body.len(), "inspecting document");
        self.inspect_shape(direction, body)
    }
}

/// Reads the document from `path`, or from stdin when no path is given.
pub fn inspect_path(
    operation: Operation,
    direction: Direction,
    path: Option<&Path>,
) -> Result<Inspection, PersonalizeError> {
    let body = match path {
        Some(path) => std::fs::read(path).map_err(|e| PersonalizeError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?,
        None => {
            let mut body = Vec::new();
            std::io::stdin()
                .read_to_end(&mut body)
                .map_err(|e| PersonalizeError::Unreadable {
                    path: "<stdin>".to_string(),
                    reason: e.to_string(),
                })?;
            body
        }
    };
    operation.inspect(direction, &body)
}

impl FromStr for Operation {
    type Err = PersonalizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s
            .strip_prefix(TARGET_PREFIX)
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(s);
        Operation::ALL
            .iter()
            .copied()
            .find(|op| op.name() == name)
            .ok_or_else(|| PersonalizeError::UnknownOperation(s.to_string()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
