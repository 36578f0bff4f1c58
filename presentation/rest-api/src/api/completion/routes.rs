use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, param::Query, payload::Json};

use business::domain::completion::use_cases::create::{
    CreateCompletionParams, CreateCompletionUseCase,
};
use business::domain::completion::use_cases::get_by_id::{
    GetCompletionByIdParams, GetCompletionByIdUseCase,
};
use business::domain::completion::use_cases::list_recent::{
    ListRecentCompletionsParams, ListRecentCompletionsUseCase,
};
use business::domain::completion::use_cases::search::{
    SearchCompletionsParams, SearchCompletionsUseCase,
};

use crate::api::completion::dto::{
    CompletionCreatedResponse, CompletionRecordResponse, CreateCompletionRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

/// Records returned by the list endpoint when no limit is given.
const DEFAULT_RECENT_LIMIT: usize = 5;

pub struct CompletionApi {
    create_use_case: Arc<dyn CreateCompletionUseCase>,
    list_recent_use_case: Arc<dyn ListRecentCompletionsUseCase>,
    get_by_id_use_case: Arc<dyn GetCompletionByIdUseCase>,
    search_use_case: Arc<dyn SearchCompletionsUseCase>,
}

impl CompletionApi {
    pub fn new(
        create_use_case: Arc<dyn CreateCompletionUseCase>,
        list_recent_use_case: Arc<dyn ListRecentCompletionsUseCase>,
        get_by_id_use_case: Arc<dyn GetCompletionByIdUseCase>,
        search_use_case: Arc<dyn SearchCompletionsUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            list_recent_use_case,
            get_by_id_use_case,
            search_use_case,
        }
    }
}

/// Completion API
///
/// Endpoints for generating completions through the remote model and
/// reading back the in-memory completion log.
#[OpenApi]
impl CompletionApi {
    /// Generate and store a completion
    ///
    /// Calls the model with the given prompt, stores the result in the
    /// completion log, and returns the stored record's id, text, and
    /// token usage.
    #[oai(path = "/api/completions", method = "post", tag = "ApiTags::Completions")]
    async fn create_completion(
        &self,
        body: Json<CreateCompletionRequest>,
    ) -> CreateCompletionResponse {
        let params = CreateCompletionParams {
            prompt: body.0.prompt.unwrap_or_default(),
        };

        match self.create_use_case.execute(params).await {
            Ok(record) => CreateCompletionResponse::Created(Json(record.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateCompletionResponse::BadRequest(json),
                    _ => CreateCompletionResponse::InternalError(json),
                }
            }
        }
    }

    /// List recent completions
    ///
    /// Returns the most recently created records, newest first.
    #[oai(path = "/api/completions", method = "get", tag = "ApiTags::Completions")]
    async fn list_recent_completions(
        &self,
        /// Maximum number of records to return (default: 5)
        limit: Query<Option<String>>,
    ) -> ListCompletionsResponse {
        // Non-numeric limit falls back to the default rather than failing.
        let limit = limit
            .0
            .and_then(|raw| raw.parse::<usize>().ok())
            .unwrap_or(DEFAULT_RECENT_LIMIT);

        match self
            .list_recent_use_case
            .execute(ListRecentCompletionsParams { limit })
            .await
        {
            Ok(records) => {
                let responses: Vec<CompletionRecordResponse> =
                    records.into_iter().map(|r| r.into()).collect();
                ListCompletionsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListCompletionsResponse::InternalError(json)
            }
        }
    }

    /// Search completions by prompt
    ///
    /// Returns every record whose prompt contains the term,
    /// case-insensitively.
    #[oai(
        path = "/api/completions/search",
        method = "get",
        tag = "ApiTags::Completions"
    )]
    async fn search_completions(
        &self,
        /// Substring to look for in stored prompts
        term: Query<Option<String>>,
    ) -> SearchCompletionsResponse {
        let params = SearchCompletionsParams {
            term: term.0.unwrap_or_default(),
        };

        match self.search_use_case.execute(params).await {
            Ok(records) => {
                let responses: Vec<CompletionRecordResponse> =
                    records.into_iter().map(|r| r.into()).collect();
                SearchCompletionsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SearchCompletionsResponse::BadRequest(json),
                    _ => SearchCompletionsResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a completion by id
    ///
    /// Returns the full stored record for the given id.
    #[oai(
        path = "/api/completions/:id",
        method = "get",
        tag = "ApiTags::Completions"
    )]
    async fn get_completion_by_id(&self, id: Path<String>) -> GetCompletionResponse {
        // A non-numeric id can never have been assigned, so it maps to 404.
        let id = match id.0.parse::<u64>() {
            Ok(id) => id,
            Err(_) => {
                return GetCompletionResponse::NotFound(Json(ErrorResponse {
                    error: "Completion not found".to_string(),
                    message: None,
                }));
            }
        };

        match self
            .get_by_id_use_case
            .execute(GetCompletionByIdParams { id })
            .await
        {
            Ok(record) => GetCompletionResponse::Ok(Json(record.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetCompletionResponse::NotFound(json),
                    _ => GetCompletionResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateCompletionResponse {
    #[oai(status = 201)]
    Created(Json<CompletionCreatedResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListCompletionsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CompletionRecordResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SearchCompletionsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CompletionRecordResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCompletionResponse {
    #[oai(status = 200)]
    Ok(Json<CompletionRecordResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
