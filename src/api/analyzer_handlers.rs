//! Website analysis API handler

use crate::analysis;
use crate::api::models::{AnalyzeWebsiteRequest, AnalyzeWebsiteResponse};
use crate::error::AppError;
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::info;
use url::Url;

/// Analyze a website through the n8n workflow and score the result
#[utoipa::path(
    post,
    path = "/api/analyze-website",
    tag = "Analyzer",
    request_body = AnalyzeWebsiteRequest,
    responses(
        (status = 200, description = "Analysis with score, strengths and improvements", body = AnalyzeWebsiteResponse),
        (status = 400, description = "Missing or invalid URL"),
        (status = 500, description = "Webhook failure or unusable analysis output"),
    )
)]
pub async fn analyze_website(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeWebsiteRequest>,
) -> Result<Json<AnalyzeWebsiteResponse>, AppError> {
    if request.url.trim().is_empty() {
        return Err(AppError::BadRequest("URLが提供されていません".to_string()));
    }

    if Url::parse(&request.url).is_err() {
        return Err(AppError::BadRequest("無効なURLです".to_string()));
    }

    info!(url = %request.url, "Received website analysis request");

    let output = state.analyzer.analyze(&request.url).await?;

    let score = analysis::extract_score(&output);
    let report = analysis::parse_report(&output);

    if report.improvements.is_empty() {
        return Err(AppError::Upstream {
            service: "n8n",
            detail: "分析結果から改善提案を抽出できませんでした。N8Nワークフローの出力を確認してください。"
                .to_string(),
        });
    }

    info!(
        url = %request.url,
        score,
        strengths = report.strengths.len(),
        improvements = report.improvements.len(),
        "Website analysis completed"
    );

    Ok(Json(AnalyzeWebsiteResponse {
        score,
        summary: format!(
            "{}の詳細分析が完了しました。AIによる総合的な評価と具体的な改善提案をご確認ください。",
            request.url
        ),
        strengths: report.strengths,
        improvements: report.improvements,
        full_analysis: output,
    }))
}
