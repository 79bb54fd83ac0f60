use axum::extract::Path;
use axum::Json;

use timestamp_entities::{Timestamp, TimestampError};

/// Resolve a date path segment into its epoch and natural representations
#[utoipa::path(
    get,
    path = "/{date}",
    tag = "Timestamps",
    responses(
        (status = 200, description = "Successfully resolved the timestamp", body = Timestamp,
         example = json!({
            "unix": 1_450_137_600_i64,
            "natural": "2015-12-15 00:00:00 +0000 UTC"
         })
        ),
        (status = 400, description = "Input matches neither epoch seconds nor the date layout", body = Timestamp,
         example = json!({
            "unix": null,
            "natural": null
         })
        )
    ),
    params(
        ("date" = String, Path, description = "Epoch seconds (e.g. 1450137600) or a date such as `December 15, 2015`")
    )
)]
#[tracing::instrument]
pub async fn get_timestamp(
    Path(date): Path<String>,
) -> Result<Json<Timestamp>, TimestampError> {
    let timestamp = Timestamp::resolve(&date)?;
    Ok(Json(timestamp))
}
