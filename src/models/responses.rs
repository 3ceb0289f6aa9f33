use mongodb::bson::Bson;
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use serde::Serialize;

// Write acknowledgements mirroring the field names of the MongoDB driver
// result documents that the frontend already consumes (insertedId,
// matchedCount, modifiedCount, upsertedId, deletedCount).

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertOneResponse {
    /// Only set for the duplicate-user no-op marker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Hex id of the inserted document, null when nothing was inserted.
    pub inserted_id: Option<String>,
}

impl From<InsertOneResult> for InsertOneResponse {
    fn from(result: InsertOneResult) -> Self {
        InsertOneResponse {
            message: None,
            inserted_id: result.inserted_id.as_object_id().map(|oid| oid.to_hex()),
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResponse {
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_id: Option<String>,
}

impl From<UpdateResult> for UpdateResponse {
    fn from(result: UpdateResult) -> Self {
        UpdateResponse {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_id: result
                .upserted_id
                .as_ref()
                .and_then(Bson::as_object_id)
                .map(|oid| oid.to_hex()),
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub deleted_count: u64,
}

impl From<DeleteResult> for DeleteResponse {
    fn from(result: DeleteResult) -> Self {
        DeleteResponse {
            deleted_count: result.deleted_count,
        }
    }
}
