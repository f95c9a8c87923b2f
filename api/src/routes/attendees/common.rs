use db::models::attendee::Model as AttendeeModel;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Wire representation of one attendee. Field names are camelCase to match
/// what the scanner and export clients already consume.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendeeResponse {
    pub id: String,
    pub name: String,
    pub title: Option<String>,
    pub district: Option<String>,
    pub region: Option<String>,
    pub scanned: bool,
    pub scan_time: Option<String>,
    pub scanned_times: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<AttendeeModel> for AttendeeResponse {
    fn from(attendee: AttendeeModel) -> Self {
        Self {
            id: attendee.id,
            name: attendee.name,
            title: attendee.title,
            district: attendee.district,
            region: attendee.region,
            scanned: attendee.scanned,
            scan_time: attendee.scan_time.map(|t| t.to_rfc3339()),
            scanned_times: attendee.scanned_times,
            created_at: attendee.created_at.to_rfc3339(),
            updated_at: attendee.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct CreateAttendeeRequest {
    #[validate(length(min = 1))]
    pub name: String,
    pub title: Option<String>,
    pub district: Option<String>,
    pub region: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct BulkCreateAttendeesRequest {
    #[validate(length(min = 1))]
    #[validate(nested)]
    pub attendees: Vec<CreateAttendeeRequest>,
}

/// Descriptive fields only. Check-in state is never editable through the
/// record-management surface.
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct UpdateAttendeeRequest {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub title: Option<String>,
    pub district: Option<String>,
    pub region: Option<String>,
}
