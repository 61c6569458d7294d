//! Static student profile endpoint

use super::types::Envelope;
use axum::Json;
use campus_core::{StudentId, StudentProfile};

/// Profile of the service author
pub fn author_profile() -> StudentProfile {
    StudentProfile {
        student_id: StudentId::new_unchecked("670610722".to_string()),
        first_name: "Bhumiphat".to_string(),
        last_name: "Likittrakulwong".to_string(),
        program: "CPE".to_string(),
        section: "001".to_string(),
    }
}

/// `GET /me`
pub(super) async fn me() -> Json<Envelope> {
    Json(Envelope::with_data(
        Some("Student Information".to_string()),
        author_profile(),
    ))
}
