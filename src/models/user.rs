use serde::{Deserialize, Serialize};

/// Identity taken from a verified token. Accounts live with the
/// identity provider; only the subject id is needed here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
}
