//! DTOs for the starships-by-person endpoint.

use serde::Deserialize;
use validator::Validate;

/// Query string of `GET /api/swapi/starships`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct StarshipsQuery {
    /// Name searched for; the service default applies when absent. Only the
    /// length is checked, the upstream search accepts any text.
    #[validate(length(min = 1, max = 100))]
    pub person_name: Option<String>,
}
