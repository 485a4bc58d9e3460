use super::not_blank;
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, IntoParams, Clone)]
#[into_params(parameter_in = Query)]
pub struct FindTermRequest {
    #[validate(range(min = 1900, max = 2100, message = "year must be between 1900 and 2100"))]
    pub year: i32,

    #[validate(
        length(min = 1, max = 20, message = "term is required"),
        custom(function = "not_blank", message = "term is required")
    )]
    pub term: String,
}
