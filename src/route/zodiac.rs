use poem_openapi::{param::Query, payload::Json, OpenApi, Tags};

use crate::{
    core::utils::{date_to_string, parse_date},
    schema::{
        common::BadRequestResponse,
        zodiac::{ZodiacResponse, ZodiacResponses},
    },
    service::zodiac::{owned_traits, sign_from_date},
};

#[derive(Tags)]
enum ApiZodiacTags {
    Zodiac,
}

pub struct ApiZodiac;

#[OpenApi]
impl ApiZodiac {
    /// Preview the sun sign and traits a birth date resolves to
    #[oai(path = "/zodiac/", method = "get", tag = "ApiZodiacTags::Zodiac")]
    async fn zodiac_api(&self, Query(birth_date): Query<String>) -> ZodiacResponses {
        let date = match parse_date(&birth_date) {
            Ok(val) => val,
            Err(_) => {
                return ZodiacResponses::BadRequest(Json(BadRequestResponse {
                    message: format!("birth_date {} is not a YYYY-MM-DD date", birth_date),
                }))
            }
        };
        let sun_sign = sign_from_date(&date);
        ZodiacResponses::Ok(Json(ZodiacResponse {
            birth_date: date_to_string(date),
            sun_sign,
            traits: owned_traits(sun_sign),
        }))
    }
}
