// Field rules shared by create and update validation.

use crate::shared::validation::ValidationErrors;

pub const NAME: &str = "name";
pub const DESCRIPTION: &str = "description";
pub const OWNER: &str = "owner";
pub const CO2_ESTIMATE_REDUCTION: &str = "co2EstimateReduction";
pub const LISTING: &str = "listing";

pub fn check_text(errors: &mut ValidationErrors, field: &str, value: String) -> Option<String> {
    if value.is_empty() {
        errors.add(field, "should not be empty");
        return None;
    }
    Some(value)
}

pub fn check_listing(errors: &mut ValidationErrors, listing: Vec<String>) -> Option<Vec<String>> {
    if listing.is_empty() {
        errors.add(LISTING, "must contain at least 1 element");
        return None;
    }
    Some(listing)
}
