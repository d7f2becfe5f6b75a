use crate::domain::AgeBracket;
use metrics::{counter, describe_counter, describe_histogram, histogram, Unit};
use std::time::Instant;

pub const PRODUCT_SOLD_TOTAL: &str = "contoso_product_sold_total";
pub const SALES_BY_LOCATION_TOTAL: &str = "contoso_sales_by_location_total";
pub const HTTP_SERVER_REQUEST_DURATION: &str = "http_server_request_duration_seconds";

/// One counter per age bracket, indexed by [`AgeBracket::index`].
pub const USER_AGE_TOTALS: [&str; 9] = [
    "contoso_user_age_0_10_total",
    "contoso_user_age_11_20_total",
    "contoso_user_age_21_30_total",
    "contoso_user_age_31_40_total",
    "contoso_user_age_41_50_total",
    "contoso_user_age_51_60_total",
    "contoso_user_age_61_70_total",
    "contoso_user_age_71_80_total",
    "contoso_user_age_81_plus_total",
];

/// Name of the counter tracking sales for the given bracket.
pub fn age_bracket_counter(bracket: AgeBracket) -> &'static str {
    USER_AGE_TOTALS[bracket.index()]
}

/// Register HELP text for every metric this service emits.
pub fn describe_all() {
    // ---
    describe_counter!(PRODUCT_SOLD_TOTAL, "Units sold, by product");
    describe_counter!(SALES_BY_LOCATION_TOTAL, "Units sold, by location");
    for bracket in AgeBracket::ALL {
        describe_counter!(
            age_bracket_counter(bracket),
            format!("Units sold to customers aged {bracket}, by product")
        );
    }
    describe_histogram!(
        HTTP_SERVER_REQUEST_DURATION,
        Unit::Seconds,
        "Duration of inbound HTTP requests"
    );
}

/// Add `quantity` to the units-sold counter for a product.
pub fn increment_product_sold(product_name: &str, quantity: u64) {
    counter!(PRODUCT_SOLD_TOTAL, "product_name" => product_name.to_owned()).increment(quantity);
}

/// Add `quantity` to the units-sold counter for a location.
pub fn increment_sales_by_location(location: &str, quantity: u64) {
    counter!(SALES_BY_LOCATION_TOTAL, "location" => location.to_owned()).increment(quantity);
}

/// Add `quantity` to the bracket's counter for a product.
pub fn increment_age_bracket(bracket: AgeBracket, product_name: &str, quantity: u64) {
    counter!(age_bracket_counter(bracket), "product_name" => product_name.to_owned())
        .increment(quantity);
}

/// Track HTTP request latency using a histogram.
pub fn track_http_request(
    start: Instant,
    route: &str,
    method: &str,
    status: u16,
    medium: &'static str,
) {
    let elapsed = start.elapsed();
    histogram!(
        HTTP_SERVER_REQUEST_DURATION,
        "http_request_method" => method.to_owned(),
        "http_route" => route.to_owned(),
        "http_response_status_code" => status.to_string(),
        "mkt_medium" => medium
    )
    .record(elapsed);
}
