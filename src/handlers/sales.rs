use crate::domain::{AgeBracket, MarketingMedium, SaleEvent};
use crate::AppState;
use axum::{extract::State, Extension, Json};

/// Acknowledgement returned for every recorded sale.
pub const SALE_RECORDED: &str = "Venda registrada!";

/// Handler for recording a completed sale (POST /complete-sale).
///
/// Expects a `SaleEvent` JSON body. The sale is added to the product,
/// location and age-bracket counters and a fixed acknowledgement is
/// returned.
///
/// - Always responds with `200 OK` once the body deserializes.
/// - Malformed bodies are rejected by the `Json` extractor (400/415/422).
///
/// No validation or deduplication is performed; posting the same sale twice
/// counts it twice.
#[tracing::instrument(skip(state, sale))]
pub async fn complete_sale(
    State(state): State<AppState>,
    Extension(medium): Extension<MarketingMedium>,
    Json(sale): Json<SaleEvent>,
) -> &'static str {
    // ---
    tracing::info!(
        product = %sale.product_name,
        quantity = sale.quantity_sold,
        bracket = %AgeBracket::from_age(sale.age),
        location = %sale.location,
        "Sale completed"
    );

    state.metrics().record_sale(&sale);

    SALE_RECORDED
}
