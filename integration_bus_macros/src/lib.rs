mod event;

use proc_macro::TokenStream;

// ============================================================================
// #[derive(Event)]
// ============================================================================

/// Derive macro for integration events.
///
/// Implements `integration_bus::Event` for a struct or enum. The routing name
/// defaults to the type name; override it with `#[event(name = "...")]`.
/// Mark one field with `#[event(correlation_id)]` to copy it onto outgoing
/// messages.
///
/// # Usage
///
/// ```ignore
/// #[derive(Serialize, Deserialize, Event)]
/// #[event(name = "OrderPlaced")]
/// struct OrderPlacedV2 {
///     #[event(correlation_id)]
///     order_id: String,
///     total_cents: u64,
/// }
///
/// assert_eq!(OrderPlacedV2::NAME, "OrderPlaced");
/// ```
#[proc_macro_derive(Event, attributes(event))]
pub fn derive_event(input: TokenStream) -> TokenStream {
    event::derive_event(input)
}
