//! Procedural macros for forge.
//!
//! `#[factory]` marks a type for registration in the dispatcher of its
//! capability type:
//!
//! ```text
//! use forge_macros::factory;
//!
//! #[factory(id = "Margherita", ty = Meal)]
//! pub struct MargheritaPizza;
//! ```
//!
//! The attribute itself generates nothing. `forge_scan` finds it when the
//! crate's build script runs and writes the dispatcher; the macro only
//! rejects malformed arguments early, with a span, and hands the item back
//! unchanged.

mod factory;

use proc_macro::TokenStream;

/// Register a type under `id` in the dispatcher for `ty`.
///
/// # Arguments
/// - `ty = Path` - Required. The capability type (a trait, or a type the
///   tagged type converts into).
/// - `id = "..."` - The id the dispatcher creates this type for. Must be
///   unique among the types registered for the same `ty`.
#[proc_macro_attribute]
pub fn factory(args: TokenStream, item: TokenStream) -> TokenStream {
    factory::expand(args.into(), item.into()).into()
}
