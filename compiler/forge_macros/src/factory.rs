//! `#[factory]` expansion.

use forge_scan::attr::FactoryArgs;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

/// Validate `args` and return `item` untouched.
///
/// On error the item is still emitted next to the `compile_error!`, so a
/// bad attribute does not also hide the type from the rest of the crate.
pub(crate) fn expand(args: TokenStream2, item: TokenStream2) -> TokenStream2 {
    match syn::parse2::<FactoryArgs>(args) {
        Ok(_) => item,
        Err(err) => {
            let err = err.to_compile_error();
            quote! {
                #err
                #item
            }
        }
    }
}
