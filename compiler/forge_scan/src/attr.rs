//! The `#[factory]` attribute.
//!
//! Shared by the scanner and the `forge_macros` attribute so both accept
//! exactly the same syntax:
//!
//! ```text
//! #[factory(id = "Margherita", ty = crate::store::Meal)]
//! ```
//!
//! `ty` is required. `id` may be left out; the registry then reports the
//! missing id like an empty one.

use syn::parse::{Parse, ParseStream};
use syn::{Attribute, Ident, LitStr, Path, Token};

/// Name of the attribute.
pub const ATTRIBUTE: &str = "factory";

/// Parsed arguments of a `#[factory(...)]` attribute.
#[derive(Clone, Debug)]
pub struct FactoryArgs {
    pub id: Option<LitStr>,
    pub ty: Path,
}

impl FactoryArgs {
    /// Parse the arguments of `attr`.
    pub fn from_attribute(attr: &Attribute) -> syn::Result<Self> {
        attr.parse_args()
    }

    /// The id text, if given.
    pub fn id_value(&self) -> Option<String> {
        self.id.as_ref().map(LitStr::value)
    }
}

impl Parse for FactoryArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut id: Option<LitStr> = None;
        let mut ty: Option<Path> = None;

        while !input.is_empty() {
            let key: Ident = input.parse()?;
            let _: Token![=] = input.parse()?;

            match key.to_string().as_str() {
                "id" => {
                    if id.is_some() {
                        return Err(syn::Error::new(key.span(), "duplicate `id` argument"));
                    }
                    id = Some(input.parse()?);
                }
                "ty" => {
                    if ty.is_some() {
                        return Err(syn::Error::new(key.span(), "duplicate `ty` argument"));
                    }
                    ty = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        key.span(),
                        format!("unknown `#[factory]` argument `{other}`, expected `id` or `ty`"),
                    ));
                }
            }

            if input.is_empty() {
                break;
            }
            let _: Token![,] = input.parse()?;
        }

        let ty = ty.ok_or_else(|| {
            syn::Error::new(input.span(), "missing `ty = ...` argument in `#[factory]`")
        })?;
        Ok(FactoryArgs { id, ty })
    }
}

/// Whether `attr` is `#[factory]`, possibly written with a crate prefix.
pub fn is_factory(attr: &Attribute) -> bool {
    attr.path()
        .segments
        .last()
        .is_some_and(|segment| segment.ident == ATTRIBUTE)
}

/// All `#[factory]` attributes among `attrs`.
pub fn factory_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| is_factory(attr))
}
