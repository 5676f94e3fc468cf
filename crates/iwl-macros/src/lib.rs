use proc_macro::TokenStream;
use proc_macro2::{Ident, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Fields, LitStr};

/// Derive macro for flat measurement rows stored column-wise.
///
/// Every field of the row must be `f64`; NaN means "no value". A row whose
/// fields are all NaN is a *withheld* row: the patient could not be evaluated
/// but still occupies its slot, so batch columns keep the cohort's length.
///
/// Generated on the row struct:
/// - `field_names()`, `withheld()`, `is_withheld()`, `value(name)`
///
/// Generated companion `{Name}Columns` (one `Vec<f64>` per field):
/// - `with_capacity`, `push`, `push_withheld`, `len`, `is_empty`, `row(i)`
/// - `withheld_count`, `column(name)`, `into_named_columns`
///
/// `#[columnar(columns_name = "Custom")]` renames the companion struct.
#[proc_macro_derive(Columnar, attributes(columnar))]
pub fn derive_columnar(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let columns_name =
        columns_name(input)?.unwrap_or_else(|| format_ident!("{}Columns", name));
    let fields = f64_fields(input)?;

    let n_fields = fields.len();
    let first = fields[0];
    let names: Vec<String> = fields.iter().map(|f| f.to_string()).collect();

    let row = quote! {
        impl #name {
            /// Column names, in declaration order.
            pub fn field_names() -> &'static [&'static str] {
                &[#(#names),*]
            }

            /// Row with every value NaN.
            pub fn withheld() -> Self {
                Self {
                    #(#fields: f64::NAN,)*
                }
            }

            /// Returns `true` if every value is NaN.
            pub fn is_withheld(&self) -> bool {
                #(self.#fields.is_nan())&&*
            }

            /// Value of the named column.
            pub fn value(&self, name: &str) -> Option<f64> {
                match name {
                    #(#names => Some(self.#fields),)*
                    _ => None,
                }
            }
        }
    };

    let columns = quote! {
        /// Column store generated by `#[derive(Columnar)]`.
        #[derive(Debug, Clone, Default)]
        pub struct #columns_name {
            #(pub #fields: Vec<f64>,)*
        }

        impl #columns_name {
            pub fn with_capacity(n: usize) -> Self {
                Self {
                    #(#fields: Vec::with_capacity(n),)*
                }
            }

            pub fn push(&mut self, row: &#name) {
                #(self.#fields.push(row.#fields);)*
            }

            /// Append an all-NaN row.
            pub fn push_withheld(&mut self) {
                #(self.#fields.push(f64::NAN);)*
            }

            pub fn len(&self) -> usize {
                self.#first.len()
            }

            pub fn is_empty(&self) -> bool {
                self.#first.is_empty()
            }

            /// Rebuild row `i`, or `None` past the end.
            pub fn row(&self, i: usize) -> Option<#name> {
                Some(#name {
                    #(#fields: *self.#fields.get(i)?,)*
                })
            }

            /// Number of all-NaN rows.
            pub fn withheld_count(&self) -> usize {
                (0..self.len())
                    .filter_map(|i| self.row(i))
                    .filter(#name::is_withheld)
                    .count()
            }

            pub fn column(&self, name: &str) -> Option<&[f64]> {
                match name {
                    #(#names => Some(self.#fields.as_slice()),)*
                    _ => None,
                }
            }

            /// Consume the store into `(name, column)` pairs in declaration order.
            pub fn into_named_columns(self) -> [(&'static str, Vec<f64>); #n_fields] {
                [#((#names, self.#fields)),*]
            }
        }
    };

    Ok(quote! {
        #row
        #columns
    })
}

fn columns_name(input: &DeriveInput) -> syn::Result<Option<Ident>> {
    let mut renamed = None;
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("columnar")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("columns_name") {
                let lit: LitStr = meta.value()?.parse()?;
                renamed = Some(lit.parse::<Ident>()?);
                Ok(())
            } else {
                Err(meta.error("unknown columnar option, expected `columns_name`"))
            }
        })?;
    }
    Ok(renamed)
}

fn f64_fields(input: &DeriveInput) -> syn::Result<Vec<&Ident>> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Columnar can only be derived for structs",
        ));
    };
    let Fields::Named(named) = &data.fields else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Columnar needs named fields, one per column",
        ));
    };
    if named.named.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Columnar struct must have at least one column",
        ));
    }

    let mut error: Option<syn::Error> = None;
    let mut idents = Vec::with_capacity(named.named.len());
    for field in &named.named {
        if !is_f64(&field.ty) {
            let e = syn::Error::new_spanned(&field.ty, "Columnar columns must be f64");
            error = Some(match error.take() {
                Some(mut existing) => {
                    existing.combine(e);
                    existing
                }
                None => e,
            });
        }
        idents.extend(field.ident.as_ref());
    }
    match error {
        Some(e) => Err(e),
        None => Ok(idents),
    }
}

fn is_f64(ty: &syn::Type) -> bool {
    matches!(ty, syn::Type::Path(p) if p.qself.is_none() && p.path.is_ident("f64"))
}
