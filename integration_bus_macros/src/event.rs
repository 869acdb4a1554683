use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, LitStr};

pub fn derive_event(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let event_name = extract_name(input)?;
    let correlation_id = match extract_correlation_field(input)? {
        Some(field) => quote! {
            fn correlation_id(&self) -> ::std::option::Option<::std::string::String> {
                ::std::option::Option::Some(::std::string::ToString::to_string(&self.#field))
            }
        },
        None => quote! {},
    };

    Ok(quote! {
        impl #impl_generics ::integration_bus::Event for #name #ty_generics #where_clause {
            const NAME: &'static str = #event_name;

            #correlation_id
        }
    })
}

// #[event(name = "...")] on the type, or the type name itself
fn extract_name(input: &DeriveInput) -> syn::Result<String> {
    for attr in &input.attrs {
        if !attr.path().is_ident("event") {
            continue;
        }

        let mut name = None;
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let value: LitStr = meta.value()?.parse()?;
                if value.value().is_empty() {
                    return Err(meta.error("event name must not be empty"));
                }
                name = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("expected `name = \"...\"`"))
            }
        })?;

        if let Some(name) = name {
            return Ok(name);
        }
    }

    Ok(input.ident.to_string())
}

// The single named field marked #[event(correlation_id)], if any
fn extract_correlation_field(input: &DeriveInput) -> syn::Result<Option<syn::Ident>> {
    let Data::Struct(data_struct) = &input.data else {
        return Ok(None);
    };
    let Fields::Named(fields) = &data_struct.fields else {
        return Ok(None);
    };

    let mut found: Option<syn::Ident> = None;
    for field in &fields.named {
        for attr in &field.attrs {
            if !attr.path().is_ident("event") {
                continue;
            }

            let mut is_correlation = false;
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("correlation_id") {
                    is_correlation = true;
                    Ok(())
                } else {
                    Err(meta.error("expected `correlation_id`"))
                }
            })?;

            if is_correlation {
                if found.is_some() {
                    return Err(syn::Error::new_spanned(
                        attr,
                        "only one field can be marked #[event(correlation_id)]",
                    ));
                }
                found = field.ident.clone();
            }
        }
    }

    Ok(found)
}
