use proc_macro::TokenStream;
use proc_macro2::{Ident, Span, TokenStream as TokenStream2};
use proc_macro_crate::{FoundCrate, crate_name};
use quote::{format_ident, quote};
use syn::punctuated::Punctuated;
use syn::token::Comma;
use syn::{Data, DeriveInput, Field, Fields, parse_macro_input};

/// Derives `socialnetwork::form::FormModel` for a struct with named fields.
///
/// For `struct RegisterState { username_text: String }` this generates a
/// `RegisterStateUsernameTextLens` implementing `FieldLens<RegisterState>`
/// and a `RegisterStateFields` accessor with one `const fn` per field.
#[proc_macro_derive(FormModel)]
pub fn derive_form_model(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            input.ident,
            "FormModel derive supports only non-generic structs",
        ));
    }

    let model_ident = input.ident;
    let fields = named_fields(input.data)?;
    let fields_struct_ident = format_ident!("{model_ident}Fields");
    let root = crate_path();

    let (lens_defs, accessors): (Vec<_>, Vec<_>) = fields
        .into_iter()
        .filter_map(|field| {
            let ident = field.ident?;
            let ty = field.ty;
            let name = ident.to_string();
            let lens_ident = format_ident!("{model_ident}{}Lens", to_pascal_case(&name));

            let lens = quote! {
                #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
                pub struct #lens_ident;

                impl #root::form::FieldLens<#model_ident> for #lens_ident {
                    type Value = #ty;

                    fn key(self) -> #root::form::FieldKey {
                        #root::form::FieldKey::new(#name)
                    }

                    fn get<'a>(self, model: &'a #model_ident) -> &'a Self::Value {
                        &model.#ident
                    }

                    fn set(self, model: &mut #model_ident, value: Self::Value) {
                        model.#ident = value;
                    }
                }
            };
            let accessor = quote! {
                pub const fn #ident(&self) -> #lens_ident {
                    #lens_ident
                }
            };
            Some((lens, accessor))
        })
        .unzip();

    Ok(quote! {
        #[derive(Clone, Copy, Debug, Default)]
        pub struct #fields_struct_ident;

        impl #fields_struct_ident {
            #(#accessors)*
        }

        impl #root::form::FormModel for #model_ident {
            type Fields = #fields_struct_ident;

            fn fields() -> Self::Fields {
                #fields_struct_ident
            }
        }

        #(#lens_defs)*
    })
}

fn named_fields(data: Data) -> syn::Result<Punctuated<Field, Comma>> {
    match data {
        Data::Struct(data) => match data.fields {
            Fields::Named(fields) => Ok(fields.named),
            _ => Err(syn::Error::new(
                Span::call_site(),
                "FormModel derive requires a struct with named fields",
            )),
        },
        _ => Err(syn::Error::new(
            Span::call_site(),
            "FormModel derive is only supported on structs",
        )),
    }
}

fn crate_path() -> TokenStream2 {
    match crate_name("socialnetwork") {
        Ok(FoundCrate::Name(name)) => {
            let ident = Ident::new(&name, Span::call_site());
            quote!(::#ident)
        }
        Ok(FoundCrate::Itself) => quote!(crate),
        Err(_) => quote!(::socialnetwork),
    }
}

fn to_pascal_case(input: &str) -> String {
    input
        .split('_')
        .filter(|segment| !segment.is_empty())
        .flat_map(|segment| {
            let mut chars = segment.chars();
            chars
                .next()
                .map(|first| first.to_ascii_uppercase())
                .into_iter()
                .chain(chars)
        })
        .collect()
}
