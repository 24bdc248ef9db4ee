extern crate proc_macro;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};

/// Derives `twine::record::Record` along with `Encode`, `Decode`, `ToNode` and `FromNode`
///
/// Named fields keep their names; tuple fields are named `field_0`, `field_1`, ...
/// Every type parameter is required to implement `twine::Codec`, and the
/// decoding impls additionally require `Self: Default`.
#[proc_macro_derive(Record)]
pub fn record_derive(input: TokenStream) -> TokenStream {
    let ast = syn::parse_macro_input!(input as syn::DeriveInput);

    match impl_record(&ast) {
        Ok(gen) => gen.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn impl_record(ast: &syn::DeriveInput) -> syn::Result<TokenStream2> {
    let record_trait = quote! { ::twine::record::Record };
    let codec_trait = quote! { ::twine::Codec };
    let encode_trait = quote! { ::twine::conv::Encode };
    let decode_trait = quote! { ::twine::conv::Decode };
    let to_node_trait = quote! { ::twine::tree::ToNode };
    let from_node_trait = quote! { ::twine::tree::FromNode };
    let target_trait = quote! { ::twine::conv::target::Target };
    let parser_trait = quote! { ::twine::parse::Parser };
    let node_trait = quote! { ::twine::tree::TreeNode };
    let parse_result_type = quote! { ::twine::parse::ParseResult };
    let tree_result_type = quote! { ::twine::tree::TreeResult };

    let fields = match &ast.data {
        syn::Data::Enum(_) => {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "Derive macro `Record` not implemented for enums",
            ))
        }
        syn::Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "Derive macro `Record` not implemented for unions",
            ))
        }
        syn::Data::Struct(syn::DataStruct { fields, .. }) => fields,
    };

    let (fname, access): (Vec<String>, Vec<TokenStream2>) = match fields {
        syn::Fields::Unit => (Vec::new(), Vec::new()),
        syn::Fields::Unnamed(syn::FieldsUnnamed { unnamed, .. }) => (0..unnamed.len())
            .map(|i| {
                let ix = syn::Index::from(i);
                (format!("field_{}", i), quote! { #ix })
            })
            .unzip(),
        syn::Fields::Named(syn::FieldsNamed { named, .. }) => named
            .iter()
            .filter_map(|f| f.ident.as_ref())
            .map(|id| (unraw(id), quote! { #id }))
            .unzip(),
    };

    let name = &ast.ident;

    let mut generics = ast.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(syn::parse_quote!(#codec_trait));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let mut dec_generics = generics.clone();
    dec_generics
        .make_where_clause()
        .predicates
        .push(syn::parse_quote!(Self: ::core::default::Default));
    let (_, _, dec_where_clause) = dec_generics.split_for_impl();

    let visitor = format_ident!("__visitor");

    let gen = quote! {
        impl #impl_generics #record_trait for #name #ty_generics #where_clause {
            const FIELDS: &'static [&'static str] = &[#( #fname ),*];

            #[allow(unused_variables)]
            fn visit<__V: ::twine::record::FieldVisitor>(&self, #visitor: &mut __V) {
                #( #visitor.field(#fname, &self.#access); )*
            }

            #[allow(unused_variables)]
            fn visit_mut<__V: ::twine::record::FieldVisitorMut>(
                &mut self,
                #visitor: &mut __V,
            ) -> ::core::result::Result<(), __V::Error> {
                #( #visitor.field(#fname, &mut self.#access)?; )*
                ::core::result::Result::Ok(())
            }
        }

        impl #impl_generics #encode_trait for #name #ty_generics #where_clause {
            fn write_to<__U: #target_trait>(&self, buf: &mut __U) -> usize {
                ::twine::record::write_record(self, buf)
            }
        }

        impl #impl_generics #decode_trait for #name #ty_generics #dec_where_clause {
            fn parse<__P: #parser_trait>(p: &mut __P) -> #parse_result_type<Self> {
                ::twine::record::parse_record(p)
            }

            fn parse_into<__P: #parser_trait>(&mut self, p: &mut __P) -> #parse_result_type<()> {
                ::twine::record::parse_record_into(self, p)
            }
        }

        impl #impl_generics #to_node_trait for #name #ty_generics #where_clause {
            fn write_node<__N: #node_trait>(&self, parent: &mut __N) {
                ::twine::record::write_record_node(self, parent)
            }
        }

        impl #impl_generics #from_node_trait for #name #ty_generics #dec_where_clause {
            fn read_node<__N: #node_trait>(parent: &__N) -> #tree_result_type<Self> {
                ::twine::record::read_record_node(parent)
            }

            fn read_node_into<__N: #node_trait>(&mut self, parent: &__N) -> #tree_result_type<()> {
                ::twine::record::read_record_node_into(self, parent)
            }
        }
    };
    Ok(gen)
}

/// Field name as written, without any `r#` prefix
fn unraw(id: &syn::Ident) -> String {
    id.to_string().trim_start_matches("r#").to_owned()
}
